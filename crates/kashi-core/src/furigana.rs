//! Furigana alignment by common-affix stripping.
//!
//! A morpheme's reading is laid over its surface, the kana shared at both
//! ends (a leading honorific お, trailing okurigana) is peeled off, and what
//! remains of the surface is the kanji core that needs a reading aid.

use serde::Serialize;
use tracing::debug;

use crate::reading::{normalize, normalize_char};
use crate::segment::Document;
use crate::unicode::contains_ideographic;

/// The kanji core of one morpheme and its reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Byte offset of `base` within the surface.
    pub base_start: usize,
    pub base_end: usize,
    pub base: String,
    pub ruby: String,
}

/// A furigana annotation positioned in the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuriganaSpan {
    /// Byte offset of `base` in the original text.
    pub start: usize,
    pub end: usize,
    pub base: String,
    pub ruby: String,
}

/// Kana-equivalent comparison: katakana okurigana in a surface matches the
/// hiragana reading.
fn same_kana(a: char, b: char) -> bool {
    normalize_char(a) == normalize_char(b)
}

/// Byte offset of the `i`-th char, or `total` past the end.
fn byte_at(chars: &[(usize, char)], i: usize, total: usize) -> usize {
    chars.get(i).map_or(total, |&(b, _)| b)
}

/// Align `reading` (hiragana) over `surface`.
///
/// Returns `None` when no annotation is needed: the surface has no
/// ideographic character, the reading is empty or identical to the surface,
/// or stripping leaves no ideographic base. If stripping consumes the whole
/// reading the full reading is kept as ruby.
pub fn align(surface: &str, reading: &str) -> Option<Alignment> {
    if reading.is_empty() || reading == surface || !contains_ideographic(surface) {
        return None;
    }

    let s: Vec<(usize, char)> = surface.char_indices().collect();
    let r: Vec<(usize, char)> = reading.char_indices().collect();
    let max_affix = s.len().min(r.len());

    let prefix = s
        .iter()
        .zip(&r)
        .take_while(|((_, a), (_, b))| same_kana(*a, *b))
        .count();
    let suffix = s
        .iter()
        .rev()
        .zip(r.iter().rev())
        .take(max_affix - prefix)
        .take_while(|((_, a), (_, b))| same_kana(*a, *b))
        .count();

    let base_start = byte_at(&s, prefix, surface.len());
    let base_end = byte_at(&s, s.len() - suffix, surface.len());
    let base = &surface[base_start..base_end];
    if base.is_empty() || !contains_ideographic(base) {
        return None;
    }

    let ruby_start = byte_at(&r, prefix, reading.len());
    let ruby_end = byte_at(&r, r.len() - suffix, reading.len());
    let mut ruby = &reading[ruby_start..ruby_end];
    if ruby.is_empty() {
        debug!(surface, reading, "affix stripping left no ruby, using full reading");
        ruby = reading;
    }

    Some(Alignment {
        base_start,
        base_end,
        base: base.to_string(),
        ruby: ruby.to_string(),
    })
}

/// Align every morpheme of `doc`, in order. Morphemes without a reading
/// produce no span.
pub fn align_document(doc: &Document) -> Vec<FuriganaSpan> {
    doc.with_offsets()
        .filter_map(|(offset, m)| {
            let reading = normalize(m.reading()?);
            let a = align(&m.surface, &reading)?;
            Some(FuriganaSpan {
                start: offset + a.base_start,
                end: offset + a.base_end,
                base: a.base,
                ruby: a.ruby,
            })
        })
        .collect()
}
