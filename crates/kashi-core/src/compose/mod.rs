//! View composition: one segmentation pass, four synchronized views.
//!
//! `compose` derives the hiragana reading, romaji transliteration and
//! furigana overlay from a single `Document`. `Composer` wraps a segmenter
//! and an optional result cache so that every view of the same text is
//! served from one segmenter call.

mod format;
pub(crate) mod testutil;

#[cfg(test)]
mod tests;

pub use format::{FormatError, LyricsFormat};

use std::num::NonZeroUsize;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::cache::{CacheStats, ResultCache};
use crate::furigana::{align_document, FuriganaSpan};
use crate::reading::normalize;
use crate::romaji::transliterate;
use crate::segment::{Document, SegmentError, Segmenter};
use crate::settings::settings;
use crate::unicode::hiragana_to_katakana;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error(transparent)]
    Segment(#[from] SegmentError),
}

/// All views of one input text, derived from a single segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedResult {
    pub original: String,
    pub hiragana: String,
    pub romaji: String,
    /// Ordered, non-overlapping spans with byte offsets into `original`.
    pub furigana: Vec<FuriganaSpan>,
}

impl ProcessedResult {
    pub fn empty() -> Self {
        Self {
            original: String::new(),
            hiragana: String::new(),
            romaji: String::new(),
            furigana: Vec::new(),
        }
    }

    pub fn katakana(&self) -> String {
        hiragana_to_katakana(&self.hiragana)
    }

    /// Original text with each furigana base followed by its ruby, using the
    /// configured delimiters.
    pub fn annotated(&self) -> String {
        let a = &settings().annotate;
        annotate_with(self, &a.open, &a.close)
    }

    pub fn view(&self, format: LyricsFormat) -> String {
        match format {
            LyricsFormat::Original => self.original.clone(),
            LyricsFormat::Hiragana => self.hiragana.clone(),
            LyricsFormat::Katakana => self.katakana(),
            LyricsFormat::Romaji => self.romaji.clone(),
            LyricsFormat::Furigana => self.annotated(),
        }
    }
}

/// Derive every view from one segmented document.
///
/// Morphemes without a reading contribute their surface to the hiragana and
/// romaji streams unchanged.
pub fn compose(doc: &Document) -> ProcessedResult {
    let _span = debug_span!("compose", morphemes = doc.morphemes().len()).entered();

    let stream: Vec<String> = doc
        .morphemes()
        .iter()
        .map(|m| match m.reading() {
            Some(r) => normalize(r),
            None => m.surface.clone(),
        })
        .collect();

    ProcessedResult {
        original: doc.text(),
        hiragana: stream.concat(),
        romaji: transliterate(&stream),
        furigana: align_document(doc),
    }
}

/// Insert `open ruby close` after each furigana base. Text outside the spans
/// is copied through in order.
pub fn annotate_with(result: &ProcessedResult, open: &str, close: &str) -> String {
    let text = &result.original;
    let extra: usize = result
        .furigana
        .iter()
        .map(|s| s.ruby.len() + open.len() + close.len())
        .sum();
    let mut out = String::with_capacity(text.len() + extra);

    let mut cursor = 0;
    for span in &result.furigana {
        out.push_str(&text[cursor..span.end]);
        out.push_str(open);
        out.push_str(&span.ruby);
        out.push_str(close);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Every reading form of a text plus the distinct ones, in the order
/// original, hiragana, romaji, katakana.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readings {
    pub original: String,
    pub hiragana: String,
    pub romaji: String,
    pub katakana: String,
    pub distinct: Vec<String>,
}

impl From<&ProcessedResult> for Readings {
    fn from(result: &ProcessedResult) -> Self {
        let katakana = result.katakana();
        let mut distinct: Vec<String> = Vec::with_capacity(4);
        for form in [&result.original, &result.hiragana, &result.romaji, &katakana] {
            if !distinct.contains(form) {
                distinct.push(form.clone());
            }
        }
        Self {
            original: result.original.clone(),
            hiragana: result.hiragana.clone(),
            romaji: result.romaji.clone(),
            katakana,
            distinct,
        }
    }
}

/// Segmenter plus optional memo cache.
pub struct Composer<S> {
    segmenter: S,
    cache: Option<ResultCache>,
}

impl<S: Segmenter> Composer<S> {
    pub fn new(segmenter: S) -> Self {
        Self {
            segmenter,
            cache: None,
        }
    }

    /// Attach an LRU cache holding up to `capacity` results.
    pub fn with_cache(mut self, capacity: NonZeroUsize) -> Self {
        self.cache = Some(ResultCache::new(capacity));
        self
    }

    /// Attach an LRU cache sized from settings.
    pub fn with_default_cache(self) -> Self {
        match NonZeroUsize::new(settings().cache.capacity) {
            Some(capacity) => self.with_cache(capacity),
            None => self,
        }
    }

    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// Segment `text` once and derive every view.
    ///
    /// Segmenter failures are returned as errors, never as an empty result.
    /// Empty input yields an empty result without calling the segmenter.
    pub fn process(&self, text: &str) -> Result<Arc<ProcessedResult>, ProcessError> {
        let _span = debug_span!("process", len = text.len()).entered();
        if text.is_empty() {
            return Ok(Arc::new(ProcessedResult::empty()));
        }

        if let Some(hit) = self.cache.as_ref().and_then(|c| c.get(text)) {
            debug!("cache hit");
            return Ok(hit);
        }

        let doc = Document::segment(&self.segmenter, text)?;
        let result = Arc::new(compose(&doc));

        if let Some(cache) = &self.cache {
            cache.insert(text.to_string(), Arc::clone(&result));
        }
        Ok(result)
    }

    /// Original text with inline ruby annotations.
    pub fn annotate(&self, text: &str) -> Result<String, ProcessError> {
        Ok(self.process(text)?.annotated())
    }

    pub fn render(&self, text: &str, format: LyricsFormat) -> Result<String, ProcessError> {
        Ok(self.process(text)?.view(format))
    }

    pub fn readings(&self, text: &str) -> Result<Readings, ProcessError> {
        Ok(Readings::from(&*self.process(text)?))
    }

    /// `None` when no cache is attached.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(ResultCache::stats)
    }
}
