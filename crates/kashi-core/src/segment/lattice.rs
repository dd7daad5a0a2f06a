use tracing::{debug, debug_span};

use super::lexicon::Lexicon;
use crate::settings::settings;
use crate::unicode::{is_hiragana, is_ideographic, is_katakana};

/// Script of a character, used to group out-of-lexicon text into runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptClass {
    Kanji,
    Hiragana,
    Katakana,
    Latin,
    Digit,
    Space,
    Other,
}

impl ScriptClass {
    pub fn of(c: char) -> Self {
        if is_ideographic(c) {
            Self::Kanji
        } else if is_hiragana(c) {
            Self::Hiragana
        } else if is_katakana(c) {
            Self::Katakana
        } else if c.is_alphabetic() {
            Self::Latin
        } else if c.is_numeric() {
            Self::Digit
        } else if c.is_whitespace() {
            Self::Space
        } else {
            Self::Other
        }
    }

    fn is_kana(self) -> bool {
        matches!(self, Self::Hiragana | Self::Katakana)
    }

    /// Whether `c` extends a run of this class. ー continues either kana run.
    fn continues(self, c: char) -> bool {
        Self::of(c) == self || (self.is_kana() && c == 'ー')
    }
}

/// A node in the segmentation lattice.
#[derive(Debug, Clone)]
pub struct LatticeNode {
    /// Start position (char index, inclusive)
    pub start: usize,
    /// End position (char index, exclusive)
    pub end: usize,
    pub surface: String,
    /// Hiragana reading; `None` for unknown kanji and non-Japanese runs.
    pub reading: Option<String>,
    /// Word cost (lower = more preferred)
    pub cost: i64,
}

/// All candidate segmentations of a text.
pub struct Lattice {
    pub nodes: Vec<LatticeNode>,
    /// nodes_by_end[i] = indices of nodes that end at position i
    pub nodes_by_end: Vec<Vec<usize>>,
    /// nodes_by_start[i] = indices of nodes that start at position i
    pub nodes_by_start: Vec<Vec<usize>>,
    /// Number of characters in input
    pub char_count: usize,
}

impl Lattice {
    fn push(&mut self, node: LatticeNode) {
        let idx = self.nodes.len();
        self.nodes_by_start[node.start].push(idx);
        self.nodes_by_end[node.end].push(idx);
        self.nodes.push(node);
    }
}

/// Build a lattice over `text` from lexicon surface matches.
///
/// Every position gets an outgoing node: when the lexicon has no single-char
/// match there, an unknown node is added. Unknown kanji get one node per
/// character with no reading. Other scripts get one node for the same-script
/// run, which stops where a lexicon word begins so that particles following an
/// unlisted kana word stay separate.
pub fn build_lattice(lexicon: &Lexicon, text: &str) -> Lattice {
    let chars: Vec<char> = text.chars().collect();
    let char_count = chars.len();
    let _span = debug_span!("build_lattice", char_count).entered();
    let byte_offsets: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    let matches: Vec<_> = (0..char_count)
        .map(|start| lexicon.common_prefix_search(&text[byte_offsets[start]..]))
        .collect();

    let mut lattice = Lattice {
        nodes: Vec::new(),
        nodes_by_end: vec![Vec::new(); char_count + 1],
        nodes_by_start: vec![Vec::new(); char_count],
        char_count,
    };

    for start in 0..char_count {
        let suffix = &text[byte_offsets[start]..];
        let mut has_single_char_match = false;

        for m in &matches[start] {
            let surface = &suffix[..m.len];
            let len = surface.chars().count();
            if len == 1 {
                has_single_char_match = true;
            }
            for entry in m.entries {
                lattice.push(LatticeNode {
                    start,
                    end: start + len,
                    surface: surface.to_string(),
                    reading: Some(entry.reading.clone()),
                    cost: entry.cost as i64,
                });
            }
        }

        if !has_single_char_match {
            let class = ScriptClass::of(chars[start]);
            let end = unknown_end(&chars, start, class, |pos| !matches[pos].is_empty());
            lattice.push(unknown_node(
                start,
                end,
                &text[byte_offsets[start]..byte_offsets[end]],
                class,
            ));
        }
    }

    debug!(node_count = lattice.nodes.len());
    lattice
}

fn unknown_end(
    chars: &[char],
    start: usize,
    class: ScriptClass,
    word_starts_at: impl Fn(usize) -> bool,
) -> usize {
    if class == ScriptClass::Kanji {
        return start + 1;
    }
    let max_run = settings().segmenter.max_unknown_run;
    let mut end = start + 1;
    while end < chars.len()
        && end - start < max_run
        && class.continues(chars[end])
        && !word_starts_at(end)
    {
        end += 1;
    }
    end
}

fn unknown_node(start: usize, end: usize, surface: &str, class: ScriptClass) -> LatticeNode {
    let s = &settings().segmenter;
    let len = (end - start) as i64;
    let reading = class.is_kana().then(|| surface.to_string());
    LatticeNode {
        start,
        end,
        surface: surface.to_string(),
        reading,
        cost: s.unknown_word_cost + s.unknown_char_cost * len,
    }
}
