#![cfg(test)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::segment::{Morpheme, SegmentError, Segmenter};
use crate::unicode::{is_ideographic, is_kana};

/// Segmenter returning canned morphemes per input text and counting calls.
///
/// Unlisted text comes back as a single morpheme without a reading.
#[derive(Default)]
pub struct StubSegmenter {
    canned: HashMap<String, Vec<Morpheme>>,
    calls: AtomicUsize,
    fail: bool,
}

impl StubSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segmenter whose every call fails as unavailable.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with(mut self, text: &str, morphemes: &[(&str, Option<&str>)]) -> Self {
        let morphemes = morphemes
            .iter()
            .map(|&(surface, reading)| Morpheme {
                surface: surface.to_string(),
                reading: reading.map(str::to_string),
            })
            .collect();
        self.canned.insert(text.to_string(), morphemes);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Segmenter for StubSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Morpheme>, SegmentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SegmentError::Unavailable("stub".to_string()));
        }
        Ok(self
            .canned
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![Morpheme::bare(text)]))
    }
}

/// One morpheme per character. Kanji read as "かん", kana read as
/// themselves, everything else has no reading.
pub struct CharSegmenter;

impl Segmenter for CharSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Morpheme>, SegmentError> {
        Ok(text
            .chars()
            .map(|c| {
                let surface = c.to_string();
                if is_ideographic(c) {
                    Morpheme::new(surface, "かん")
                } else if is_kana(c) {
                    Morpheme::new(surface.clone(), surface)
                } else {
                    Morpheme::bare(surface)
                }
            })
            .collect())
    }
}

/// Segmenter that drops the last character of its input.
pub struct LossySegmenter;

impl Segmenter for LossySegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Morpheme>, SegmentError> {
        let mut chars = text.chars();
        chars.next_back();
        Ok(vec![Morpheme::bare(chars.as_str())])
    }
}
