//! Morphological segmentation boundary.
//!
//! The engine consumes any `Segmenter` that splits text into morphemes with
//! an optional kana reading. `LexiconSegmenter` is a dictionary-backed
//! implementation built on a surface-keyed trie and a 1-best Viterbi search.

mod analyzer;
mod lattice;
mod lexicon;
mod source;
mod viterbi;

pub use analyzer::LexiconSegmenter;
pub use lattice::{build_lattice, Lattice, LatticeNode, ScriptClass};
pub use lexicon::{Lexicon, LexiconEntry, LexiconError, PrefixMatch};
pub use source::{parse_sudachi_csv, parse_tsv, LexiconSource, DEFAULT_COST};

use std::sync::Arc;

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    #[error("segmenter unavailable: {0}")]
    Unavailable(String),
    #[error("segmentation failed: {0}")]
    Failed(String),
    #[error("segmenter output diverges from input at byte {offset}")]
    Mismatch { offset: usize },
}

/// A segmentation unit: surface form plus optional kana reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Morpheme {
    pub surface: String,
    /// Kana reading; `None` for punctuation, Latin runs, digits and symbols.
    pub reading: Option<String>,
}

impl Morpheme {
    pub fn new(surface: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: Some(reading.into()),
        }
    }

    /// A morpheme without a reading.
    pub fn bare(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: None,
        }
    }

    /// The reading, treating an empty string as absent.
    pub fn reading(&self) -> Option<&str> {
        self.reading.as_deref().filter(|r| !r.is_empty())
    }
}

/// Ordered morphemes whose surfaces reconstruct the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    morphemes: Vec<Morpheme>,
}

impl Document {
    /// Wrap segmenter output, checking that the surfaces concatenate back to `text`.
    pub fn new(text: &str, morphemes: Vec<Morpheme>) -> Result<Self, SegmentError> {
        let mut offset = 0;
        for m in &morphemes {
            if !text[offset..].starts_with(m.surface.as_str()) {
                return Err(SegmentError::Mismatch { offset });
            }
            offset += m.surface.len();
        }
        if offset != text.len() {
            return Err(SegmentError::Mismatch { offset });
        }
        Ok(Self { morphemes })
    }

    /// Segment `text` with `segmenter` and validate the result.
    pub fn segment<S: Segmenter + ?Sized>(segmenter: &S, text: &str) -> Result<Self, SegmentError> {
        Self::new(text, segmenter.segment(text)?)
    }

    pub fn morphemes(&self) -> &[Morpheme] {
        &self.morphemes
    }

    pub fn is_empty(&self) -> bool {
        self.morphemes.is_empty()
    }

    /// Concatenated surfaces, equal to the segmented input.
    pub fn text(&self) -> String {
        self.morphemes.iter().map(|m| m.surface.as_str()).collect()
    }

    /// Morphemes paired with the byte offset of their surface in the input.
    pub fn with_offsets(&self) -> impl Iterator<Item = (usize, &Morpheme)> {
        self.morphemes.iter().scan(0usize, |offset, m| {
            let start = *offset;
            *offset += m.surface.len();
            Some((start, m))
        })
    }
}

/// Splits text into morphemes. Implementations must be total: the returned
/// surfaces, concatenated in order, equal `text`.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Result<Vec<Morpheme>, SegmentError>;
}

impl<S: Segmenter + ?Sized> Segmenter for &S {
    fn segment(&self, text: &str) -> Result<Vec<Morpheme>, SegmentError> {
        (**self).segment(text)
    }
}

impl<S: Segmenter + ?Sized> Segmenter for Arc<S> {
    fn segment(&self, text: &str) -> Result<Vec<Morpheme>, SegmentError> {
        (**self).segment(text)
    }
}

impl<S: Segmenter + ?Sized> Segmenter for Box<S> {
    fn segment(&self, text: &str) -> Result<Vec<Morpheme>, SegmentError> {
        (**self).segment(text)
    }
}
