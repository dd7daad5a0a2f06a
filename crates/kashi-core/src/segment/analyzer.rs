use std::sync::Arc;

use tracing::debug_span;

use super::lattice::build_lattice;
use super::lexicon::Lexicon;
use super::viterbi::viterbi_best;
use super::{Morpheme, SegmentError, Segmenter};

/// Dictionary-backed segmenter: lexicon lattice plus 1-best Viterbi.
///
/// Text outside the lexicon is still covered (unknown kanji one character at
/// a time, other scripts as same-script runs), so segmentation never fails.
#[derive(Clone)]
pub struct LexiconSegmenter {
    lexicon: Arc<Lexicon>,
}

impl LexiconSegmenter {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Segmenter over the embedded seed lexicon.
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl Segmenter for LexiconSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Morpheme>, SegmentError> {
        let _span = debug_span!("segment", len = text.len()).entered();
        let lattice = build_lattice(&self.lexicon, text);
        let path = viterbi_best(&lattice);
        if path.is_empty() && !text.is_empty() {
            return Err(SegmentError::Failed("no segmentation path".to_string()));
        }
        Ok(path)
    }
}
