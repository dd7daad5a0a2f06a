//! Phonetic reading aids for Japanese lyrics.
//!
//! A single segmentation pass feeds four synchronized views of the input:
//! the original text, a hiragana reading, a romaji transliteration and a
//! furigana overlay over the kanji-bearing spans.

pub mod cache;
pub mod compose;
pub mod furigana;
pub mod reading;
pub mod romaji;
pub mod segment;
pub mod settings;
pub mod unicode;

pub use compose::{Composer, LyricsFormat, ProcessError, ProcessedResult, Readings};
pub use furigana::FuriganaSpan;
pub use segment::{Document, Morpheme, SegmentError, Segmenter};
