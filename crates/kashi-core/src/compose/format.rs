use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A single view of processed lyrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LyricsFormat {
    Original,
    Hiragana,
    Katakana,
    Romaji,
    /// Original text with inline ruby annotations.
    Furigana,
}

impl LyricsFormat {
    pub const ALL: [LyricsFormat; 5] = [
        Self::Original,
        Self::Hiragana,
        Self::Katakana,
        Self::Romaji,
        Self::Furigana,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Hiragana => "hiragana",
            Self::Katakana => "katakana",
            Self::Romaji => "romaji",
            Self::Furigana => "furigana",
        }
    }
}

impl fmt::Display for LyricsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid format {0:?}: must be one of original, hiragana, katakana, romaji, furigana")]
pub struct FormatError(pub String);

impl FromStr for LyricsFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormatError(s.to_string()))
    }
}
