//! Hiragana-to-romaji transliteration.
//!
//! A table-driven syllable mapping with contextual rules for sokuon (っ),
//! hatsuon (ん), yōon (きゃ) and the prolonged sound mark (ー). Rules look
//! ahead across morpheme boundaries.

mod config;
mod table;
mod transliterate;

#[cfg(test)]
mod tests;

pub use config::{parse_kana_toml, KanaMappings, KanaTableError};
pub use table::{default_toml, KanaTable};
pub use transliterate::{transliterate, transliterate_str, transliterate_with};
