use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::is_hiragana;

#[derive(Deserialize)]
struct KanaConfig {
    syllables: BTreeMap<String, String>,
    #[serde(default)]
    morphemes: BTreeMap<String, String>,
}

/// Parsed and validated contents of a kana table TOML.
#[derive(Debug)]
pub struct KanaMappings {
    pub syllables: BTreeMap<String, String>,
    pub morphemes: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum KanaTableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[syllables] table is empty")]
    Empty,
    #[error("non-hiragana key: {0}")]
    NonKanaKey(String),
    #[error("syllable key longer than two kana: {0}")]
    KeyTooLong(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("non-ASCII value for key: {0}")]
    NonAsciiValue(String),
    #[error("kana table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into validated syllable and morpheme mappings.
pub fn parse_kana_toml(toml_str: &str) -> Result<KanaMappings, KanaTableError> {
    let config: KanaConfig =
        toml::from_str(toml_str).map_err(|e| KanaTableError::Parse(e.to_string()))?;

    if config.syllables.is_empty() {
        return Err(KanaTableError::Empty);
    }

    for (key, value) in &config.syllables {
        check_entry(key, value)?;
        if key.chars().count() > 2 {
            return Err(KanaTableError::KeyTooLong(key.clone()));
        }
    }
    for (key, value) in &config.morphemes {
        check_entry(key, value)?;
    }

    Ok(KanaMappings {
        syllables: config.syllables,
        morphemes: config.morphemes,
    })
}

fn check_entry(key: &str, value: &str) -> Result<(), KanaTableError> {
    if key.is_empty() || !key.chars().all(|c| is_hiragana(c) || c == 'ー') {
        return Err(KanaTableError::NonKanaKey(key.to_string()));
    }
    if value.is_empty() {
        return Err(KanaTableError::EmptyValue(key.to_string()));
    }
    if !value.is_ascii() {
        return Err(KanaTableError::NonAsciiValue(key.to_string()));
    }
    Ok(())
}
