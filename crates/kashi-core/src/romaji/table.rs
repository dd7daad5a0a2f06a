use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_kana_toml, KanaTableError};

pub(crate) const DEFAULT_TOML: &str = include_str!("default_kana.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default kana table TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Hiragana → romaji lookup table.
pub struct KanaTable {
    syllables: HashMap<String, String>,
    morphemes: HashMap<String, String>,
}

impl KanaTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), KanaTableError> {
        // Validate eagerly
        parse_kana_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| KanaTableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static KanaTable {
        static INSTANCE: OnceLock<KanaTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            Self::from_toml(toml_str).expect("kana table TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, KanaTableError> {
        let mappings = parse_kana_toml(toml_str)?;
        Ok(Self {
            syllables: mappings.syllables.into_iter().collect(),
            morphemes: mappings.morphemes.into_iter().collect(),
        })
    }

    /// Romanization of a single syllable (one kana or a digraph).
    pub fn syllable(&self, kana: &str) -> Option<&str> {
        self.syllables.get(kana).map(String::as_str)
    }

    /// Romanization override for a morpheme whose whole reading is `kana`.
    pub fn morpheme(&self, kana: &str) -> Option<&str> {
        self.morphemes.get(kana).map(String::as_str)
    }

    pub fn syllables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.syllables
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
