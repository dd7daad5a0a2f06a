use kashi_core::romaji::{self, KanaTable};
use kashi_core::settings;

use super::read_file;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(read_file(file), "Error: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: segmenter.segment_penalty={}, cache.capacity={}, annotate={}…{}",
        s.segmenter.segment_penalty, s.cache.capacity, s.annotate.open, s.annotate.close
    );
}

pub fn kana_export() {
    print!("{}", romaji::default_toml());
}

pub fn kana_validate(file: &str) {
    let content = die!(read_file(file), "Error: {}");
    let mappings = die!(romaji::parse_kana_toml(&content), "Error: {}");
    println!(
        "OK: {} syllables, {} morpheme overrides",
        mappings.syllables.len(),
        mappings.morphemes.len()
    );
}

/// Install custom settings and kana table before anything reads the globals.
pub fn apply_overrides(settings_file: Option<&str>, kana_file: Option<&str>) {
    if let Some(file) = settings_file {
        let content = die!(read_file(file), "Error: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = kana_file {
        let content = die!(read_file(file), "Error: {}");
        die!(KanaTable::init_custom(content), "Error in {file}: {}");
    }
}
