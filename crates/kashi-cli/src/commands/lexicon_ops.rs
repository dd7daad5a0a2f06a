use std::path::Path;
use std::sync::Arc;

use tracing::info;

use kashi_core::segment::{Lexicon, LexiconSegmenter, LexiconSource};

use super::read_file;
use crate::CliError;

/// Load a lexicon by file extension: `.tsv` and `.csv` (SudachiDict) text
/// sources are compiled in memory, anything else is opened as a compiled
/// lexicon.
pub fn load_lexicon(path: &str) -> Result<Lexicon, CliError> {
    let source = match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("tsv") => Some(LexiconSource::Tsv),
        Some("csv") => Some(LexiconSource::Sudachi),
        _ => None,
    };
    let lexicon = match source {
        Some(source) => Lexicon::from_entries(source.parse(&read_file(path)?)?),
        None => Lexicon::open(Path::new(path))?,
    };
    let (surfaces, entries) = lexicon.stats();
    info!(path, surfaces, entries, "lexicon loaded");
    Ok(lexicon)
}

/// Segmenter over `path`, or the embedded seed lexicon.
pub fn open_segmenter(path: Option<&str>) -> LexiconSegmenter {
    match path {
        Some(path) => {
            let lexicon = die!(load_lexicon(path), "Error loading lexicon {path}: {}");
            LexiconSegmenter::new(Arc::new(lexicon))
        }
        None => LexiconSegmenter::builtin(),
    }
}

pub fn compile(source_name: &str, input_file: &str, output_file: &str) {
    let source: LexiconSource = die!(source_name.parse(), "Error: {} (available: tsv, sudachi)");
    let content = die!(read_file(input_file), "Error: {}");
    let entries = die!(source.parse(&content), "Error parsing {input_file}: {}");

    let surface_count = entries.len();
    let entry_count: usize = entries.values().map(|v| v.len()).sum();
    eprintln!("Building trie from {surface_count} surfaces ({entry_count} entries)...");

    let lexicon = Lexicon::from_entries(entries);
    die!(
        lexicon.save(Path::new(output_file)),
        "Error writing lexicon: {}"
    );
    eprintln!("Wrote {output_file}");
}

pub fn stats(file: &str) {
    let lexicon = die!(load_lexicon(file), "Error loading lexicon {file}: {}");
    let (surfaces, entries) = lexicon.stats();
    println!("surfaces: {surfaces}");
    println!("entries:  {entries}");
}

pub fn lookup(lexicon: Option<&str>, surface: &str) {
    let segmenter = open_segmenter(lexicon);
    match segmenter.lexicon().lookup(surface) {
        Some(entries) => {
            for e in entries {
                println!("{surface}\t{}\t{}", e.reading, e.cost);
            }
        }
        None => {
            eprintln!("{surface}: not found");
            std::process::exit(1);
        }
    }
}

pub fn prefix(lexicon: Option<&str>, query: &str) {
    let segmenter = open_segmenter(lexicon);
    for m in segmenter.lexicon().common_prefix_search(query) {
        let surface = &query[..m.len];
        for e in m.entries {
            println!("{surface}\t{}\t{}", e.reading, e.cost);
        }
    }
}
