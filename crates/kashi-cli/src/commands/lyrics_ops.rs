//! Lyrics commands. Input is processed line by line through one composer, so
//! repeated lines (choruses) are served from the result cache.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use kashi_core::reading::normalize;
use kashi_core::romaji::transliterate_str;
use kashi_core::segment::{Document, LexiconSegmenter};
use kashi_core::unicode::contains_japanese;
use kashi_core::{Composer, LyricsFormat, ProcessedResult};

use super::read_input;
use crate::ruby;
use crate::CliError;

pub type LyricsComposer = Composer<LexiconSegmenter>;

pub fn composer(segmenter: LexiconSegmenter) -> LyricsComposer {
    Composer::new(segmenter).with_default_cache()
}

/// Process every line of the input, in order.
fn process_lines(
    composer: &LyricsComposer,
    file: Option<&str>,
) -> Result<Vec<Arc<ProcessedResult>>, CliError> {
    let input = read_input(file)?;
    let results = input
        .lines()
        .map(|line| composer.process(line))
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(stats) = composer.cache_stats() {
        info!(
            lines = results.len(),
            hits = stats.hits,
            misses = stats.misses,
            "processed"
        );
    }
    Ok(results)
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", die!(serde_json::to_string(value), "Error: {}"));
}

pub fn process(composer: &LyricsComposer, file: Option<&str>, json: bool) {
    let results = die!(process_lines(composer, file), "Error: {}");
    for (i, r) in results.iter().enumerate() {
        if json {
            print_json(&**r);
            continue;
        }
        if i > 0 {
            println!();
        }
        println!("original: {}", r.original);
        println!("hiragana: {}", r.hiragana);
        println!("romaji:   {}", r.romaji);
        println!("furigana: {}", r.annotated());
    }
}

pub fn view(composer: &LyricsComposer, format: &str, file: Option<&str>) {
    let format: LyricsFormat = die!(format.parse(), "Error: {}");
    let results = die!(process_lines(composer, file), "Error: {}");
    for r in &results {
        println!("{}", r.view(format));
    }
}

pub fn annotate(composer: &LyricsComposer, file: Option<&str>) {
    view(composer, LyricsFormat::Furigana.name(), file);
}

pub fn ruby(composer: &LyricsComposer, file: Option<&str>) {
    let results = die!(process_lines(composer, file), "Error: {}");
    for r in &results {
        let (top, bottom) = ruby::layout(r);
        if !top.is_empty() {
            println!("{top}");
        }
        println!("{bottom}");
    }
}

pub fn segment(composer: &LyricsComposer, file: Option<&str>) {
    let input = die!(read_input(file), "Error: {}");
    for line in input.lines() {
        let doc = die!(Document::segment(composer.segmenter(), line), "Error: {}");
        let parts: Vec<String> = doc
            .morphemes()
            .iter()
            .map(|m| match m.reading() {
                Some(r) => format!("{}({r})", m.surface),
                None => m.surface.clone(),
            })
            .collect();
        println!("{}", parts.join(" | "));
    }
}

pub fn romaji(kana: &str) {
    println!("{}", transliterate_str(&normalize(kana)));
}

/// Lines without any Japanese text have no alternate readings and are skipped.
pub fn readings(composer: &LyricsComposer, file: Option<&str>) {
    let input = die!(read_input(file), "Error: {}");
    for line in input.lines().filter(|l| contains_japanese(l)) {
        let readings = die!(composer.readings(line), "Error: {}");
        print_json(&readings);
    }
}
