//! Text lexicon sources: a plain TSV format and SudachiDict CSV.

use std::collections::BTreeMap;
use std::str::FromStr;

use super::lexicon::{LexiconEntry, LexiconError};
use crate::reading::normalize;
use crate::unicode::is_hiragana_reading;

/// Cost assigned to TSV entries without an explicit cost column.
pub const DEFAULT_COST: i16 = 3000;

/// Surface, cost and reading columns in a SudachiDict lexicon row.
const SUDACHI_SURFACE: usize = 0;
const SUDACHI_COST: usize = 3;
const SUDACHI_READING: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconSource {
    Tsv,
    Sudachi,
}

impl FromStr for LexiconSource {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tsv" => Ok(Self::Tsv),
            "sudachi" => Ok(Self::Sudachi),
            other => Err(LexiconError::Parse(format!("unknown lexicon source: {other}"))),
        }
    }
}

impl LexiconSource {
    pub fn parse(self, text: &str) -> Result<BTreeMap<String, Vec<LexiconEntry>>, LexiconError> {
        match self {
            Self::Tsv => parse_tsv(text),
            Self::Sudachi => parse_sudachi_csv(text),
        }
    }
}

/// Parse `surface<TAB>reading[<TAB>cost]` lines. Blank lines and lines
/// starting with `#` are skipped. Readings may be katakana or hiragana.
pub fn parse_tsv(text: &str) -> Result<BTreeMap<String, Vec<LexiconEntry>>, LexiconError> {
    let mut map: BTreeMap<String, Vec<LexiconEntry>> = BTreeMap::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let mut cols = line.split('\t');
        let surface = cols.next().unwrap_or_default();
        let reading = cols.next().unwrap_or_default();
        if surface.is_empty() || reading.is_empty() {
            return Err(LexiconError::Parse(format!(
                "line {}: expected surface<TAB>reading",
                lineno + 1
            )));
        }
        let reading = normalize(reading);
        if !is_hiragana_reading(&reading) {
            return Err(LexiconError::Parse(format!(
                "line {}: reading {reading:?} is not kana",
                lineno + 1
            )));
        }
        let cost = match cols.next() {
            Some(c) => parse_cost(c, lineno)?,
            None => DEFAULT_COST,
        };
        map.entry(surface.to_string())
            .or_default()
            .push(LexiconEntry { reading, cost });
    }
    Ok(map)
}

/// Parse SudachiDict lexicon CSV (18+ columns). Rows with a quoted surface
/// are skipped, as are rows whose reading is empty or not kana.
pub fn parse_sudachi_csv(text: &str) -> Result<BTreeMap<String, Vec<LexiconEntry>>, LexiconError> {
    let mut map: BTreeMap<String, Vec<LexiconEntry>> = BTreeMap::new();
    for (lineno, line) in text.lines().enumerate() {
        if line.is_empty() || line.starts_with('"') {
            continue;
        }
        let cols: Vec<&str> = line.split(',').collect();
        if cols.len() <= SUDACHI_READING {
            return Err(LexiconError::Parse(format!(
                "line {}: expected at least {} columns, got {}",
                lineno + 1,
                SUDACHI_READING + 1,
                cols.len()
            )));
        }
        let surface = cols[SUDACHI_SURFACE];
        let reading = normalize(cols[SUDACHI_READING]);
        if surface.is_empty() || !is_hiragana_reading(&reading) {
            continue;
        }
        let cost = parse_cost(cols[SUDACHI_COST], lineno)?;
        map.entry(surface.to_string())
            .or_default()
            .push(LexiconEntry { reading, cost });
    }
    Ok(map)
}

fn parse_cost(raw: &str, lineno: usize) -> Result<i16, LexiconError> {
    raw.trim()
        .parse()
        .map_err(|_| LexiconError::Parse(format!("line {}: invalid cost {raw:?}", lineno + 1)))
}
