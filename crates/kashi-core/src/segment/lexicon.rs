use std::collections::{BTreeMap, HashSet};
use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use lexime_trie::{DoubleArray, TrieSearch};
use memmap2::Mmap;
use serde::{Deserialize, Serialize};

use super::source::parse_tsv;

const MAGIC: &[u8; 4] = b"KSLX";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 4 + 1 + 4 + 4; // magic + version + trie_len + values_len = 13

const BUILTIN_TSV: &str = include_str!("default_lexicon.tsv");

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected KSLX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<lexime_trie::TrieError> for LexiconError {
    fn from(e: lexime_trie::TrieError) -> Self {
        match e {
            lexime_trie::TrieError::InvalidMagic => LexiconError::InvalidMagic,
            lexime_trie::TrieError::InvalidVersion(_) => LexiconError::UnsupportedVersion(0),
            lexime_trie::TrieError::TruncatedData => LexiconError::InvalidHeader,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Hiragana reading.
    pub reading: String,
    pub cost: i16,
}

/// A lexicon match at the start of a query: `len` bytes of the query.
pub struct PrefixMatch<'a> {
    pub len: usize,
    pub entries: &'a [LexiconEntry],
}

/// Surface → readings dictionary stored in a double-array trie.
pub struct Lexicon {
    trie: DoubleArray<u8>,
    values: Vec<Vec<LexiconEntry>>,
}

impl Lexicon {
    /// Build from `(surface, entries)` pairs. Duplicate surfaces are merged and
    /// each surface's entries are ordered by cost.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<LexiconEntry>)>) -> Self {
        let mut merged: BTreeMap<String, Vec<LexiconEntry>> = BTreeMap::new();
        for (surface, list) in entries {
            merged.entry(surface).or_default().extend(list);
        }
        for list in merged.values_mut() {
            list.sort_by_key(|e| e.cost);
            let mut seen = HashSet::new();
            list.retain(|e| seen.insert(e.reading.clone()));
        }

        // BTreeMap<String, _> iterates in byte order, as DoubleArray::build requires.
        let keys: Vec<&[u8]> = merged.keys().map(|s| s.as_bytes()).collect();
        let trie = DoubleArray::<u8>::build(&keys);
        let values: Vec<Vec<LexiconEntry>> = merged.into_values().collect();

        Self { trie, values }
    }

    /// The seed lexicon embedded in the crate.
    pub fn builtin() -> Arc<Lexicon> {
        static INSTANCE: OnceLock<Arc<Lexicon>> = OnceLock::new();
        let lexicon = INSTANCE.get_or_init(|| {
            let entries = parse_tsv(BUILTIN_TSV).expect("embedded lexicon must be valid");
            Arc::new(Self::from_entries(entries))
        });
        Arc::clone(lexicon)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, LexiconError> {
        let trie_data = self.trie.as_bytes();
        let values_data = bincode::serialize(&self.values).map_err(LexiconError::Serialize)?;

        let trie_len: u32 = trie_data
            .len()
            .try_into()
            .map_err(|_| LexiconError::Parse("trie data exceeds u32::MAX".to_string()))?;
        let values_len: u32 = values_data
            .len()
            .try_into()
            .map_err(|_| LexiconError::Parse("values data exceeds u32::MAX".to_string()))?;

        let mut buf = Vec::with_capacity(HEADER_SIZE + trie_data.len() + values_data.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&trie_len.to_le_bytes());
        buf.extend_from_slice(&values_len.to_le_bytes());
        buf.extend_from_slice(&trie_data);
        buf.extend_from_slice(&values_data);

        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, LexiconError> {
        if data.len() < 5 {
            return Err(LexiconError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(LexiconError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(LexiconError::UnsupportedVersion(data[4]));
        }
        if data.len() < HEADER_SIZE {
            return Err(LexiconError::InvalidHeader);
        }

        let trie_len = read_u32(&data[5..9]) as usize;
        let values_len = read_u32(&data[9..13]) as usize;

        let expected = HEADER_SIZE + trie_len + values_len;
        if data.len() < expected {
            return Err(LexiconError::InvalidHeader);
        }

        let trie_start = HEADER_SIZE;
        let values_start = trie_start + trie_len;

        let trie = DoubleArray::<u8>::from_bytes(&data[trie_start..values_start])?;
        let values: Vec<Vec<LexiconEntry>> =
            bincode::deserialize(&data[values_start..values_start + values_len])
                .map_err(LexiconError::Deserialize)?;

        Ok(Self { trie, values })
    }

    /// Open a compiled lexicon, using mmap to avoid doubling peak memory.
    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped after deserialization completes below.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    pub fn save(&self, path: &Path) -> Result<(), LexiconError> {
        Ok(fs::write(path, self.to_bytes()?)?)
    }

    pub fn lookup(&self, surface: &str) -> Option<&[LexiconEntry]> {
        self.trie
            .exact_match(surface.as_bytes())
            .map(|id| self.values[id as usize].as_slice())
    }

    /// All lexicon surfaces that are prefixes of `query`, shortest first.
    pub fn common_prefix_search(&self, query: &str) -> Vec<PrefixMatch<'_>> {
        self.trie
            .common_prefix_search(query.as_bytes())
            .filter(|m| query.is_char_boundary(m.len))
            .map(|m| PrefixMatch {
                len: m.len,
                entries: self.values[m.value_id as usize].as_slice(),
            })
            .collect()
    }

    /// Returns (surface_count, entry_count).
    pub fn stats(&self) -> (usize, usize) {
        let surfaces = self.values.len();
        let entries: usize = self.values.iter().map(|v| v.len()).sum();
        (surfaces, entries)
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_le_bytes(buf)
}
