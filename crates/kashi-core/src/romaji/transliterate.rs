use tracing::trace;

use super::table::KanaTable;

/// Small kana that combine with the preceding kana into one syllable.
fn is_combining_small(c: char) -> bool {
    matches!(
        c,
        'ゃ' | 'ゅ' | 'ょ' | 'ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ' | 'ゎ'
    )
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// One romanization unit of the flattened kana stream.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Unit<'a> {
    Syllable(&'a str),
    Sokuon,
    Nasal,
    Prolong,
    Other(char),
}

/// Split one morpheme's reading into units, appending to `units`.
fn tokenize<'t>(table: &'t KanaTable, reading: &str, units: &mut Vec<Unit<'t>>) {
    if let Some(romaji) = table.morpheme(reading) {
        units.push(Unit::Syllable(romaji));
        return;
    }

    let mut chars = reading.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            'っ' => units.push(Unit::Sokuon),
            'ん' => units.push(Unit::Nasal),
            'ー' => units.push(Unit::Prolong),
            _ => {
                if let Some(&(j, next)) = chars.peek() {
                    if is_combining_small(next) {
                        let digraph = &reading[i..j + next.len_utf8()];
                        if let Some(romaji) = table.syllable(digraph) {
                            units.push(Unit::Syllable(romaji));
                            chars.next();
                            continue;
                        }
                    }
                }
                match table.syllable(&reading[i..i + c.len_utf8()]) {
                    Some(romaji) => units.push(Unit::Syllable(romaji)),
                    None => units.push(Unit::Other(c)),
                }
            }
        }
    }
}

/// Consonant written for っ before `next`, or `None` when there is nothing to
/// geminate (vowel-initial syllable, ん, ー, non-kana, end of stream).
fn geminate(next: Option<&Unit<'_>>) -> Option<char> {
    let Some(Unit::Syllable(romaji)) = next else {
        return None;
    };
    let first = romaji.chars().next()?;
    if is_vowel(first) {
        return None;
    }
    // Hepburn writes っち as "tchi", not "cchi".
    if romaji.starts_with("ch") {
        Some('t')
    } else {
        Some(first)
    }
}

fn nasal(next: Option<&Unit<'_>>) -> &'static str {
    let Some(Unit::Syllable(romaji)) = next else {
        return "n";
    };
    match romaji.chars().next() {
        Some('b' | 'p' | 'm') => "m",
        Some(c) if is_vowel(c) || c == 'y' => "n'",
        _ => "n",
    }
}

fn render(units: &[Unit<'_>]) -> String {
    let mut out = String::with_capacity(units.len() * 3);
    let mut last_vowel: Option<char> = None;

    for (i, unit) in units.iter().enumerate() {
        let next = units.get(i + 1);
        match *unit {
            Unit::Syllable(romaji) => {
                out.push_str(romaji);
                last_vowel = romaji.chars().last().filter(|&c| is_vowel(c));
            }
            Unit::Sokuon => {
                match geminate(next) {
                    Some(consonant) => out.push(consonant),
                    None => {
                        trace!("sokuon without gemination target");
                        out.push_str("t'");
                    }
                }
                last_vowel = None;
            }
            Unit::Nasal => {
                out.push_str(nasal(next));
                last_vowel = None;
            }
            // ーー repeats the vowel twice, so last_vowel is kept.
            Unit::Prolong => match last_vowel {
                Some(v) => out.push(v),
                None => out.push('ー'),
            },
            Unit::Other(c) => {
                out.push(c);
                last_vowel = None;
            }
        }
    }

    out
}

/// Transliterate a stream of per-morpheme hiragana readings with an explicit table.
///
/// Morpheme boundaries leave no trace in the output, but they decide which
/// whole-morpheme overrides apply (a lone は particle becomes "wa").
pub fn transliterate_with<S: AsRef<str>>(table: &KanaTable, morphemes: &[S]) -> String {
    let mut units = Vec::new();
    for morpheme in morphemes {
        tokenize(table, morpheme.as_ref(), &mut units);
    }
    render(&units)
}

/// Transliterate a stream of per-morpheme hiragana readings using the global table.
///
/// Never fails: characters outside the table pass through unchanged.
pub fn transliterate<S: AsRef<str>>(morphemes: &[S]) -> String {
    transliterate_with(KanaTable::global(), morphemes)
}

/// Transliterate a single hiragana string treated as one morpheme.
pub fn transliterate_str(hiragana: &str) -> String {
    transliterate(&[hiragana])
}
