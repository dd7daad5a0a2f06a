//! Character-level Unicode classification for Japanese text.

/// Check the full Hiragana block (U+3040..U+309F). The block includes a few
/// unassigned codepoints (U+3040, U+3097-3098) which never appear in segmenter
/// readings, so the block-level check is kept for clarity.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes ー (U+30FC) and
/// the middle dot ・ (U+30FB).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// Kanji plus the ideographic marks that take a reading of their own in
/// lyrics: 々 (iteration), 〆 (closing), 〇 (zero) and the CJK compatibility
/// ideographs.
pub fn is_ideographic(c: char) -> bool {
    is_kanji(c)
        || matches!(c, '\u{3005}' | '\u{3006}' | '\u{3007}')
        || ('\u{F900}'..='\u{FAFF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// True if `text` contains at least one hiragana, katakana or kanji character.
pub fn contains_japanese(text: &str) -> bool {
    text.chars().any(|c| is_kana(c) || is_kanji(c))
}

pub fn contains_ideographic(text: &str) -> bool {
    text.chars().any(is_ideographic)
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{3041}'..='\u{3096}').contains(&c) || matches!(c, 'ゝ' | 'ゞ') {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Check if a string is a valid hiragana reading.
///
/// Accepts hiragana characters (U+3040..U+309F) and the prolonged sound mark
/// ー (U+30FC, technically katakana) which commonly appears in readings like
/// "らーめん".
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == 'ー')
}
