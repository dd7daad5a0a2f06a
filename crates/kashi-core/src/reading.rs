//! Reading normalization: segmenter readings arrive in katakana and are
//! folded into canonical hiragana before alignment and transliteration.

/// Offset between a katakana syllable and its hiragana counterpart.
const KANA_OFFSET: u32 = 0x60;

/// Convert a single character to hiragana if it is a katakana syllable
/// (ァ..ヶ) or iteration mark (ヽ ヾ). Every other scalar, including ー,
/// ・, ヷ..ヺ and hiragana, is returned unchanged.
pub fn normalize_char(c: char) -> char {
    if ('\u{30A1}'..='\u{30F6}').contains(&c) || matches!(c, 'ヽ' | 'ヾ') {
        char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Normalize a reading to hiragana.
///
/// Total and idempotent: the output never contains a character that
/// `normalize_char` would change again.
pub fn normalize(reading: &str) -> String {
    reading.chars().map(normalize_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn katakana_to_hiragana() {
        assert_eq!(normalize("タベル"), "たべる");
        assert_eq!(normalize("キョウ"), "きょう");
        assert_eq!(normalize("ガッコウ"), "がっこう");
        assert_eq!(normalize("ヴ"), "ゔ");
        assert_eq!(normalize("ヵヶ"), "ゕゖ");
        assert_eq!(normalize("ヽヾ"), "ゝゞ");
    }

    #[test]
    fn prolonged_mark_survives() {
        assert_eq!(normalize("ラーメン"), "らーめん");
        assert_eq!(normalize("ー"), "ー");
    }

    #[test]
    fn passthrough() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("すでに"), "すでに");
        assert_eq!(normalize("Hello, 123!"), "Hello, 123!");
        assert_eq!(normalize("漢字"), "漢字");
        assert_eq!(normalize("〜・"), "〜・");
        // ヷ..ヺ have no hiragana counterpart
        assert_eq!(normalize("ヷヸヹヺ"), "ヷヸヹヺ");
    }

    proptest! {
        #[test]
        fn idempotent(s in "[\\u{3040}-\\u{30FF}a-z0-9 ]{0,32}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn preserves_char_count(s in "\\PC{0,32}") {
            prop_assert_eq!(normalize(&s).chars().count(), s.chars().count());
        }
    }
}
