use super::*;

const BASE: &[(&str, &str)] = &[
    ("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o"),
    ("か", "ka"), ("き", "ki"), ("く", "ku"), ("け", "ke"), ("こ", "ko"),
    ("さ", "sa"), ("し", "shi"), ("す", "su"), ("せ", "se"), ("そ", "so"),
    ("た", "ta"), ("ち", "chi"), ("つ", "tsu"), ("て", "te"), ("と", "to"),
    ("な", "na"), ("に", "ni"), ("ぬ", "nu"), ("ね", "ne"), ("の", "no"),
    ("は", "ha"), ("ひ", "hi"), ("ふ", "fu"), ("へ", "he"), ("ほ", "ho"),
    ("ま", "ma"), ("み", "mi"), ("む", "mu"), ("め", "me"), ("も", "mo"),
    ("や", "ya"), ("ゆ", "yu"), ("よ", "yo"),
    ("ら", "ra"), ("り", "ri"), ("る", "ru"), ("れ", "re"), ("ろ", "ro"),
    ("わ", "wa"), ("を", "wo"), ("ん", "n"),
];

const VOICED: &[(&str, &str)] = &[
    ("が", "ga"), ("ぎ", "gi"), ("ぐ", "gu"), ("げ", "ge"), ("ご", "go"),
    ("ざ", "za"), ("じ", "ji"), ("ず", "zu"), ("ぜ", "ze"), ("ぞ", "zo"),
    ("だ", "da"), ("ぢ", "ji"), ("づ", "zu"), ("で", "de"), ("ど", "do"),
    ("ば", "ba"), ("び", "bi"), ("ぶ", "bu"), ("べ", "be"), ("ぼ", "bo"),
    ("ゔ", "vu"),
    ("ぱ", "pa"), ("ぴ", "pi"), ("ぷ", "pu"), ("ぺ", "pe"), ("ぽ", "po"),
];

const SMALL_AND_ARCHAIC: &[(&str, &str)] = &[
    ("ゐ", "wi"), ("ゑ", "we"),
    ("ぁ", "a"), ("ぃ", "i"), ("ぅ", "u"), ("ぇ", "e"), ("ぉ", "o"),
    ("ゃ", "ya"), ("ゅ", "yu"), ("ょ", "yo"), ("ゎ", "wa"),
    ("ゕ", "ka"), ("ゖ", "ke"),
];

const YOUON: &[(&str, &str)] = &[
    ("きゃ", "kya"), ("きゅ", "kyu"), ("きょ", "kyo"),
    ("ぎゃ", "gya"), ("ぎゅ", "gyu"), ("ぎょ", "gyo"),
    ("しゃ", "sha"), ("しゅ", "shu"), ("しょ", "sho"),
    ("じゃ", "ja"), ("じゅ", "ju"), ("じょ", "jo"),
    ("ちゃ", "cha"), ("ちゅ", "chu"), ("ちょ", "cho"),
    ("ぢゃ", "ja"), ("ぢゅ", "ju"), ("ぢょ", "jo"),
    ("にゃ", "nya"), ("にゅ", "nyu"), ("にょ", "nyo"),
    ("ひゃ", "hya"), ("ひゅ", "hyu"), ("ひょ", "hyo"),
    ("びゃ", "bya"), ("びゅ", "byu"), ("びょ", "byo"),
    ("ぴゃ", "pya"), ("ぴゅ", "pyu"), ("ぴょ", "pyo"),
    ("みゃ", "mya"), ("みゅ", "myu"), ("みょ", "myo"),
    ("りゃ", "rya"), ("りゅ", "ryu"), ("りょ", "ryo"),
];

const LOANWORD: &[(&str, &str)] = &[
    ("いぇ", "ye"), ("うぃ", "wi"), ("うぇ", "we"), ("うぉ", "wo"),
    ("くぁ", "kwa"), ("ぐぁ", "gwa"),
    ("しぇ", "she"), ("じぇ", "je"), ("ちぇ", "che"),
    ("つぁ", "tsa"), ("つぃ", "tsi"), ("つぇ", "tse"), ("つぉ", "tso"),
    ("てぃ", "ti"), ("でぃ", "di"), ("てゅ", "tyu"), ("でゅ", "dyu"),
    ("とぅ", "tu"), ("どぅ", "du"),
    ("ふぁ", "fa"), ("ふぃ", "fi"), ("ふぇ", "fe"), ("ふぉ", "fo"), ("ふゅ", "fyu"),
    ("ゔぁ", "va"), ("ゔぃ", "vi"), ("ゔぇ", "ve"), ("ゔぉ", "vo"),
];

fn all_groups() -> impl Iterator<Item = &'static (&'static str, &'static str)> {
    BASE.iter()
        .chain(VOICED)
        .chain(SMALL_AND_ARCHAIC)
        .chain(YOUON)
        .chain(LOANWORD)
}

// ---------------------------------------------------------------------------
// Table coverage
// ---------------------------------------------------------------------------

#[test]
fn table_covers_every_syllable() {
    let table = KanaTable::global();
    for &(kana, romaji) in all_groups() {
        assert_eq!(table.syllable(kana), Some(romaji), "syllable {kana}");
    }
}

#[test]
fn table_has_no_unlisted_entries() {
    let table = KanaTable::global();
    let listed: std::collections::HashSet<&str> = all_groups().map(|&(k, _)| k).collect();
    for (kana, _) in table.syllables() {
        assert!(listed.contains(kana), "unlisted table entry {kana}");
    }
    assert_eq!(table.syllables().count(), listed.len());
}

#[test]
fn base_count() {
    assert_eq!(BASE.len(), 46);
}

#[test]
fn every_syllable_transliterates() {
    for &(kana, romaji) in all_groups() {
        // Embed in a carrier so whole-morpheme overrides (は, へ) do not apply.
        let input = format!("{kana}か");
        let expected = if kana == "ん" {
            "nka".to_string()
        } else {
            format!("{romaji}ka")
        };
        assert_eq!(transliterate_str(&input), expected, "input {input}");
    }
}

#[test]
fn every_digraph_is_one_syllable() {
    for &(kana, romaji) in YOUON.iter().chain(LOANWORD) {
        let out = transliterate_str(&format!("か{kana}"));
        assert_eq!(out, format!("ka{romaji}"), "digraph {kana}");
    }
}

// ---------------------------------------------------------------------------
// Sokuon
// ---------------------------------------------------------------------------

#[test]
fn sokuon_doubles_consonant() {
    assert_eq!(transliterate_str("がっこう"), "gakkou");
    assert_eq!(transliterate_str("きって"), "kitte");
    assert_eq!(transliterate_str("ざっし"), "zasshi");
    assert_eq!(transliterate_str("いっぱい"), "ippai");
}

#[test]
fn sokuon_before_digraph() {
    assert_eq!(transliterate_str("しゅっしゃ"), "shussha");
    assert_eq!(transliterate_str("ちょっきょ"), "chokkyo");
}

#[test]
fn sokuon_before_chi_uses_t() {
    assert_eq!(transliterate_str("まっちゃ"), "matcha");
    assert_eq!(transliterate_str("いっち"), "itchi");
}

#[test]
fn sokuon_malformed() {
    assert_eq!(transliterate_str("あっ"), "at'");
    assert_eq!(transliterate_str("っあ"), "t'a");
    assert_eq!(transliterate_str("あっん"), "at'n");
    assert_eq!(transliterate_str("っ!"), "t'!");
}

#[test]
fn sokuon_across_morphemes() {
    assert_eq!(transliterate(&["いっ", "て"]), "itte");
    assert_eq!(transliterate(&["まっ", "ちゃ"]), "matcha");
}

// ---------------------------------------------------------------------------
// Hatsuon
// ---------------------------------------------------------------------------

#[test]
fn nasal_default() {
    assert_eq!(transliterate_str("ほんと"), "honto");
    assert_eq!(transliterate_str("ん"), "n");
    assert_eq!(transliterate_str("みかん"), "mikan");
}

#[test]
fn nasal_before_labial() {
    assert_eq!(transliterate_str("さんぽ"), "sampo");
    assert_eq!(transliterate_str("しんぶん"), "shimbun");
    assert_eq!(transliterate_str("うんめい"), "ummei");
}

#[test]
fn nasal_before_vowel_or_y() {
    assert_eq!(transliterate_str("きんえん"), "kin'en");
    assert_eq!(transliterate_str("こんや"), "kon'ya");
    assert_eq!(transliterate_str("はんにゃ"), "hannya");
}

#[test]
fn nasal_before_ch_is_plain() {
    assert_eq!(transliterate_str("こんにち"), "konnichi");
    assert_eq!(transliterate_str("かんちがい"), "kanchigai");
}

#[test]
fn nasal_across_morphemes() {
    assert_eq!(transliterate(&["しん", "ぱい"]), "shimpai");
    assert_eq!(transliterate(&["ほん", "や"]), "hon'ya");
    assert_eq!(transliterate(&["ほん", "を"]), "honwo");
}

// ---------------------------------------------------------------------------
// Prolonged sound mark
// ---------------------------------------------------------------------------

#[test]
fn prolong_repeats_vowel() {
    assert_eq!(transliterate_str("らーめん"), "raamen");
    assert_eq!(transliterate_str("すーぱー"), "suupaa");
    assert_eq!(transliterate_str("きゃー"), "kyaa");
    assert_eq!(transliterate_str("わーー"), "waaa");
}

#[test]
fn prolong_without_vowel_passes_through() {
    assert_eq!(transliterate_str("ー"), "ー");
    assert_eq!(transliterate_str("んー"), "nー");
    assert_eq!(transliterate_str("Aー"), "Aー");
}

#[test]
fn prolong_across_morphemes() {
    assert_eq!(transliterate(&["こ", "ー"]), "koo");
}

// ---------------------------------------------------------------------------
// Morpheme overrides and passthrough
// ---------------------------------------------------------------------------

#[test]
fn particles() {
    assert_eq!(transliterate(&["わたし", "は"]), "watashiwa");
    assert_eq!(transliterate(&["がっこう", "へ"]), "gakkoue");
    assert_eq!(transliterate(&["はな"]), "hana");
}

#[test]
fn greetings() {
    assert_eq!(transliterate_str("こんにちは"), "konnichiwa");
    assert_eq!(transliterate(&["こんにち", "は"]), "konnichiwa");
    assert_eq!(transliterate_str("こんばんは"), "kombanwa");
}

#[test]
fn passthrough() {
    assert_eq!(transliterate_str(""), "");
    assert_eq!(transliterate::<&str>(&[]), "");
    assert_eq!(transliterate_str("Hello"), "Hello");
    assert_eq!(transliterate_str("123、。"), "123、。");
    assert_eq!(transliterate_str("漢"), "漢");
    assert_eq!(transliterate(&["I ", "あい", " you"]), "I ai you");
}

#[test]
fn taberu() {
    assert_eq!(transliterate_str("たべる"), "taberu");
}

#[test]
fn custom_table() {
    let table = KanaTable::from_toml("[syllables]\n\"か\" = \"ka\"\n").unwrap();
    assert_eq!(transliterate_with(&table, &["かっか"]), "kakka");
    assert_eq!(transliterate_with(&table, &["あ"]), "あ");
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn never_panics(parts in prop::collection::vec("[\\u{3041}-\\u{3096}ー a-z]{0,12}", 0..6)) {
            let _ = transliterate(&parts);
        }

        #[test]
        fn boundaries_invisible_without_overrides(s in "[か-こさ-そたっんー]{0,16}", cut in 0usize..16) {
            let chars: Vec<char> = s.chars().collect();
            let cut = cut.min(chars.len());
            let left: String = chars[..cut].iter().collect();
            let right: String = chars[cut..].iter().collect();
            prop_assert_eq!(transliterate(&[left, right]), transliterate_str(&s));
        }
    }
}
