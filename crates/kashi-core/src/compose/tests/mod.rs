use super::*;
use crate::compose::testutil::{CharSegmenter, LossySegmenter, StubSegmenter};

mod memo;

fn span(start: usize, end: usize, base: &str, ruby: &str) -> FuriganaSpan {
    FuriganaSpan {
        start,
        end,
        base: base.to_string(),
        ruby: ruby.to_string(),
    }
}

fn lyrics_stub() -> StubSegmenter {
    StubSegmenter::new()
        .with("食べる", &[("食べる", Some("タベル"))])
        .with("こんにちは", &[("こんにちは", Some("コンニチハ"))])
        .with("学校", &[("学校", Some("ガッコウ"))])
        .with(
            "私は食べる",
            &[
                ("私", Some("ワタシ")),
                ("は", Some("ハ")),
                ("食べる", Some("タベル")),
            ],
        )
        .with("行って", &[("行っ", Some("イッ")), ("て", Some("テ"))])
        .with(
            "君の名は。",
            &[
                ("君", Some("キミ")),
                ("の", Some("ノ")),
                ("名", Some("ナ")),
                ("は", Some("ハ")),
                ("。", None),
            ],
        )
}
