//! Two-line ruby layout for terminals: readings on the upper line, aligned
//! over their base on the lower line by display width.

use unicode_width::UnicodeWidthStr;

use kashi_core::ProcessedResult;

fn pad(out: &mut String, s: &str, width: usize) {
    out.push_str(s);
    for _ in s.width()..width {
        out.push(' ');
    }
}

/// Returns `(ruby_line, base_line)`. Each annotated base occupies a column as
/// wide as the wider of base and ruby, both left-aligned in it. The ruby line
/// has trailing spaces removed.
pub fn layout(result: &ProcessedResult) -> (String, String) {
    let text = &result.original;
    let mut top = String::new();
    let mut bottom = String::new();

    let mut cursor = 0;
    for span in &result.furigana {
        let plain = &text[cursor..span.start];
        pad(&mut top, "", plain.width());
        bottom.push_str(plain);

        let width = span.base.width().max(span.ruby.width());
        pad(&mut top, &span.ruby, width);
        pad(&mut bottom, &span.base, width);
        cursor = span.end;
    }
    bottom.push_str(&text[cursor..]);

    let top = top.trim_end().to_string();
    (top, bottom)
}
