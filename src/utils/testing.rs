//! Assertion helpers for comparing rendered text.
//!
//! Graph renderings and other generated text are compared byte-for-byte in tests. When such a
//! comparison fails, the default `assert_eq!` output collapses newlines and trailing whitespace
//! into one hard-to-read line. The helpers here print one quoted row per line instead, with line
//! numbers, so that whitespace differences stay visible.
//!
//! Most callers use the [`assert_text_eq!`](crate::assert_text_eq) macro.

use std::fmt::Write;

use crate::utils::text::indent;

/// Quotes `s` so that special characters and whitespace are legible.
///
/// Single-line input is returned as one Rust string literal. Multi-line input becomes one row
/// per line, each prefixed with its line number and holding the quoted line including its `\n`;
/// rows are chained with a trailing `+` to read like a string concatenation.
///
/// # Examples
///
/// ```rust
/// use xykit::utils::testing::quote_lines;
///
/// assert_eq!(quote_lines("a\tb"), r#""a\tb""#);
/// assert_eq!(quote_lines("x\ny"), "1| \"x\\n\"+\n2| \"y\"");
/// ```
#[must_use]
pub fn quote_lines(s: &str) -> String {
    if !s.contains('\n') {
        return format!("{s:?}");
    }

    let lines: Vec<&str> = s.split('\n').collect();
    let width = lines.len().to_string().len();
    let mut out = String::new();

    for (i, line) in lines.iter().enumerate() {
        if i != 0 {
            out.push_str("+\n");
        }
        let _ = write!(out, "{:<width$}| ", i + 1);
        if i + 1 == lines.len() {
            let _ = write!(out, "{line:?}");
        } else {
            let _ = write!(out, "{:?}", format!("{line}\n"));
        }
    }

    out
}

/// Compares two texts, returning a failure description if they differ.
///
/// Returns `None` when `expected == got`. Otherwise both sides are rendered with
/// [`quote_lines`]; multi-line renderings are placed on their own lines and indented by four
/// spaces.
#[must_use]
pub fn text_mismatch(expected: &str, got: &str) -> Option<String> {
    if expected == got {
        return None;
    }

    let expected = quote_lines(expected);
    let got = quote_lines(got);

    if expected.contains('\n') || got.contains('\n') {
        Some(format!(
            "text mismatch:\nexpected:\n{}\nbut got:\n{}\n",
            indent(&expected, "    ", 1),
            indent(&got, "    ", 1)
        ))
    } else {
        Some(format!("text mismatch: expected {expected}, but got {got}"))
    }
}
