//! Text layout helpers.
//!
//! Used by the DOT renderer to nest caller-supplied prelude code inside the graph body, and by
//! the test assertion helpers to offset multi-line values in failure messages.

/// Prefixes every line of `s` with `level` copies of `unit`.
///
/// Lines are split on `\n`. Whitespace-only and empty interior lines are indented like any
/// other line. A final empty segment, i.e. the position right after a trailing newline, is left
/// alone so that indenting never invents an extra line.
///
/// # Arguments
///
/// * `s` - The text to indent
/// * `unit` - One level of indentation, e.g. two spaces or a tab
/// * `level` - How many copies of `unit` to prepend
///
/// # Examples
///
/// ```rust
/// use xykit::utils::indent;
///
/// assert_eq!(indent("Hello\nWorld", "  ", 1), "  Hello\n  World");
/// assert_eq!(indent("Hello\nWorld\n", "  ", 1), "  Hello\n  World\n");
/// assert_eq!(indent("x", "\t", 2), "\t\tx");
/// ```
#[must_use]
pub fn indent(s: &str, unit: &str, level: usize) -> String {
    if s.is_empty() {
        return String::new();
    }

    let prefix = unit.repeat(level);
    let line_count = s.split('\n').count();
    let mut out = String::with_capacity(s.len() + prefix.len() * line_count);

    for (i, line) in s.split('\n').enumerate() {
        let last = i + 1 == line_count;
        if i != 0 {
            out.push('\n');
        }
        if last && line.is_empty() {
            break;
        }
        out.push_str(&prefix);
        out.push_str(line);
    }

    out
}
