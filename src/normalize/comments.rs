//! Comment Removal
//!
//! AsciiDoc comments come in two shapes: blocks fenced by lines of four or
//! more slashes, and `//` line comments.

use std::sync::LazyLock;

use regex::Regex;

/// Opening slashes, the fewest whole lines possible, closing slashes.
///
/// The delimiters are not anchored to line starts, so a single run of eight
/// slashes is a complete (empty) block on its own.
static MULTI_LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/{4,}(?:.*\n)*?/{4,}").expect("multi-line comment pattern is a valid regex")
});

/// Remove every `////` delimited comment block.
///
/// An unterminated block is left untouched.
pub fn strip_multi_line_comments(text: &str) -> String {
    MULTI_LINE_COMMENT.replace_all(text, "").into_owned()
}

/// Remove `//` line comments through the end of the line, terminator included.
///
/// A `//` counts only when no other `/` touches it, which keeps the remains
/// of `///` and `////` runs intact. The text before the comment is joined to
/// the following line. URLs such as `https://host` are treated as comments.
pub fn strip_single_line_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        match find_line_comment(line) {
            Some(start) => out.push_str(&line[..start]),
            None => out.push_str(line),
        }
    }

    out
}

/// Byte offset of the first standalone `//` in a line
fn find_line_comment(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();

    (0..bytes.len().saturating_sub(1)).find(|&i| {
        bytes[i] == b'/'
            && bytes[i + 1] == b'/'
            && (i == 0 || bytes[i - 1] != b'/')
            && bytes.get(i + 2) != Some(&b'/')
    })
}
