//! Delimited Block Removal
//!
//! Literal (`....`) and listing (`----`) blocks hold sample text that must
//! not trip the rules. Their bodies are dropped; the fences stay.

/// Fence styles whose bodies are removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fence {
    /// Four or more dots
    Literal,
    /// Four or more hyphens
    Listing,
}

impl Fence {
    /// Fence style of a line, if it is a fence line
    pub fn of_line(line: &str) -> Option<Fence> {
        let line = line.trim_end_matches(['\n', '\r']);
        if line.len() < 4 {
            return None;
        }
        if line.bytes().all(|b| b == b'.') {
            Some(Fence::Literal)
        } else if line.bytes().all(|b| b == b'-') {
            Some(Fence::Listing)
        } else {
            None
        }
    }
}

/// Remove every line strictly between an opening fence and the next fence of
/// the same style.
///
/// A closing fence never opens another block. An opening fence without a
/// matching closing fence is kept along with everything after it.
pub fn strip_code_block_bodies(text: &str) -> String {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let mut out = String::with_capacity(text.len());
    let mut idx = 0;

    while idx < lines.len() {
        let line = lines[idx];
        out.push_str(line);

        let closing = Fence::of_line(line).and_then(|fence| {
            lines[idx + 1..]
                .iter()
                .position(|l| Fence::of_line(l) == Some(fence))
                .map(|offset| idx + 1 + offset)
        });

        match closing {
            Some(close_idx) => {
                out.push_str(lines[close_idx]);
                idx = close_idx + 1;
            }
            None => idx += 1,
        }
    }

    out
}
