//! Content Normalization
//!
//! Produces the stripped view of a document: comments, pseudo
//! cross-references and code block bodies removed. The stages run in a fixed
//! order, each on the output of the previous one.

pub mod blocks;
pub mod comments;
pub mod xref;

pub use blocks::{strip_code_block_bodies, Fence};
pub use comments::{strip_multi_line_comments, strip_single_line_comments};
pub use xref::strip_pseudo_xrefs;

/// A named text-to-text transform
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

/// Normalization stages in execution order.
///
/// Block comments go before line comments so `////` delimiters are never
/// mistaken for `//`. Pseudo xrefs are removed before code blocks, so a
/// labeled reference inside a listing is gone before the listing is.
pub const PIPELINE: &[Stage] = &[
    Stage {
        name: "multi-line-comments",
        apply: strip_multi_line_comments,
    },
    Stage {
        name: "single-line-comments",
        apply: strip_single_line_comments,
    },
    Stage {
        name: "pseudo-xrefs",
        apply: strip_pseudo_xrefs,
    },
    Stage {
        name: "code-block-bodies",
        apply: strip_code_block_bodies,
    },
];

/// Run the full pipeline over raw document text
pub fn normalize(raw: &str) -> String {
    PIPELINE.iter().fold(raw.to_string(), |text, stage| {
        let next = (stage.apply)(&text);
        log::trace!(
            "normalize stage {}: {} -> {} bytes",
            stage.name,
            text.len(),
            next.len()
        );
        next
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_order() {
        let names: Vec<&str> = PIPELINE.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "multi-line-comments",
                "single-line-comments",
                "pseudo-xrefs",
                "code-block-bodies"
            ]
        );
    }

    #[test]
    fn test_block_comment_not_split_into_line_comments() {
        let raw = "a\n////\n// inner\nhidden\n////\nb\n";
        assert_eq!(normalize(raw), "a\n\nb\n");
    }

    #[test]
    fn test_comment_inside_listing_removed_first() {
        let raw = "----\n// note\ncode\n----\n";
        assert_eq!(normalize(raw), "----\n----\n");
    }

    #[test]
    fn test_trailing_comment_can_swallow_closing_fence() {
        // Known imprecision: the line comment takes its newline with it, so
        // the closing fence lands on the code line and the block stays open.
        let raw = "----\ncode // note\n----\n";
        assert_eq!(normalize(raw), "----\ncode ----\n");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let raw = "= Title\n\n[role=\"_abstract\"]\nPlain text.\n";
        assert_eq!(normalize(raw), raw);
    }
}
