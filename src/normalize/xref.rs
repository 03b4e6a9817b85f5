//! Pseudo Cross-Reference Removal

use std::sync::LazyLock;

use regex::Regex;

/// `<<` and `>>` around text holding a space, or around nothing at all.
///
/// Meant to catch references with a human-readable label such as
/// `<<install, Installing>>`. Matching is greedy within a line, so two
/// references on one line are removed together when either carries a space.
static PSEUDO_VANILLA_XREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<<(?:(.*) (.*))*>>").expect("pseudo xref pattern is a valid regex")
});

/// Remove cross-references that carry a space-separated pair.
pub fn strip_pseudo_xrefs(text: &str) -> String {
    PSEUDO_VANILLA_XREF.replace_all(text, "").into_owned()
}
