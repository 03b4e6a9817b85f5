//! Abstract and Additional Resources Sections
//!
//! Both checks count tags in the stripped text but look at blank lines and
//! comments around them in the raw text, where that information survives.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;
use crate::validation::rules::Sink;

pub const ABSTRACT_TAG: &str = r#"[role="_abstract"]"#;
pub const ADDITIONAL_RESOURCES_TAG: &str = r#"[role="_additional-resources"]"#;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("section pattern is a valid regex")
}

static RELATED_INFORMATION: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?im)^(?:={1,2}[ \t]+|\.)related information"));
static ADDITIONAL_RESOURCES: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?im)^(?:={1,2}[ \t]+|\.)additional resources"));
static ADDITIONAL_RESOURCES_HEADING: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?im)^==[ \t]+additional resources"));
static ADDITIONAL_RESOURCES_TITLE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?im)^\.additional resources"));

/// The lines around one raw line of interest
#[derive(Debug, Clone, Copy, PartialEq)]
struct Site<'a> {
    before: Option<&'a str>,
    after: Option<&'a str>,
}

impl Site<'_> {
    fn follows_level_one_heading(&self) -> bool {
        self.before.is_some_and(is_level_one_heading)
    }

    /// The first line of a file has nothing before it, which is not blank
    fn blank_before(&self) -> bool {
        self.before.is_some_and(is_blank)
    }

    fn blank_after(&self) -> bool {
        self.after.is_some_and(is_blank)
    }

    /// `//` also opens `////` blocks
    fn comment_after(&self) -> bool {
        self.after.is_some_and(|line| line.starts_with("//"))
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_level_one_heading(line: &str) -> bool {
    line.strip_prefix('=')
        .is_some_and(|rest| rest.starts_with([' ', '\t']))
}

/// Neighbours of every raw line accepted by `select`
fn sites<'a>(raw: &'a str, select: impl Fn(&str) -> bool) -> Vec<Site<'a>> {
    let lines: Vec<&str> = raw.lines().collect();

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| select(line))
        .map(|(idx, _)| Site {
            before: idx.checked_sub(1).map(|prev| lines[prev]),
            after: lines.get(idx + 1).copied(),
        })
        .collect()
}

/// Lines that open with `tag`, which may carry trailing text or a comment
fn tag_sites<'a>(raw: &'a str, tag: &str) -> Vec<Site<'a>> {
    sites(raw, |line| line.trim_start().starts_with(tag))
}

/// Exactly one abstract tag, separated from the heading by a blank line and
/// followed directly by the abstract paragraph.
pub(crate) fn abstract_section(doc: &Document, sink: &mut Sink) {
    match doc.stripped().matches(ABSTRACT_TAG).count() {
        0 => {
            sink.fail("abstract tag is missing");
            return;
        }
        1 => {}
        _ => {
            sink.fail("abstract tag appears multiple times");
            return;
        }
    }

    let sites = tag_sites(doc.raw(), ABSTRACT_TAG);

    if sites.iter().any(Site::follows_level_one_heading) {
        sink.fail(
            "no line between the level 1 heading and the abstract tag, \
             the first paragraph might render incorrectly",
        );
        return;
    }
    if !sites.iter().all(Site::blank_before) {
        sink.fail("no empty line before the abstract tag");
    }
    if sites.iter().any(Site::blank_after) {
        sink.fail("empty line after the abstract tag");
        return;
    }
    if sites.iter().any(Site::comment_after) {
        sink.fail("comment after the abstract tag");
    }
}

/// The section is optional. When present it is called Additional resources,
/// uses the heading form that fits the document type and carries one tag.
pub(crate) fn additional_resources_section(doc: &Document, sink: &mut Sink) {
    let stripped = doc.stripped();

    if RELATED_INFORMATION.is_match(stripped) {
        sink.fail("'Related information' section found, rename it to 'Additional resources'");
        return;
    }
    if !ADDITIONAL_RESOURCES.is_match(stripped) {
        return;
    }

    if doc.doc_type().is_assembly() {
        if !ADDITIONAL_RESOURCES_HEADING.is_match(stripped) {
            sink.fail("additional resources section for assemblies should be `== Additional resources`");
        }
    } else if !ADDITIONAL_RESOURCES_TITLE.is_match(stripped) {
        sink.fail("additional resources section for modules should be `.Additional resources`");
    }

    match stripped.matches(ADDITIONAL_RESOURCES_TAG).count() {
        0 => sink.fail("additional resources tag is missing"),
        1 => check_additional_resources_spacing(doc.raw(), sink),
        // Spacing is only checked when the tag is unambiguous.
        _ => sink.fail("additional resources tag appears multiple times"),
    }
}

fn check_additional_resources_spacing(raw: &str, sink: &mut Sink) {
    let tags = tag_sites(raw, ADDITIONAL_RESOURCES_TAG);
    if tags.iter().any(Site::blank_after) {
        sink.fail("empty line after the additional resources tag");
    } else if tags.iter().any(Site::comment_after) {
        sink.fail("comment after the additional resources tag");
    }

    let headers = sites(raw, |line| ADDITIONAL_RESOURCES.is_match(line));
    if headers.iter().any(Site::blank_after) {
        sink.fail("empty line after the additional resources header");
    } else if headers.iter().any(Site::comment_after) {
        sink.fail("comment after the additional resources header");
    }
}
