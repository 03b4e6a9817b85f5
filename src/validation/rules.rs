//! Structural Rules
//!
//! Each rule is a pure check over a [`Document`]. Rules never see each
//! other's findings and all of them run for every document; the order of
//! [`RULES`] is the order findings are reported in.
//!
//! The table starts with the cross-reference rules and ends with the two
//! section rules, so abstract findings follow the single-pattern ones.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;
use crate::validation::engine::ValidationResult;
use crate::validation::sections;

/// A named check
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub description: &'static str,
    check: fn(&Document, &mut Sink),
}

impl Rule {
    /// Run the check, recording findings under this rule's name
    pub fn run(&self, document: &Document, result: &mut ValidationResult) {
        let mut sink = Sink {
            rule: self.name,
            result,
        };
        (self.check)(document, &mut sink);
    }
}

/// Where a running rule records its findings
pub struct Sink<'a> {
    rule: &'static str,
    result: &'a mut ValidationResult,
}

impl Sink<'_> {
    pub fn fail(&mut self, message: impl Into<String>) {
        self.result.add_fail(self.rule, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.result.add_warn(self.rule, message);
    }
}

/// Every rule, in execution order
pub const RULES: &[Rule] = &[
    Rule {
        name: "vanilla-xref",
        description: "cross-references must carry a human-readable label",
        check: vanilla_xref,
    },
    Rule {
        name: "variable-in-title",
        description: "the level 1 heading must not use attributes",
        check: variable_in_title,
    },
    Rule {
        name: "inline-anchor",
        description: "the level 1 heading must not carry an in-line anchor",
        check: inline_anchor,
    },
    Rule {
        name: "experimental-tag",
        description: "UI macros need the :experimental: attribute",
        check: experimental_tag,
    },
    Rule {
        name: "html-markup",
        description: "HTML markup is not allowed",
        check: html_markup,
    },
    Rule {
        name: "nested-assembly",
        description: "assemblies must not include assemblies or set a level offset",
        check: nested_assembly,
    },
    Rule {
        name: "nested-module",
        description: "modules must not include assemblies or other modules",
        check: nested_module,
    },
    Rule {
        name: "human-readable-label",
        description: "xref macros must have link text",
        check: human_readable_label,
    },
    Rule {
        name: "abstract",
        description: "exactly one well-placed abstract tag",
        check: sections::abstract_section,
    },
    Rule {
        name: "additional-resources",
        description: "Additional resources section naming and tagging",
        check: sections::additional_resources_section,
    },
];

/// Look up a rule by name
pub fn find_rule(name: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.name == name)
}

const EXPERIMENTAL_ATTRIBUTE: &str = ":experimental:";
const LEVEL_OFFSET_ATTRIBUTE: &str = ":leveloffset:";

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("rule pattern is a valid regex")
}

static VANILLA_XREF: LazyLock<Regex> = LazyLock::new(|| regex(r"<<.*>>"));
static VARIABLE_IN_TITLE: LazyLock<Regex> = LazyLock::new(|| regex(r"(?m)^=[ \t].*\{.*\}"));
static INLINE_ANCHOR: LazyLock<Regex> = LazyLock::new(|| regex(r"(?m)^=[ \t].*\[\[.*\]\]"));
static UI_MACROS: LazyLock<Regex> =
    LazyLock::new(|| regex(r"btn:\[.*\]|menu:.*\]|kbd:.*\]"));
// Open and close tags on one line, or with exactly one line between them.
static HTML_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| regex(r"<.*>.*</.*>|<.*>\n.*\n</.*>"));
static NESTED_ASSEMBLY: LazyLock<Regex> =
    LazyLock::new(|| regex(r"include.*assembly_[A-Za-z0-9_-]+\.adoc\[.*\]"));
static NESTED_MODULE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"include.*(?:proc|con|ref)_[A-Za-z0-9_-]+\.adoc\[.*\]"));
static HUMAN_READABLE_LABEL: LazyLock<Regex> = LazyLock::new(|| regex(r"xref:.*\[\]"));

fn vanilla_xref(doc: &Document, sink: &mut Sink) {
    if VANILLA_XREF.is_match(doc.stripped()) {
        sink.fail("vanilla xrefs found");
    }
}

fn variable_in_title(doc: &Document, sink: &mut Sink) {
    if VARIABLE_IN_TITLE.is_match(doc.stripped()) {
        sink.fail("variable found in the level 1 heading");
    }
}

fn inline_anchor(doc: &Document, sink: &mut Sink) {
    if INLINE_ANCHOR.is_match(doc.stripped()) {
        sink.fail("in-line anchor found in the level 1 heading");
    }
}

fn experimental_tag(doc: &Document, sink: &mut Sink) {
    if doc.stripped().contains(EXPERIMENTAL_ATTRIBUTE) {
        return;
    }
    if UI_MACROS.is_match(doc.stripped()) {
        sink.fail("experimental tag is missing");
    }
}

fn html_markup(doc: &Document, sink: &mut Sink) {
    if HTML_MARKUP.is_match(doc.stripped()) {
        sink.fail("HTML markup found");
    }
}

fn nested_assembly(doc: &Document, sink: &mut Sink) {
    if !doc.doc_type().is_assembly() {
        return;
    }
    if NESTED_ASSEMBLY.is_match(doc.stripped()) {
        sink.fail("nested assemblies found");
    }
    if doc.stripped().contains(LEVEL_OFFSET_ATTRIBUTE) {
        sink.fail("unsupported includes found, remove :leveloffset:");
    }
}

fn nested_module(doc: &Document, sink: &mut Sink) {
    if doc.doc_type().is_assembly() {
        return;
    }
    if NESTED_ASSEMBLY.is_match(doc.stripped()) {
        sink.fail("module contains nested assemblies");
    }
    if NESTED_MODULE.is_match(doc.stripped()) {
        sink.fail("module contains nested modules");
    }
}

fn human_readable_label(doc: &Document, sink: &mut Sink) {
    if HUMAN_READABLE_LABEL.is_match(doc.stripped()) {
        sink.fail("xrefs without a human readable label found");
    }
}
