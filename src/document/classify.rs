//! Document Classification
//!
//! Modular documentation encodes a file's structural role in its name:
//! `assembly_`, `con_`, `proc_` and `ref_` prefixes.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static ASSEMBLY: LazyLock<Regex> = LazyLock::new(|| base_name_pattern("assembly"));
static CONCEPT: LazyLock<Regex> = LazyLock::new(|| base_name_pattern("con"));
static PROCEDURE: LazyLock<Regex> = LazyLock::new(|| base_name_pattern("proc"));
static REFERENCE: LazyLock<Regex> = LazyLock::new(|| base_name_pattern("ref"));

fn base_name_pattern(prefix: &str) -> Regex {
    Regex::new(&format!(r"^{prefix}_[A-Za-z0-9_-]+\.[A-Za-z0-9]+$"))
        .expect("file type pattern is a valid regex")
}

/// Structural role of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    Assembly,
    Concept,
    Procedure,
    Reference,
    Unclassified,
}

impl DocumentType {
    pub fn is_assembly(self) -> bool {
        self == DocumentType::Assembly
    }

    /// Concepts, procedures and references are the modules an assembly includes
    pub fn is_module(self) -> bool {
        matches!(
            self,
            DocumentType::Concept | DocumentType::Procedure | DocumentType::Reference
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::Assembly => "assembly",
            DocumentType::Concept => "concept",
            DocumentType::Procedure => "procedure",
            DocumentType::Reference => "reference",
            DocumentType::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final path segment of an identifier, accepting either separator
pub fn base_name(identifier: &str) -> &str {
    identifier
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(identifier)
}

/// Classify a document from its identifier.
///
/// Only the base name is inspected and it must match a pattern in full;
/// `notes_proc_x.adoc` is not a procedure.
pub fn classify(identifier: &str) -> DocumentType {
    let name = base_name(identifier);

    if ASSEMBLY.is_match(name) {
        DocumentType::Assembly
    } else if CONCEPT.is_match(name) {
        DocumentType::Concept
    } else if PROCEDURE.is_match(name) {
        DocumentType::Procedure
    } else if REFERENCE.is_match(name) {
        DocumentType::Reference
    } else {
        DocumentType::Unclassified
    }
}
