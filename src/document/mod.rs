//! Document Model
//!
//! A document under validation: its identifier, the verbatim text and the
//! normalized view most rules match against.

pub mod classify;

pub use classify::{base_name, classify, DocumentType};

use crate::normalize;

/// A document prepared for validation
///
/// Built once per run and never modified afterwards. Rules receive it by
/// shared reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a> {
    identifier: &'a str,
    raw: &'a str,
    stripped: String,
    doc_type: DocumentType,
}

impl<'a> Document<'a> {
    /// Classify and normalize `raw`
    pub fn new(identifier: &'a str, raw: &'a str) -> Self {
        let doc_type = classify(identifier);
        let stripped = normalize::normalize(raw);

        log::debug!(
            "{}: classified as {}, {} bytes raw, {} bytes stripped",
            identifier,
            doc_type,
            raw.len(),
            stripped.len()
        );

        Self {
            identifier,
            raw,
            stripped,
            doc_type,
        }
    }

    pub fn identifier(&self) -> &str {
        self.identifier
    }

    /// Verbatim content, for checks that depend on blank lines and comments
    pub fn raw(&self) -> &str {
        self.raw
    }

    /// Content with comments, code block bodies and pseudo xrefs removed
    pub fn stripped(&self) -> &str {
        &self.stripped
    }

    pub fn doc_type(&self) -> DocumentType {
        self.doc_type
    }
}
