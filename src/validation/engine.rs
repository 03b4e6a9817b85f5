//! Validation Engine
//!
//! Classify, normalize, run every rule, hand the findings to a reporter.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::document::{Document, DocumentType};
use crate::report::Reporter;
use crate::validation::rules::RULES;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Fail,
    Warn,
}

/// One rule outcome for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Name of the rule that produced it
    pub rule: &'static str,
    pub message: String,
    pub identifier: String,
}

/// Findings for a single document, in rule execution order
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub identifier: String,
    pub doc_type: DocumentType,
    pub findings: Vec<Finding>,
}

impl ValidationResult {
    pub fn new(identifier: impl Into<String>, doc_type: DocumentType) -> Self {
        Self {
            identifier: identifier.into(),
            doc_type,
            findings: Vec::new(),
        }
    }

    pub fn add_fail(&mut self, rule: &'static str, message: impl Into<String>) {
        self.push(Severity::Fail, rule, message.into());
    }

    pub fn add_warn(&mut self, rule: &'static str, message: impl Into<String>) {
        self.push(Severity::Warn, rule, message.into());
    }

    fn push(&mut self, severity: Severity, rule: &'static str, message: String) {
        self.findings.push(Finding {
            severity,
            rule,
            message,
            identifier: self.identifier.clone(),
        });
    }

    /// True when nothing failed; warnings do not count
    pub fn is_valid(&self) -> bool {
        !self.findings.iter().any(|f| f.severity == Severity::Fail)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Fail)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warn)
    }

    /// Findings produced by one rule
    pub fn from_rule<'a>(&'a self, rule: &'a str) -> impl Iterator<Item = &'a Finding> + 'a {
        self.findings.iter().filter(move |f| f.rule == rule)
    }

    /// Forward every finding, in order
    pub fn report_to(&self, reporter: &mut dyn Reporter) {
        for finding in &self.findings {
            reporter.report(finding);
        }
    }
}

/// Validate a document held in memory
pub fn validate_document(identifier: &str, content: &str) -> ValidationResult {
    let document = Document::new(identifier, content);
    let mut result = ValidationResult::new(identifier, document.doc_type());

    for rule in RULES {
        let before = result.findings.len();
        rule.run(&document, &mut result);
        log::debug!(
            "{}: rule {} produced {} finding(s)",
            identifier,
            rule.name,
            result.findings.len() - before
        );
    }

    result
}

/// Validate a document and stream its findings to `reporter`
pub fn validate_with(
    identifier: &str,
    content: &str,
    reporter: &mut dyn Reporter,
) -> ValidationResult {
    let result = validate_document(identifier, content);
    result.report_to(reporter);
    result
}

/// Read a file in full and validate it.
///
/// A file that cannot be read is an error; nothing is validated.
pub fn validate_file(path: &Path) -> Result<ValidationResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(validate_document(&path.display().to_string(), &content))
}
