//! Reporting
//!
//! Reporters receive findings as they are produced. None of them stops a run
//! on a failure; exit status is the caller's decision.

pub mod json;
pub mod text;

use std::fmt;

use anyhow::Result;

use crate::validation::{Finding, ValidationResult};

pub use json::JsonReporter;
pub use text::TextReporter;

/// Sink for findings
pub trait Reporter {
    fn report(&mut self, finding: &Finding);

    /// Flush buffered output, surfacing any write error seen while reporting
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Keeps every finding in memory
#[derive(Debug, Default)]
pub struct Collector {
    findings: Vec<Finding>,
}

impl Collector {
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}

impl Reporter for Collector {
    fn report(&mut self, finding: &Finding) {
        self.findings.push(finding.clone());
    }
}

/// Totals across a batch of documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub documents: usize,
    pub failures: usize,
    pub warnings: usize,
}

impl Summary {
    pub fn record(&mut self, result: &ValidationResult) {
        self.documents += 1;
        self.failures += result.failures().count();
        self.warnings += result.warnings().count();
    }

    pub fn has_failures(&self) -> bool {
        self.failures > 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} document(s) checked, {} failure(s), {} warning(s)",
            self.documents, self.failures, self.warnings
        )
    }
}
