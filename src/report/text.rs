//! Plain text output
//!
//! ```text
//! FAIL: vanilla xrefs found:
//! modules/con_overview.adoc
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::report::Reporter;
use crate::validation::{Finding, Severity};

/// Writes each finding as it arrives
pub struct TextReporter<W: Write> {
    out: W,
    color: bool,
    error: Option<io::Error>,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            error: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn label(&self, finding: &Finding) -> String {
        let label = match finding.severity {
            Severity::Fail => format!("FAIL: {}:", finding.message),
            Severity::Warn => format!("WARNING: {}:", finding.message),
        };

        if !self.color {
            return label;
        }
        match finding.severity {
            Severity::Fail => label.red().bold().to_string(),
            Severity::Warn => label.yellow().bold().to_string(),
        }
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, finding: &Finding) {
        // Keep the first error, skip further writes.
        if self.error.is_some() {
            return;
        }
        let label = self.label(finding);
        if let Err(e) = writeln!(self.out, "{}\n{}", label, finding.identifier) {
            self.error = Some(e);
        }
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e).context("failed to write report");
        }
        self.out.flush().context("failed to flush report")
    }
}
