//! JSON output
//!
//! Findings are buffered and written as one array when the run finishes, so
//! the output is always a single well-formed document.

use std::io::Write;

use anyhow::{Context, Result};

use crate::report::Reporter;
use crate::validation::Finding;

pub struct JsonReporter<W: Write> {
    out: W,
    findings: Vec<Finding>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            findings: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, finding: &Finding) {
        self.findings.push(finding.clone());
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.findings)
            .context("failed to write JSON report")?;
        writeln!(self.out).context("failed to write JSON report")?;
        self.findings.clear();
        self.out.flush().context("failed to flush report")
    }
}
