//! AsciiDoc Validator
//!
//! Checks modular documentation sources against authoring conventions.
//!
//! This library provides:
//! - Document classification from file naming conventions
//! - A normalization pipeline removing comments, code blocks and pseudo xrefs
//! - Independent structural rules producing findings
//! - Text and JSON reporters
//! - Configuration management

pub mod config;
pub mod document;
pub mod normalize;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use document::{classify, Document, DocumentType};
pub use normalize::normalize;
pub use report::{Collector, Reporter};
pub use validation::{validate_document, validate_file, Finding, Severity, ValidationResult};
