//! Validation Engine
//!
//! Clean separation of the rules from document preparation and reporting.

pub mod engine;
pub mod rules;
pub mod sections;

pub use engine::{
    validate_document, validate_file, validate_with, Finding, Severity, ValidationResult,
};
pub use rules::{find_rule, Rule, RULES};
