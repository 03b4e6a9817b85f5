//! Configuration management for the AsciiDoc validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional project configuration file (`.adoc-validate.toml`)

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".adoc-validate.toml";

/// Output format for findings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments for the validator
#[derive(Debug, Parser)]
#[command(name = "adoc-validate")]
#[command(about = "Check modular AsciiDoc files against authoring conventions")]
#[command(version)]
pub struct Args {
    /// Files to validate
    #[arg(required_unless_present = "list_rules", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Print every rule with its description and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Output format
    #[arg(long, value_enum, help = "Output format (text or json)")]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Explicit project configuration file
    #[arg(long, value_name = "PATH", help = "Configuration file to use instead of discovery")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    /// Stop after the first document with a failure
    #[arg(long)]
    pub fail_fast: bool,
}

/// Settings read from a project configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
    pub fail_fast: Option<bool>,
}

impl ProjectConfig {
    /// Load and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    /// Find the configuration to use.
    ///
    /// An explicit path must exist. Otherwise the working directory is
    /// searched first, then the user config directory; finding neither is
    /// not an error.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Option<(PathBuf, Self)>> {
        if let Some(path) = explicit {
            return Ok(Some((path.to_path_buf(), Self::load(path)?)));
        }

        let mut candidates = vec![cwd.join(PROJECT_CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("adoc-validate").join("config.toml"));
        }

        for candidate in candidates {
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((candidate, config)));
            }
        }

        Ok(None)
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub files: Vec<PathBuf>,
    pub format: OutputFormat,
    pub color: bool,
    pub fail_fast: bool,
    pub list_rules: bool,
    pub log_level: String,
    /// Configuration file that was applied, if any
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to determine working directory")?;
        let project = ProjectConfig::discover(args.config.as_deref(), &cwd)?;
        Ok(Self::merge(args, project))
    }

    /// Command-line flags win over the project file, which wins over defaults
    pub fn merge(args: Args, project: Option<(PathBuf, ProjectConfig)>) -> Self {
        let (config_path, project) = match project {
            Some((path, config)) => (Some(path), config),
            None => (None, ProjectConfig::default()),
        };

        let color = if args.no_color {
            false
        } else {
            project.color.unwrap_or(true)
        };

        Config {
            files: args.files,
            format: args.format.or(project.format).unwrap_or_default(),
            color,
            fail_fast: args.fail_fast || project.fail_fast.unwrap_or(false),
            list_rules: args.list_rules,
            log_level: args.log_level,
            config_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["adoc-validate"];
        argv.extend_from_slice(extra);
        argv.push("proc_a.adoc");
        Args::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn test_defaults() {
        let config = Config::merge(args(&[]), None);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.color);
        assert!(!config.fail_fast);
        assert!(!config.list_rules);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.files, [PathBuf::from("proc_a.adoc")]);
    }

    #[test]
    fn test_cli_overrides_project() {
        let project = ProjectConfig {
            format: Some(OutputFormat::Json),
            color: Some(true),
            fail_fast: Some(true),
        };
        let config = Config::merge(
            args(&["--format", "text", "--no-color"]),
            Some((PathBuf::from("cfg.toml"), project)),
        );

        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.color);
        assert!(config.fail_fast);
        assert_eq!(config.config_path, Some(PathBuf::from("cfg.toml")));
    }

    #[test]
    fn test_project_fills_gaps() {
        let project = ProjectConfig {
            format: Some(OutputFormat::Json),
            color: Some(false),
            fail_fast: None,
        };
        let config = Config::merge(args(&[]), Some((PathBuf::from("cfg.toml"), project)));

        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);
        assert!(!config.fail_fast);
    }

    #[test]
    fn test_parse_project_config() {
        let parsed: ProjectConfig = toml::from_str("format = \"json\"\ncolor = false\n").expect("parse");
        assert_eq!(parsed.format, Some(OutputFormat::Json));
        assert_eq!(parsed.color, Some(false));
        assert_eq!(parsed.fail_fast, None);

        assert!(toml::from_str::<ProjectConfig>("rules = []\n").is_err());
    }

    #[test]
    fn test_files_required() {
        assert!(Args::try_parse_from(["adoc-validate"]).is_err());
    }

    #[test]
    fn test_list_rules_needs_no_files() {
        let args = Args::try_parse_from(["adoc-validate", "--list-rules"]).expect("valid arguments");
        let config = Config::merge(args, None);
        assert!(config.list_rules);
        assert!(config.files.is_empty());
    }
}
