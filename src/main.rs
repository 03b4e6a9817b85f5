use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Result;

use asciidoc_validator::config::{Config, OutputFormat};
use asciidoc_validator::report::{JsonReporter, Reporter, Summary, TextReporter};
use asciidoc_validator::validation::{validate_file, RULES};

/// Some document failed a rule
const EXIT_FAILURES: u8 = 1;
/// A file or the configuration could not be read
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    // Parse configuration from command line and project file
    let config = match Config::from_args_and_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Some(path) = &config.config_path {
        log::info!("Using configuration {}", path.display());
    }

    if config.list_rules {
        for rule in RULES {
            println!("{:<22} {}", rule.name, rule.description);
        }
        return ExitCode::SUCCESS;
    }

    match run(&config) {
        Ok(summary) if summary.has_failures() => ExitCode::from(EXIT_FAILURES),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(config: &Config) -> Result<Summary> {
    let stdout = io::stdout();
    let color = config.color && stdout.is_terminal();

    let mut reporter: Box<dyn Reporter> = match config.format {
        OutputFormat::Text => Box::new(TextReporter::new(stdout.lock(), color)),
        OutputFormat::Json => Box::new(JsonReporter::new(stdout.lock())),
    };

    let mut summary = Summary::default();

    for path in &config.files {
        let result = match validate_file(path) {
            Ok(result) => result,
            Err(e) => {
                // Keep whatever was reported so far.
                reporter.finish()?;
                return Err(e);
            }
        };

        if !result.doc_type.is_assembly() && !result.doc_type.is_module() {
            log::info!(
                "{} is neither an assembly nor a module, type-specific rules treat it as a module",
                result.identifier
            );
        }
        log::info!(
            "{} ({}): {} finding(s)",
            result.identifier,
            result.doc_type,
            result.findings.len()
        );
        result.report_to(reporter.as_mut());
        summary.record(&result);

        if config.fail_fast && !result.is_valid() {
            log::info!("Stopping after first failing document");
            break;
        }
    }

    reporter.finish()?;
    drop(reporter);

    if config.format == OutputFormat::Text {
        println!("{}", summary);
    }
    log::info!("{}", summary);

    Ok(summary)
}
