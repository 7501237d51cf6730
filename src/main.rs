//! Kilo Search - Main entrypoint.
//!
//! This is the main entry point for the `kilo` command line tool.
//! It loads configuration, initializes the logging system, and runs one
//! search, table dump, or configuration command.

use clap::{Parser, Subcommand};
use kilo_search_lib::config::{self, ConfigLoader, KiloConfig, LogConfig, ENV_PREFIX};
use kilo_search_lib::data_structures::boyer_moore_matcher::BoyerMooreMatcher;
use kilo_search_lib::error::{
    report_error, set_error_reporter, ErrorContext, KiloError, KiloResult, TracingErrorReporter,
};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Kilo Search.
#[derive(Parser, Debug)]
#[clap(name = "kilo", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser, global = true)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Find every occurrence of a pattern in a text
    Search {
        /// Pattern to search for
        #[clap(short, long)]
        pattern: String,

        /// Text to search
        #[clap(short, long, conflicts_with = "text_file", required_unless_present = "text_file")]
        text: Option<String>,

        /// File holding the text to search
        #[clap(long, value_parser)]
        text_file: Option<PathBuf>,

        /// Print the scan report as JSON
        #[clap(long)]
        json: bool,
    },

    /// Print the preprocessing tables of a pattern as JSON
    Tables {
        /// Pattern to preprocess
        #[clap(short, long)]
        pattern: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so that search output on stdout stays machine readable.
fn init_logging(log: &LogConfig) -> KiloResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| KiloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Reads the text to search from the command line or a file.
fn read_text(text: Option<String>, text_file: Option<PathBuf>) -> KiloResult<String> {
    match (text, text_file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => {
            let contents = std::fs::read_to_string(&path)?;
            Ok(contents.trim_end_matches(['\n', '\r']).to_string())
        }
        (None, None) => Err(KiloError::Custom(
            "Either --text or --text-file is required".to_string(),
        )),
    }
}

/// Builds a matcher for `pattern` from the search configuration.
fn build_matcher(config: &KiloConfig, pattern: &str) -> KiloResult<BoyerMooreMatcher<char>> {
    let alphabet = config.search.alphabet()?;
    let pattern: Vec<char> = pattern.chars().collect();
    let matcher =
        BoyerMooreMatcher::with_options(&pattern, alphabet, &config.search.matcher_options())?;
    Ok(matcher)
}

fn run(command: Command, loader: &ConfigLoader) -> KiloResult<()> {
    match command {
        Command::Search {
            pattern,
            text,
            text_file,
            json,
        } => {
            let config = config::get_global_config();
            let text = read_text(text, text_file)?;
            let matcher = build_matcher(config.get(), &pattern)?;
            let report = matcher.locate_str(&text)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Text length: {}", text.chars().count());
                println!("Pattern length: {}", matcher.len());
                println!("Occurrences: {:?}", report.occurrences);
                println!("Alignments: {}", report.alignments);
                println!("Character comparisons: {}", report.comparisons);
            }
            Ok(())
        }
        Command::Tables { pattern } => {
            let config = config::get_global_config();
            let matcher = build_matcher(config.get(), &pattern)?;
            println!("{}", serde_json::to_string_pretty(&matcher.tables())?);
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            loader.load()?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = KiloConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| KiloError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    // A broken configuration still gets default logging so the failure is reported
    let loaded = loader.load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();

    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let needs_config = matches!(args.command, Command::Search { .. } | Command::Tables { .. });
    match loaded {
        Ok(config) => config::init_global_config(config),
        Err(e) if needs_config => {
            report_error(ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
        // validate reloads and reports on its own, gen-config needs no input
        Err(_) => {}
    }

    if let Err(e) = run(args.command, &loader) {
        report_error(ErrorContext::new(e, "cli"));
        process::exit(1);
    }
}
