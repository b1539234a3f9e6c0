//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Flag and env are resolved by clap; config is the last resort
    let key_source = match (&cli.api_key, &config.api_key) {
        (Some(_), _) => "flag or environment",
        (None, Some(_)) => "config file",
        (None, None) => "none",
    };
    debug!(source = key_source, "resolved API key");
    let api_key = cli.api_key.or_else(|| config.api_key.clone());
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);
    let timeout = cli
        .timeout
        .or(config.timeout_secs)
        .map(Duration::from_secs);

    let ctx = commands::Context {
        api_key,
        output_format,
        timeout,
        base_url: cli.base_url,
    };

    match cli.command {
        Commands::List => commands::list::execute(&ctx),
        Commands::Schema(args) => commands::schema::execute(&ctx, args),
        Commands::Call(args) => commands::call::execute(&ctx, args).await,
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Log to stderr so stdout stays a clean document.
///
/// `RUST_LOG` wins over `--verbose` when both are present.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "shodan_tools_client=debug,shodan_tools_cli=debug"
    } else {
        "error"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
