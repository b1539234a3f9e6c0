//! `shodan-tools config` - CLI configuration management.

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::process::ExitCode;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<ExitCode> {
    match args.command {
        ConfigCommands::Show => show_config(ctx)?,
        ConfigCommands::Set { key, value } => set_config(&key, &value)?,
        ConfigCommands::Path => show_path()?,
    }
    Ok(ExitCode::SUCCESS)
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load()?;
    let masked = Config {
        api_key: config.masked_api_key(),
        ..config
    };

    match ctx.output_format {
        OutputFormat::Pretty => {
            println!("{}", "Current Configuration:".bold());
            println!();

            let api_display = masked
                .api_key
                .clone()
                .unwrap_or_else(|| "(not set)".dimmed().to_string());
            println!("  {} {}", "api_key:".bold(), api_display);
            println!(
                "  {} {}",
                "output_format:".bold(),
                masked.output_format.unwrap_or_default()
            );
            println!(
                "  {} {}",
                "timeout_secs:".bold(),
                masked
                    .timeout_secs
                    .map_or_else(|| "(default)".dimmed().to_string(), |t| t.to_string())
            );
        }
        format => println!("{}", format.render(&masked)?),
    }

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "api_key" => {
            config.api_key = Some(value.to_string());
            println!("{} API key set.", "Success:".green().bold());
        }
        "output_format" | "output" => {
            config.output_format = Some(value.parse()?);
            println!("{} Output format set to {}.", "Success:".green().bold(), value.cyan());
        }
        "timeout_secs" | "timeout" => {
            config.timeout_secs = Some(
                value
                    .parse()
                    .with_context(|| format!("timeout_secs expects whole seconds, got '{value}'"))?,
            );
            println!("{} timeout_secs set to {}.", "Success:".green().bold(), value);
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 api_key        - Your Shodan API key\n  \
                 output_format  - Default output format (pretty/json/yaml)\n  \
                 timeout_secs   - Transport timeout per call",
                key
            );
        }
    }

    config.save()?;

    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}
