//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use crate::output::OutputFormat;

/// Shodan REST, Trends and InternetDB endpoints as agent tools
///
/// List the tools, print their function-calling schemas, or run one.
///
/// Get your API key at: https://account.shodan.io
#[derive(Parser, Debug)]
#[command(name = "shodan-tools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Shodan API key (or set SHODAN_API_KEY env var)
    #[arg(short = 'k', long, env = "SHODAN_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Transport timeout per call, in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Send every request to this base URL instead of the Shodan hosts
    #[arg(long, env = "SHODAN_TOOLS_BASE_URL", global = true, hide = true)]
    pub base_url: Option<String>,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every tool with its description
    List,

    /// Print function-calling definitions
    Schema(SchemaArgs),

    /// Invoke one tool
    Call(CallArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Schema command
// ============================================================================

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Tool name; all tools when omitted
    pub name: Option<String>,
}

// ============================================================================
// Call command
// ============================================================================

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Tool name (see `shodan-tools list`)
    pub name: String,

    /// Tool argument, repeatable (e.g. -a query=apache -a page=2)
    #[arg(short = 'a', long = "arg", value_name = "NAME=VALUE", value_parser = parse_key_val)]
    pub args: Vec<(String, String)>,

    /// Arguments as a JSON object; -a values are applied on top
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    if name.is_empty() {
        return Err(format!("missing argument name in '{s}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (api_key, output_format, timeout_secs)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn key_values_split_on_first_equals() {
        assert_eq!(
            parse_key_val("query=http.title:\"a=b\"").unwrap(),
            ("query".to_string(), "http.title:\"a=b\"".to_string())
        );
        assert!(parse_key_val("query").is_err());
        assert!(parse_key_val("=x").is_err());
    }

    #[test]
    fn parses_call_arguments() {
        let cli = Cli::parse_from([
            "shodan-tools",
            "call",
            "search_shodan",
            "-a",
            "query=nginx",
            "--arg",
            "page=2",
            "-o",
            "json",
        ]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        let Commands::Call(call) = cli.command else {
            panic!("expected call");
        };
        assert_eq!(call.name, "search_shodan");
        assert_eq!(call.args.len(), 2);
    }
}
