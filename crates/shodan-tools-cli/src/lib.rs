//! # shodan-tools-cli
//!
//! Command-line front end for the Shodan tool catalog.
//!
//! ## Features
//!
//! - **Catalog listing**: every tool with its host, method and path
//! - **Schema export**: function-calling definitions for one or all tools
//! - **Invocation**: run any tool with `-a name=value` or `--json` arguments
//! - **Multiple output formats**: Pretty, JSON, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
