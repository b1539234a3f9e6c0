//! `shodan-tools list` - The tool catalog.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use shodan_tools::{api, EndpointDescriptor};
use std::process::ExitCode;
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::output::OutputFormat;

#[derive(Tabled)]
struct ToolRow {
    #[tabled(rename = "Tool")]
    name: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Serialize)]
struct ToolEntry {
    name: &'static str,
    description: &'static str,
    host: String,
    method: &'static str,
    path: &'static str,
}

impl ToolEntry {
    fn new(endpoint: &EndpointDescriptor, base_url: &str) -> Self {
        Self {
            name: endpoint.name,
            description: endpoint.description,
            host: base_url.to_string(),
            method: endpoint.method.as_str(),
            path: endpoint.path,
        }
    }
}

/// Where requests for `endpoint` are sent, honoring `--base-url`
fn base_url<'a>(ctx: &'a Context, endpoint: &EndpointDescriptor) -> &'a str {
    ctx.base_url
        .as_deref()
        .map_or(endpoint.host.default_base_url(), |url| url.trim_end_matches('/'))
}

pub fn execute(ctx: &Context) -> Result<ExitCode> {
    match ctx.output_format {
        OutputFormat::Pretty => {
            let rows: Vec<ToolRow> = api::ALL
                .iter()
                .map(|endpoint| ToolRow {
                    name: endpoint.name.cyan().to_string(),
                    method: endpoint.method.to_string(),
                    path: format!("{}{}", base_url(ctx, endpoint), endpoint.path),
                    description: endpoint.description.to_string(),
                })
                .collect();

            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");
            println!("\n{} {} tools", "Total:".bold(), api::ALL.len());
        }
        format => {
            let entries: Vec<ToolEntry> = api::ALL
                .iter()
                .map(|endpoint| ToolEntry::new(endpoint, base_url(ctx, endpoint)))
                .collect();
            println!("{}", format.render(&entries)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
