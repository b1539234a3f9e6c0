//! `shodan-tools schema` - Function-calling definitions.

use anyhow::Result;
use shodan_tools::{api, ToolDefinition};
use std::process::ExitCode;

use super::Context;
use crate::cli::args::SchemaArgs;

pub fn execute(ctx: &Context, args: SchemaArgs) -> Result<ExitCode> {
    let output = match args.name {
        Some(name) => {
            let endpoint = api::find(&name).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown tool: {name}\n\nRun `shodan-tools list` to see every tool."
                )
            })?;
            ctx.output_format.render(&ToolDefinition::for_endpoint(endpoint))?
        }
        None => {
            let definitions: Vec<ToolDefinition> =
                api::ALL.iter().map(|e| ToolDefinition::for_endpoint(e)).collect();
            ctx.output_format.render(&definitions)?
        }
    };

    println!("{output}");
    Ok(ExitCode::SUCCESS)
}
