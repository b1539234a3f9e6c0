//! `shodan-tools call` - Invoke one tool.

use anyhow::{Context as _, Result};
use colored::Colorize;
use shodan_tools::{api, ArgValue, CallResult, EndpointDescriptor, InvocationArgs, ParamType};
use std::process::ExitCode;
use tracing::debug;

use super::Context;
use crate::cli::args::CallArgs;
use crate::output::OutputFormat;

pub async fn execute(ctx: &Context, args: CallArgs) -> Result<ExitCode> {
    let endpoint = api::find(&args.name).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown tool: {}\n\nRun `shodan-tools list` to see every tool.",
            args.name
        )
    })?;

    let invocation = build_args(endpoint, args.json.as_deref(), args.args)?;
    debug!(
        tool = endpoint.name,
        host = %endpoint.host,
        args = invocation.len(),
        "invoking tool"
    );
    let client = ctx.client()?;
    let result = client.invoke(endpoint, &invocation).await;

    print_result(ctx.output_format, &result)?;

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Merge `--json` with `-a` pairs, typing each pair by its declared parameter.
fn build_args(
    endpoint: &EndpointDescriptor,
    json: Option<&str>,
    pairs: Vec<(String, String)>,
) -> Result<InvocationArgs> {
    let mut invocation = match json {
        Some(json) => {
            let value = serde_json::from_str(json).context("--json is not valid JSON")?;
            InvocationArgs::from_json(value)?
        }
        None => InvocationArgs::new(),
    };

    for (name, raw) in pairs {
        let value = typed_value(endpoint, &name, raw)?;
        invocation.insert(name, value);
    }

    Ok(invocation)
}

fn typed_value(endpoint: &EndpointDescriptor, name: &str, raw: String) -> Result<ArgValue> {
    let Some(param) = endpoint.param(name) else {
        // `key` and undeclared names pass through as strings
        return Ok(ArgValue::String(raw));
    };

    Ok(match param.param_type {
        ParamType::String => ArgValue::String(raw),
        ParamType::Integer => ArgValue::Integer(
            raw.parse()
                .with_context(|| format!("{name} expects an integer, got '{raw}'"))?,
        ),
        ParamType::Boolean => ArgValue::Bool(
            raw.parse()
                .with_context(|| format!("{name} expects true or false, got '{raw}'"))?,
        ),
    })
}

fn print_result(format: OutputFormat, result: &CallResult) -> Result<()> {
    match (format, result) {
        (OutputFormat::Pretty, CallResult::Failure(message)) => {
            eprintln!("{} {}", "Error:".red().bold(), message);
        }
        (format, result) => {
            println!("{}", format.render(result)?);
        }
    }
    Ok(())
}
