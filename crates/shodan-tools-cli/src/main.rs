//! shodan-tools - Shodan endpoints as agent tools, from the command line

use anyhow::Result;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    shodan_tools_cli::run().await
}
