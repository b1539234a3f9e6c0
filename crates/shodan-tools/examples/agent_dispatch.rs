//! Drive the tools the way an agent loop does: publish the schemas, then
//! dispatch tool calls by name with JSON arguments.
//!
//! Run with: cargo run --example agent_dispatch
//!
//! Set the SHODAN_API_KEY environment variable before running.

use shodan_tools::serde_json::json;
use shodan_tools::{Tool, ToolClient};

#[tokio::main]
async fn main() -> shodan_tools::Result<()> {
    let client = ToolClient::new()?;
    let tools = client.tools();

    println!("=== {} tools available ===", tools.len());
    for tool in &tools {
        println!("  {:32} {}", tool.name(), tool.description());
    }
    println!();

    // Calls as a model would emit them
    let calls = [
        ("search_shodan_host_count", json!({ "query": "port:22", "facets": "country:5" })),
        ("dns_lookup", json!({ "hostnames": "google.com,bing.com" })),
        ("list_trends_search_facets", json!({})),
    ];

    for (name, args) in calls {
        println!("=== {name} ===");
        let result = client.call(name, args).await;
        println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
        println!();
    }

    Ok(())
}
