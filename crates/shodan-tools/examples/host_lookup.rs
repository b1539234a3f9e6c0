//! Look up one IP through InternetDB and the full host API.
//!
//! Run with: cargo run --example host_lookup -- 8.8.8.8
//!
//! Set the SHODAN_API_KEY environment variable for the host API; InternetDB
//! needs no key.

use shodan_tools::{api, InvocationArgs, ToolClient};

#[tokio::main]
async fn main() -> shodan_tools::Result<()> {
    let ip = std::env::args().nth(1).unwrap_or_else(|| "8.8.8.8".to_string());
    let client = ToolClient::new()?;
    let args = InvocationArgs::new().with("ip", ip.as_str());

    println!("=== InternetDB: {ip} ===");
    let summary = client.invoke(&api::internetdb::GET_IP_INFO, &args).await;
    println!("{}", serde_json::to_string_pretty(&summary).unwrap_or_default());
    println!();

    println!("=== Host Info: {ip} (minified) ===");
    let args = args.with("minify", true);
    match client.invoke(&api::search::GET_HOST_INFO, &args).await.into_result() {
        Ok(host) => {
            println!("Organization: {}", host["org"]);
            println!("Ports: {}", host["ports"]);
        }
        Err(message) => eprintln!("{message}"),
    }

    Ok(())
}
