//! Shodan REST, Trends and InternetDB endpoints as tools for function-calling agents.
//!
//! Every tool is one [`EndpointDescriptor`] run by the shared [`ToolClient`]:
//! one HTTP request per call, the JSON body returned verbatim, every error
//! folded into [`CallResult::Failure`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use shodan_tools::{Tool, ToolClient};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> shodan_tools::Result<()> {
//!     // Falls back to SHODAN_API_KEY when a call has no `key` argument
//!     let client = ToolClient::new()?;
//!
//!     // Hand the schemas to the model...
//!     let definitions = client.definitions();
//!     println!("{}", serde_json::to_string_pretty(&definitions).unwrap());
//!
//!     // ...then run whatever it asks for
//!     let result = client
//!         .call("search_shodan", json!({ "query": "apache country:US", "facets": "port" }))
//!         .await;
//!     println!("{}", result.into_value());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/shodan-tools/0.1.0")]

// Re-export core types
pub use shodan_tools_core::*;

// Re-export client
pub use shodan_tools_client::{
    api, BaseUrls, CredentialProvider, EnvCredentials, NoCredentials, ShodanTool,
    StaticCredentials, Tool, ToolClient, ToolClientBuilder, API_KEY_ENV, DEFAULT_TIMEOUT,
};

// Re-export runtime for convenience
pub use serde_json;
pub use tokio;
