//! Descriptor-driven HTTP engine for the Shodan agent tools.
//!
//! [`ToolClient`] turns an [`EndpointDescriptor`](shodan_tools_core::EndpointDescriptor)
//! and its arguments into exactly one HTTP request and returns a
//! [`CallResult`](shodan_tools_core::CallResult). The [`api`] module holds the
//! catalog of endpoints; [`Tool`] is the object-safe surface an agent holds.
//!
//! ```rust,ignore
//! use serde_json::json;
//! use shodan_tools_client::ToolClient;
//!
//! let client = ToolClient::new()?;
//! let result = client.call("get_host_info", json!({ "ip": "8.8.8.8" })).await;
//! println!("{}", result.into_value());
//! ```

#![doc(html_root_url = "https://docs.rs/shodan-tools-client/0.1.0")]

mod client;
mod config;
mod credentials;
mod request;
mod tool;
pub mod api;

pub use client::{ToolClient, ToolClientBuilder};
pub use config::*;
pub use credentials::*;
pub use request::{prepare, PreparedRequest};
pub use tool::{ShodanTool, Tool};
pub use shodan_tools_core::{CallResult, InvocationArgs, Result, ToolDefinition, ToolError};
