//! Core types for the Shodan agent tools.
//!
//! This crate provides the data every tool is built from:
//!
//! - **Descriptors**: static [`EndpointDescriptor`]s describing one endpoint each
//! - **Arguments**: [`InvocationArgs`] supplied per call
//! - **Results**: the uniform [`CallResult`] handed back to the agent
//! - **Schemas**: [`ToolDefinition`] in the function-calling format
//! - **Errors**: [`ToolError`], folded into failures at the tool boundary
//!
//! # Example
//!
//! ```rust
//! use shodan_tools_core::{InvocationArgs, CallResult};
//!
//! let args = InvocationArgs::new().with("ip", "8.8.8.8");
//! assert!(args.contains("ip"));
//!
//! let result = CallResult::failure("no route to host");
//! assert_eq!(result.into_value()["error"], "no route to host");
//! ```

#![doc(html_root_url = "https://docs.rs/shodan-tools-core/0.1.0")]

mod error;
pub mod types;

pub use error::{FailureKind, Result, ToolError};
pub use types::*;
