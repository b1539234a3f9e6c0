//! Command implementations.

pub mod call;
pub mod config;
pub mod list;
pub mod schema;

use shodan_tools::{BaseUrls, NoCredentials, ToolClient};
use std::time::Duration;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Shodan API key
    pub api_key: Option<String>,

    /// Output format
    pub output_format: OutputFormat,

    /// Transport timeout, client default when unset
    pub timeout: Option<Duration>,

    /// Single base URL for every host
    pub base_url: Option<String>,
}

impl Context {
    /// Create a tool client from the resolved settings.
    ///
    /// A missing key is not an error here: InternetDB needs none, and the
    /// remote 401 is reported as the tool's own failure.
    pub fn client(&self) -> anyhow::Result<ToolClient> {
        let mut builder = ToolClient::builder();

        builder = match &self.api_key {
            Some(key) => builder.api_key(key.clone()),
            None => builder.credentials(NoCredentials),
        };
        if let Some(url) = &self.base_url {
            builder = builder.base_urls(BaseUrls::uniform(url.clone()));
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}
