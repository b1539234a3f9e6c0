//! Client configuration types.

use shodan_tools_core::ApiHost;
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Base URL for each Shodan host
///
/// Defaults to the production hosts; override individual entries to point
/// the tools at a proxy or a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrls {
    /// Main REST API
    pub api: String,

    /// Trends API
    pub trends: String,

    /// InternetDB
    pub internetdb: String,
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self {
            api: ApiHost::Api.default_base_url().to_string(),
            trends: ApiHost::Trends.default_base_url().to_string(),
            internetdb: ApiHost::InternetDb.default_base_url().to_string(),
        }
    }
}

impl BaseUrls {
    /// Point every host at the same base URL
    #[must_use]
    pub fn uniform(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            api: url.clone(),
            trends: url.clone(),
            internetdb: url,
        }
    }

    /// Override the URL for one host
    #[must_use]
    pub fn with(mut self, host: ApiHost, url: impl Into<String>) -> Self {
        *self.slot(host) = url.into();
        self
    }

    /// Base URL for a host, without a trailing slash
    #[must_use]
    pub fn get(&self, host: ApiHost) -> &str {
        let url = match host {
            ApiHost::Api => &self.api,
            ApiHost::Trends => &self.trends,
            ApiHost::InternetDb => &self.internetdb,
        };
        url.trim_end_matches('/')
    }

    fn slot(&mut self, host: ApiHost) -> &mut String {
        match host {
            ApiHost::Api => &mut self.api,
            ApiHost::Trends => &mut self.trends,
            ApiHost::InternetDb => &mut self.internetdb,
        }
    }
}
