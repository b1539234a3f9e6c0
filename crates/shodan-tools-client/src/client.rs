//! The descriptor-driven call engine.

use crate::api;
use crate::config::{BaseUrls, DEFAULT_TIMEOUT};
use crate::credentials::{CredentialProvider, EnvCredentials, StaticCredentials};
use crate::request::{prepare, PreparedRequest};
use crate::tool::ShodanTool;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client as HttpClient;
use serde_json::Value;
use shodan_tools_core::{
    ApiHost, ArgValue, CallResult, EndpointDescriptor, HttpMethod, InvocationArgs, Result,
    ToolDefinition, ToolError, API_KEY_PARAM,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Runs Shodan tools, one HTTP request per invocation
///
/// Cloning is cheap and clones share one connection pool. There is no other
/// shared state: concurrent invocations never observe each other.
#[derive(Clone, Debug)]
pub struct ToolClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http: HttpClient,
    base_urls: BaseUrls,
    credentials: Arc<dyn CredentialProvider>,
}

impl ToolClient {
    /// Create a client that reads its key from `SHODAN_API_KEY`
    pub fn new() -> Result<Self> {
        ToolClientBuilder::new().build()
    }

    /// Create a client with a fixed fallback key
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        ToolClientBuilder::new().api_key(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> ToolClientBuilder {
        ToolClientBuilder::new()
    }

    /// Base URLs this client sends requests to
    #[must_use]
    pub fn base_urls(&self) -> &BaseUrls {
        &self.inner.base_urls
    }

    /// Invoke an endpoint and fold any error into a [`CallResult::Failure`]
    ///
    /// Failure messages read `An error occurred while <action>: <detail>`.
    pub async fn invoke(&self, endpoint: &EndpointDescriptor, args: &InvocationArgs) -> CallResult {
        match self.execute(endpoint, args).await {
            Ok(payload) => CallResult::Success(payload),
            Err(err) => {
                warn!(tool = endpoint.name, kind = ?err.kind(), error = %err, "tool call failed");
                CallResult::Failure(format!("An error occurred while {}: {err}", endpoint.action))
            }
        }
    }

    /// Invoke an endpoint, returning the typed error on failure
    pub async fn execute(
        &self,
        endpoint: &EndpointDescriptor,
        args: &InvocationArgs,
    ) -> Result<Value> {
        let api_key = self.resolve_key(endpoint, args);
        let request = prepare(
            endpoint,
            args,
            self.inner.base_urls.get(endpoint.host),
            api_key.as_deref(),
        )?;
        self.send(endpoint, request).await
    }

    /// Invoke a tool by name with a JSON arguments object
    pub async fn call(&self, name: &str, args: Value) -> CallResult {
        let Some(endpoint) = api::find(name) else {
            warn!(tool = name, "unknown tool");
            return CallResult::Failure(ToolError::UnknownTool(name.to_string()).to_string());
        };
        match InvocationArgs::from_json(args) {
            Ok(args) => self.invoke(endpoint, &args).await,
            Err(err) => {
                CallResult::Failure(format!("An error occurred while {}: {err}", endpoint.action))
            }
        }
    }

    /// Every catalog endpoint bound to this client
    #[must_use]
    pub fn tools(&self) -> Vec<ShodanTool> {
        api::ALL
            .iter()
            .copied()
            .map(|endpoint| ShodanTool::new(self.clone(), endpoint))
            .collect()
    }

    /// One catalog endpoint bound to this client
    #[must_use]
    pub fn tool(&self, name: &str) -> Option<ShodanTool> {
        api::find(name).map(|endpoint| ShodanTool::new(self.clone(), endpoint))
    }

    /// Function-calling definitions of every tool
    #[must_use]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        api::ALL.iter().copied().map(ToolDefinition::for_endpoint).collect()
    }

    /// Explicit `key` argument first, then the credential provider
    fn resolve_key(&self, endpoint: &EndpointDescriptor, args: &InvocationArgs) -> Option<String> {
        if !endpoint.requires_key() {
            return None;
        }
        let key = args
            .get(API_KEY_PARAM)
            .map(ArgValue::render)
            .or_else(|| self.inner.credentials.api_key());
        if key.is_none() {
            debug!(tool = endpoint.name, "no API key available, sending request without one");
        }
        key
    }

    async fn send(&self, endpoint: &EndpointDescriptor, request: PreparedRequest) -> Result<Value> {
        // The query string carries the key; only the path is logged.
        debug!(
            tool = endpoint.name,
            method = %request.method,
            path = request.url.path(),
            "sending request"
        );

        let builder = match request.method {
            HttpMethod::Get => self.inner.http.get(request.url),
            HttpMethod::Post => self.inner.http.post(request.url).form(&request.form),
        };

        let response = builder
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(describe_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(describe_transport_error)?;

        if status.is_success() {
            debug!(tool = endpoint.name, status = status.as_u16(), "request succeeded");
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(ToolError::Remote {
                status: status.as_u16(),
                body: error_body(&body, status.canonical_reason()),
            })
        }
    }
}

/// Stringify an error body, preferring its JSON form
fn error_body(body: &str, reason: Option<&str>) -> String {
    if body.trim().is_empty() {
        return reason.unwrap_or("empty response").to_string();
    }
    serde_json::from_str::<Value>(body).map_or_else(|_| body.trim().to_string(), |v| v.to_string())
}

/// Flatten a reqwest error and its causes, without the URL (it holds the key)
fn describe_transport_error(err: reqwest::Error) -> ToolError {
    let err = err.without_url();
    let mut message = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    if err.is_decode() {
        ToolError::Decode(message)
    } else {
        ToolError::Transport(message)
    }
}

/// Builder for configuring a [`ToolClient`]
#[derive(Debug)]
pub struct ToolClientBuilder {
    base_urls: BaseUrls,
    timeout: Duration,
    user_agent: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl Default for ToolClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolClientBuilder {
    /// Create a builder with production hosts and `SHODAN_API_KEY` credentials
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_urls: BaseUrls::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("shodan-tools/{}", env!("CARGO_PKG_VERSION")),
            credentials: Arc::new(EnvCredentials::default()),
        }
    }

    /// Replace every base URL
    #[must_use]
    pub fn base_urls(mut self, urls: BaseUrls) -> Self {
        self.base_urls = urls;
        self
    }

    /// Override the base URL of one host (useful for testing)
    #[must_use]
    pub fn base_url(mut self, host: ApiHost, url: impl Into<String>) -> Self {
        self.base_urls = self.base_urls.with(host, url);
        self
    }

    /// Set the transport timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Use a fixed fallback key
    #[must_use]
    pub fn api_key(self, key: impl Into<String>) -> Self {
        self.credentials(StaticCredentials::new(key))
    }

    /// Set where the fallback key comes from
    #[must_use]
    pub fn credentials(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.credentials = Arc::new(provider);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ToolClient> {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| ToolError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(ToolClient {
            inner: Arc::new(ClientInner {
                http,
                base_urls: self.base_urls,
                credentials: self.credentials,
            }),
        })
    }
}
