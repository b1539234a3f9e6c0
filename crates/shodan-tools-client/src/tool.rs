//! The surface an agent framework consumes.

use crate::ToolClient;
use async_trait::async_trait;
use serde_json::Value;
use shodan_tools_core::{CallResult, EndpointDescriptor, InvocationArgs, ToolDefinition};

/// A callable tool with a static schema
///
/// Object safe, so heterogeneous tools can live in one `Vec<Box<dyn Tool>>`.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the agent calls the tool by
    fn name(&self) -> &str;

    /// What the tool does
    fn description(&self) -> &str;

    /// Function-calling definition
    fn definition(&self) -> ToolDefinition;

    /// Run the tool with a JSON arguments object
    async fn call(&self, args: Value) -> CallResult;
}

/// One catalog endpoint bound to a client
#[derive(Clone, Debug)]
pub struct ShodanTool {
    client: ToolClient,
    endpoint: &'static EndpointDescriptor,
}

impl ShodanTool {
    /// Bind `endpoint` to `client`
    #[must_use]
    pub fn new(client: ToolClient, endpoint: &'static EndpointDescriptor) -> Self {
        Self { client, endpoint }
    }

    /// The underlying descriptor
    #[must_use]
    pub const fn endpoint(&self) -> &'static EndpointDescriptor {
        self.endpoint
    }

    /// Run the tool with already-typed arguments
    pub async fn invoke(&self, args: &InvocationArgs) -> CallResult {
        self.client.invoke(self.endpoint, args).await
    }
}

#[async_trait]
impl Tool for ShodanTool {
    fn name(&self) -> &str {
        self.endpoint.name
    }

    fn description(&self) -> &str {
        self.endpoint.description
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition::for_endpoint(self.endpoint)
    }

    async fn call(&self, args: Value) -> CallResult {
        match InvocationArgs::from_json(args) {
            Ok(args) => self.invoke(&args).await,
            Err(err) => CallResult::Failure(format!(
                "An error occurred while {}: {err}",
                self.endpoint.action
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> ToolClient {
        ToolClient::builder().api_key("k").build().unwrap()
    }

    #[test]
    fn tools_are_object_safe() {
        let tools: Vec<Box<dyn Tool>> = client()
            .tools()
            .into_iter()
            .map(|t| Box::new(t) as Box<dyn Tool>)
            .collect();
        assert_eq!(tools.len(), 20);
        assert!(tools.iter().any(|t| t.name() == "search_trends"));
    }

    #[test]
    fn definition_matches_descriptor() {
        let tool = client().tool("get_host_info").unwrap();
        let def = tool.definition();
        assert_eq!(def.name(), tool.name());
        assert_eq!(def.function.description, tool.description());
        assert_eq!(def.function.parameters.required, ["ip"]);
    }

    #[tokio::test]
    async fn malformed_arguments_fail_without_a_request() {
        let tool = client().tool("dns_lookup").unwrap();
        let result = tool.call(json!({ "hostnames": ["a.com", "b.com"] })).await;
        let message = result.message().unwrap();
        assert!(message.starts_with("An error occurred while performing DNS lookup"));
        assert!(message.contains("hostnames"));
    }
}
