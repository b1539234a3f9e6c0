//! Function-calling definitions derived from endpoint descriptors.

use crate::{EndpointDescriptor, ParamType, API_KEY_PARAM};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

const API_KEY_DESCRIPTION: &str =
    "Your Shodan API key. Falls back to the configured key when omitted.";

/// A tool definition in the function-calling format agents expect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Always `"function"`
    #[serde(rename = "type")]
    pub kind: String,
    /// The function being described
    pub function: FunctionSchema,
}

/// Name, description and parameters of a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSchema {
    /// Tool name
    pub name: String,
    /// What the tool does
    pub description: String,
    /// JSON Schema of the arguments object
    pub parameters: ParametersSchema,
}

/// JSON Schema of an arguments object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametersSchema {
    /// Always `"object"`
    #[serde(rename = "type")]
    pub kind: String,
    /// One entry per parameter
    pub properties: BTreeMap<String, PropertySchema>,
    /// Parameters without a default that must be supplied
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

/// JSON Schema of a single parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON type name
    #[serde(rename = "type")]
    pub kind: String,
    /// Parameter description
    pub description: String,
    /// Value used when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ToolDefinition {
    /// Render the definition for a descriptor
    #[must_use]
    pub fn for_endpoint(endpoint: &EndpointDescriptor) -> Self {
        let mut properties = BTreeMap::new();
        let mut required = Vec::new();

        for param in endpoint.params {
            properties.insert(
                param.name.to_string(),
                PropertySchema {
                    kind: param.param_type.json_type().to_string(),
                    description: param.description.to_string(),
                    default: param.default.map(|d| d.to_json()),
                },
            );
            if param.required && param.default.is_none() {
                required.push(param.name.to_string());
            }
        }

        if endpoint.requires_key() {
            properties.insert(
                API_KEY_PARAM.to_string(),
                PropertySchema {
                    kind: ParamType::String.json_type().to_string(),
                    description: API_KEY_DESCRIPTION.to_string(),
                    default: None,
                },
            );
        }

        Self {
            kind: "function".to_string(),
            function: FunctionSchema {
                name: endpoint.name.to_string(),
                description: endpoint.description.to_string(),
                parameters: ParametersSchema {
                    kind: "object".to_string(),
                    properties,
                    required,
                },
            },
        }
    }

    /// Tool name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.function.name
    }
}

impl From<&EndpointDescriptor> for ToolDefinition {
    fn from(endpoint: &EndpointDescriptor) -> Self {
        Self::for_endpoint(endpoint)
    }
}
