use crate::{Result, ToolError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Name of the query parameter that carries the API key
pub const API_KEY_PARAM: &str = "key";

/// The Shodan host an endpoint lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiHost {
    /// Main REST API
    Api,
    /// Historical trends API
    Trends,
    /// Free, unauthenticated InternetDB
    InternetDb,
}

impl ApiHost {
    /// All hosts, in a stable order
    pub const ALL: [Self; 3] = [Self::Api, Self::Trends, Self::InternetDb];

    /// Production base URL for this host
    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::Api => "https://api.shodan.io",
            Self::Trends => "https://trends.shodan.io",
            Self::InternetDb => "https://internetdb.shodan.io",
        }
    }
}

impl std::fmt::Display for ApiHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api => write!(f, "api"),
            Self::Trends => write!(f, "trends"),
            Self::InternetDb => write!(f, "internetdb"),
        }
    }
}

/// HTTP method used by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET, arguments travel in the path and query string
    Get,
    /// POST, form parameters travel in a urlencoded body
    Post,
}

impl HttpMethod {
    /// Upper-case method name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a parameter is placed in the outgoing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Appended to the query string
    Query,
    /// Encoded into an `application/x-www-form-urlencoded` body
    Form,
    /// Substituted for a `{name}` placeholder in the path template
    Path,
}

/// Declared type of a parameter, as advertised to the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// Free-form string
    String,
    /// Whole number
    Integer,
    /// `true` / `false`
    Boolean,
}

impl ParamType {
    /// JSON Schema type name
    #[must_use]
    pub const fn json_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }
}

/// How an endpoint authenticates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Auth {
    /// `key` query parameter
    ApiKey,
    /// No credentials
    None,
}

/// A default value baked into a descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    /// String default
    Str(&'static str),
    /// Integer default
    Int(i64),
    /// Boolean default
    Bool(bool),
}

impl Literal {
    /// JSON form, used in tool schemas
    #[must_use]
    pub fn to_json(self) -> serde_json::Value {
        match self {
            Self::Str(s) => serde_json::Value::from(s),
            Self::Int(n) => serde_json::Value::from(n),
            Self::Bool(b) => serde_json::Value::from(b),
        }
    }
}

/// One parameter of an endpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Argument name, also the wire name
    pub name: &'static str,
    /// Where the value goes
    pub placement: Placement,
    /// Advertised type
    pub param_type: ParamType,
    /// Whether the caller must supply it
    pub required: bool,
    /// Value used when the caller omits it
    pub default: Option<Literal>,
    /// Human-readable description
    pub description: &'static str,
}

impl ParamSpec {
    const fn new(
        name: &'static str,
        placement: Placement,
        param_type: ParamType,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            placement,
            param_type,
            required: false,
            default: None,
            description,
        }
    }

    /// Optional query-string parameter
    #[must_use]
    pub const fn query(
        name: &'static str,
        param_type: ParamType,
        description: &'static str,
    ) -> Self {
        Self::new(name, Placement::Query, param_type, description)
    }

    /// Optional form-body parameter
    #[must_use]
    pub const fn form(
        name: &'static str,
        param_type: ParamType,
        description: &'static str,
    ) -> Self {
        Self::new(name, Placement::Form, param_type, description)
    }

    /// Path parameter; always required
    #[must_use]
    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self::new(name, Placement::Path, ParamType::String, description).required()
    }

    /// Mark the parameter as required
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the value used when the caller omits the parameter
    #[must_use]
    pub const fn default_value(mut self, value: Literal) -> Self {
        self.default = Some(value);
        self
    }
}

/// Static description of one remote endpoint
///
/// Descriptors are plain data: the client turns a descriptor plus an
/// [`InvocationArgs`](crate::InvocationArgs) into exactly one HTTP request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointDescriptor {
    /// Tool name advertised to the agent
    pub name: &'static str,
    /// Tool description advertised to the agent
    pub description: &'static str,
    /// Gerund phrase used in failure messages, e.g. "searching Shodan"
    pub action: &'static str,
    /// Which Shodan host serves the endpoint
    pub host: ApiHost,
    /// HTTP method
    pub method: HttpMethod,
    /// Path template, may contain `{name}` placeholders
    pub path: &'static str,
    /// Authentication scheme
    pub auth: Auth,
    /// Parameters in the order they are sent
    pub params: &'static [ParamSpec],
}

impl EndpointDescriptor {
    /// Look up a parameter by name
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Parameters sent in the query string, in declaration order
    pub fn query_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.placed(Placement::Query)
    }

    /// Parameters sent in the form body, in declaration order
    pub fn form_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.placed(Placement::Form)
    }

    /// Parameters substituted into the path
    pub fn path_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.placed(Placement::Path)
    }

    /// Parameters the caller must supply
    pub fn required_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(|p| p.required)
    }

    /// Whether requests carry the API key
    #[must_use]
    pub fn requires_key(&self) -> bool {
        self.auth == Auth::ApiKey
    }

    fn placed(&self, placement: Placement) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(move |p| p.placement == placement)
    }

    /// Check that the descriptor is internally consistent
    ///
    /// Every `{placeholder}` in the path must have a matching path parameter
    /// and vice versa, parameter names must be unique and must not collide
    /// with the API key, and form parameters only make sense on POST.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for param in self.params {
            if !seen.insert(param.name) {
                return Err(self.invalid(format!("duplicate parameter '{}'", param.name)));
            }
            if param.name == API_KEY_PARAM {
                return Err(self.invalid("the API key is attached by the client".into()));
            }
            if param.placement == Placement::Form && self.method != HttpMethod::Post {
                return Err(self.invalid(format!(
                    "form parameter '{}' on a {} endpoint",
                    param.name, self.method
                )));
            }
        }

        let placeholders = path_placeholders(self.path);
        for name in &placeholders {
            if !self.path_params().any(|p| p.name == *name) {
                return Err(self.invalid(format!("placeholder '{{{name}}}' has no parameter")));
            }
        }
        for param in self.path_params() {
            if !placeholders.contains(&param.name) {
                return Err(self.invalid(format!(
                    "path parameter '{}' missing from template",
                    param.name
                )));
            }
        }

        Ok(())
    }

    fn invalid(&self, reason: String) -> ToolError {
        ToolError::InvalidArgument {
            name: self.name.to_string(),
            reason,
        }
    }
}

fn path_placeholders(template: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        out.push(&rest[start + 1..start + len]);
        rest = &rest[start + len + 1..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: EndpointDescriptor = EndpointDescriptor {
        name: "get_host_info",
        description: "Host lookup",
        action: "retrieving host information",
        host: ApiHost::Api,
        method: HttpMethod::Get,
        path: "/shodan/host/{ip}",
        auth: Auth::ApiKey,
        params: &[
            ParamSpec::path("ip", "IP address"),
            ParamSpec::query("history", ParamType::Boolean, "History")
                .default_value(Literal::Bool(false)),
        ],
    };

    #[test]
    fn views_follow_placement() {
        assert_eq!(HOST.path_params().map(|p| p.name).collect::<Vec<_>>(), ["ip"]);
        assert_eq!(HOST.query_params().map(|p| p.name).collect::<Vec<_>>(), ["history"]);
        assert_eq!(HOST.form_params().count(), 0);
        assert_eq!(HOST.required_params().map(|p| p.name).collect::<Vec<_>>(), ["ip"]);
        assert!(HOST.requires_key());
    }

    #[test]
    fn consistent_descriptor_validates() {
        HOST.validate().unwrap();
    }

    #[test]
    fn dangling_placeholder_is_rejected() {
        let broken = EndpointDescriptor {
            path: "/shodan/host/{ip}/{port}",
            ..HOST
        };
        let err = broken.validate().unwrap_err();
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn form_params_on_get_are_rejected() {
        const BROKEN: EndpointDescriptor = EndpointDescriptor {
            params: &[
                ParamSpec::path("ip", "IP address"),
                ParamSpec::form("ips", ParamType::String, "IPs"),
            ],
            ..HOST
        };
        assert!(BROKEN.validate().is_err());
    }

    #[test]
    fn placeholders_are_extracted_in_order() {
        assert_eq!(path_placeholders("/a/{x}/b/{y}"), ["x", "y"]);
        assert!(path_placeholders("/shodan/ports").is_empty());
    }

    #[test]
    fn hosts_have_production_urls() {
        assert_eq!(ApiHost::Trends.default_base_url(), "https://trends.shodan.io");
        assert_eq!(ApiHost::InternetDb.to_string(), "internetdb");
    }
}
