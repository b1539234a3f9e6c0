use crate::{Literal, Result, ToolError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single scalar argument value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// `true` / `false`
    Bool(bool),
    /// Whole number
    Integer(i64),
    /// Whole number above `i64::MAX`
    Unsigned(u64),
    /// Floating point number
    Float(f64),
    /// String
    String(String),
}

impl ArgValue {
    /// Render the value as it appears on the wire
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for ArgValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<Literal> for ArgValue {
    fn from(lit: Literal) -> Self {
        match lit {
            Literal::Str(s) => Self::String(s.to_string()),
            Literal::Int(n) => Self::Integer(n),
            Literal::Bool(b) => Self::Bool(b),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ArgValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for ArgValue {
    fn from(n: i32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<u16> for ArgValue {
    fn from(n: u16) -> Self {
        Self::Integer(n.into())
    }
}

impl From<u32> for ArgValue {
    fn from(n: u32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<u64> for ArgValue {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Self::Unsigned(n), Self::Integer)
    }
}

impl From<f64> for ArgValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

/// Arguments supplied to a single invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationArgs(BTreeMap<String, ArgValue>);

impl InvocationArgs {
    /// Empty argument set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument, builder style
    ///
    /// ```rust
    /// use shodan_tools_core::InvocationArgs;
    ///
    /// let args = InvocationArgs::new().with("query", "apache").with("page", 2);
    /// assert_eq!(args.get("page").map(ToString::to_string).as_deref(), Some("2"));
    /// ```
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace an argument
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get an argument by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.0.get(name)
    }

    /// Whether an argument is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of arguments
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no arguments were supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Build arguments from a tool-call JSON payload
    ///
    /// `null` (as the whole payload or as a value) means "absent". Nested
    /// arrays and objects are rejected since every parameter is a scalar.
    pub fn from_json(value: Value) -> Result<Self> {
        let map = match value {
            Value::Null => return Ok(Self::new()),
            Value::Object(map) => map,
            other => {
                return Err(ToolError::InvalidArgument {
                    name: "arguments".to_string(),
                    reason: format!("expected a JSON object, got {}", json_kind(&other)),
                })
            }
        };

        let mut args = Self::new();
        for (name, value) in map {
            let value = match value {
                Value::Null => continue,
                Value::Bool(b) => ArgValue::Bool(b),
                Value::String(s) => ArgValue::String(s),
                Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        ArgValue::Integer(i)
                    } else if let Some(u) = n.as_u64() {
                        ArgValue::Unsigned(u)
                    } else {
                        ArgValue::Float(n.as_f64().unwrap_or_default())
                    }
                }
                other => {
                    return Err(ToolError::InvalidArgument {
                        reason: format!("expected a scalar, got {}", json_kind(&other)),
                        name,
                    })
                }
            };
            args.0.insert(name, value);
        }
        Ok(args)
    }
}

impl TryFrom<Value> for InvocationArgs {
    type Error = ToolError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json(value)
    }
}

impl<K, V> FromIterator<(K, V)> for InvocationArgs
where
    K: Into<String>,
    V: Into<ArgValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn values_render_like_query_strings() {
        assert_eq!(ArgValue::from(true).render(), "true");
        assert_eq!(ArgValue::from(443u16).render(), "443");
        assert_eq!(ArgValue::from(1.5).render(), "1.5");
        assert_eq!(ArgValue::from("port:22").render(), "port:22");
    }

    #[test]
    fn json_payload_becomes_args() {
        let args = InvocationArgs::from_json(json!({
            "query": "nginx",
            "page": 3,
            "minify": true,
            "facets": null,
        }))
        .unwrap();

        assert_eq!(args.len(), 3);
        assert_eq!(args.get("query"), Some(&ArgValue::String("nginx".into())));
        assert_eq!(args.get("page"), Some(&ArgValue::Integer(3)));
        assert_eq!(args.get("minify"), Some(&ArgValue::Bool(true)));
        assert!(!args.contains("facets"));
    }

    #[test]
    fn large_integers_keep_every_digit() {
        let args = InvocationArgs::from_json(json!({ "page": u64::MAX })).unwrap();

        assert_eq!(args.get("page"), Some(&ArgValue::Unsigned(u64::MAX)));
        assert_eq!(args.get("page").unwrap().render(), "18446744073709551615");
        assert_eq!(ArgValue::from(7u64), ArgValue::Integer(7));
    }

    #[test]
    fn null_payload_is_empty() {
        assert!(InvocationArgs::from_json(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn nested_values_are_rejected() {
        let err = InvocationArgs::from_json(json!({ "ips": ["1.1.1.1"] })).unwrap_err();
        assert!(err.to_string().contains("ips"));
        assert!(err.to_string().contains("an array"));

        let err = InvocationArgs::from_json(json!("query")).unwrap_err();
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn collects_from_pairs() {
        let args: InvocationArgs = [("ip", "8.8.8.8"), ("key", "abc")].into_iter().collect();
        assert_eq!(args.iter().map(|(k, _)| k).collect::<Vec<_>>(), ["ip", "key"]);
    }

    #[test]
    fn defaults_convert_to_values() {
        assert_eq!(ArgValue::from(Literal::Int(1)), ArgValue::Integer(1));
        assert_eq!(ArgValue::from(Literal::Bool(false)).render(), "false");
    }
}
