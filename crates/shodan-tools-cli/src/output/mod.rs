//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tables and indented JSON with colors
    #[default]
    Pretty,
    /// Compact JSON, one document per line
    Json,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl OutputFormat {
    /// Render a serializable value as a document in this format.
    ///
    /// `Pretty` has no structured form of its own and renders indented JSON.
    pub fn render<T: Serialize + ?Sized>(self, value: &T) -> Result<String> {
        Ok(match self {
            Self::Pretty => serde_json::to_string_pretty(value)?,
            Self::Json => serde_json::to_string(value)?,
            Self::Yaml => serde_yaml::to_string(value)?.trim_end().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_aliases() {
        assert_eq!("YML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn renders_each_format() {
        let value = json!({ "ports": [22] });
        assert_eq!(OutputFormat::Json.render(&value).unwrap(), r#"{"ports":[22]}"#);
        assert_eq!(OutputFormat::Yaml.render(&value).unwrap(), "ports:\n- 22");
        assert!(OutputFormat::Pretty.render(&value).unwrap().contains("\n"));
    }
}
