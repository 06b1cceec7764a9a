//! Output formatting for command results.
//!
//! Responsibilities:
//! - Render serializable results as JSON or YAML.
//! - Render tabular listings (schemas, routes) in either format.
//!
//! Does NOT handle:
//! - Writing to stdout (callers print the returned string).

use anyhow::Result;
use serde::Serialize;
use std::str::FromStr;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, yaml", s),
        }
    }
}

/// Formatter trait for the different output types.
pub trait Formatter {
    fn format_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<String>;
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let rendered = serde_yaml::to_string(value)?;
        Ok(rendered.trim_end().to_string())
    }
}

/// Render `value` in the requested format.
pub fn render<T: Serialize + ?Sized>(format: OutputFormat, value: &T) -> Result<String> {
    match format {
        OutputFormat::Json => JsonFormatter.format_value(value),
        OutputFormat::Yaml => YamlFormatter.format_value(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        let err = "table".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("Valid options: json, yaml"));
    }

    #[test]
    fn test_render_json_is_pretty() {
        let value = serde_json::json!({"recordId": 1});
        let out = render(OutputFormat::Json, &value).unwrap();
        assert_eq!(out, "{\n  \"recordId\": 1\n}");
    }

    #[test]
    fn test_render_yaml() {
        let value = serde_json::json!({"name": "probe", "status": "OK"});
        let out = render(OutputFormat::Yaml, &value).unwrap();
        assert!(out.contains("name: probe"));
        assert!(out.contains("status: OK"));
        assert!(!out.ends_with('\n'));
    }
}
