// src/config/parsing.rs

use crate::constants::PLUGIN_NAME;
use crate::errors::ConfigError;
use serde_json::Value;

/// Option name for the default language prefix.
pub(super) const DEFAULT_LANGUAGE_OPTION: &str = "default_language";

/// Options read from the host's per-plugin mapping.
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct ParsedOptions {
    pub(super) default_language: Option<String>,
    /// Keys present in the mapping that the extension does not recognise.
    pub(super) unknown_keys: Vec<String>,
}

/// Parses the extension's option mapping as found in the site configuration.
///
/// `null` means the plugin was enabled without options. Unknown keys are
/// collected for the caller to report and are otherwise ignored, the same
/// way the host treats unrecognised options.
pub(super) fn parse_plugin_options(options: &Value) -> Result<ParsedOptions, ConfigError> {
    let map = match options {
        Value::Null => return Ok(ParsedOptions::default()),
        Value::Object(map) => map,
        other => {
            return Err(ConfigError::InvalidValue {
                option: PLUGIN_NAME.to_string(),
                reason: format!("expected a mapping of options, got {}", kind_of(other)),
            })
        }
    };

    let mut parsed = ParsedOptions::default();
    for (key, value) in map {
        match key.as_str() {
            DEFAULT_LANGUAGE_OPTION => parsed.default_language = parse_string(key, value)?,
            _ => parsed.unknown_keys.push(key.clone()),
        }
    }
    Ok(parsed)
}

/// Reads an optional string option; `null` counts as unset.
fn parse_string(option: &str, value: &Value) -> Result<Option<String>, ConfigError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(ConfigError::InvalidValue {
            option: option.to_string(),
            reason: format!("expected a string, got {}", kind_of(other)),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
