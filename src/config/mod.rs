//! Defines the `PluginConfig` struct holding the extension's options.
//!
//! The configuration is read once when the extension is set up for a build
//! and never changes afterwards.

use crate::constants::DEFAULT_LANGUAGE;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;
mod validation;

/// Options recognised by the language filter extension.
///
/// Construct it through [`ConfigBuilder`], or use `Default` for the stock
/// `"en"` default language.
///
/// # Examples
///
/// ```
/// use lang_search::config::{ConfigBuilder, PluginConfig};
///
/// assert_eq!(PluginConfig::default().default_language(), "en");
///
/// let config = ConfigBuilder::new().default_language("fr").build().unwrap();
/// assert_eq!(config.default_language(), "fr");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    default_language: String,
}

impl PluginConfig {
    /// The path prefix treated as the default language for navigation
    /// pruning and search indexing.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}
