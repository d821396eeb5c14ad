// src/config/builder.rs

use super::parsing::parse_plugin_options;
use super::validation::config_warnings;
use super::PluginConfig;
use crate::constants::{DEFAULT_LANGUAGE, PLUGIN_NAME};
use crate::core_types::SiteConfig;
use crate::errors::Result;
use serde_json::Value;

/// A builder for creating a `PluginConfig` programmatically.
///
/// Options can come from the host's site configuration or from explicit
/// calls. An explicitly set default language always wins over the one found
/// in the site configuration.
///
/// # Examples
///
/// ```
/// use lang_search::config::ConfigBuilder;
/// use lang_search::core_types::SiteConfig;
/// use serde_json::json;
///
/// let mut site = SiteConfig::default();
/// site.plugins.insert("lang-search".into(), json!({ "default_language": "fr" }));
///
/// let config = ConfigBuilder::from_site_config(&site).build().unwrap();
/// assert_eq!(config.default_language(), "fr");
///
/// let overridden = ConfigBuilder::from_site_config(&site)
///     .default_language("de")
///     .build()
///     .unwrap();
/// assert_eq!(overridden.default_language(), "de");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    default_language: Option<String>,
    plugin_options: Option<Value>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with no options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the extension's entry in the site configuration, if any.
    pub fn from_site_config(site: &SiteConfig) -> Self {
        Self {
            plugin_options: site.plugins.get(PLUGIN_NAME).cloned(),
            ..Self::default()
        }
    }

    /// Sets the default language prefix explicitly.
    pub fn default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    /// Sets the raw option mapping, as the host would pass it.
    pub fn plugin_options(mut self, options: Value) -> Self {
        self.plugin_options = Some(options);
        self
    }

    /// Builds the final `PluginConfig`.
    ///
    /// # Errors
    /// Returns `Error::Config` if the option mapping is malformed, e.g. a
    /// non-string `default_language`.
    pub fn build(self) -> Result<PluginConfig> {
        let parsed = match &self.plugin_options {
            Some(options) => parse_plugin_options(options)?,
            None => Default::default(),
        };

        let default_language = self
            .default_language
            .or_else(|| parsed.default_language.clone())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        for key in &parsed.unknown_keys {
            log::warn!("Unrecognised configuration name for '{PLUGIN_NAME}': '{key}'");
        }

        let config = PluginConfig { default_language };
        for warning in config_warnings(&config) {
            log::warn!("{}", warning);
        }
        log::debug!("Plugin configuration built: {:?}", config);
        Ok(config)
    }
}
