// src/config/validation.rs

use super::PluginConfig;

/// Collects warnings about settings that are accepted but probably unintended.
///
/// Nothing here is fatal: an empty default language is a valid prefix that
/// simply matches every page.
pub(super) fn config_warnings(config: &PluginConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if config.default_language().is_empty() {
        warnings.push(
            "'default_language' is empty; every page will be kept in navigation and search"
                .to_string(),
        );
    }
    warnings
}
