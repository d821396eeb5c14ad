// src/plugin/lang_search.rs

use super::Plugin;
use crate::config::PluginConfig;
use crate::constants::{
    LANGUAGE_META_KEY, LOG_TARGET, PLUGIN_NAME, SEARCH_CONTEXT_KEY, SEARCH_INDEX_KEY,
};
use crate::core_types::{Context, Files, Navigation, Page, SearchEntry, SiteConfig};
use crate::errors::{json_error, Result};
use crate::filtering::{matches_language, page_language};
use serde_json::{Map, Value};

/// Labels pages with their language and restricts navigation and search to
/// the configured default language.
///
/// The only state is the immutable [`PluginConfig`] it was built with.
///
/// # Examples
///
/// ```
/// use lang_search::config::PluginConfig;
/// use lang_search::core_types::{Files, NavItem, Navigation, SiteConfig};
/// use lang_search::plugin::{LangSearchPlugin, Plugin};
///
/// let plugin = LangSearchPlugin::new(PluginConfig::default());
/// let nav = Navigation::new(vec![
///     NavItem::new("en/index.md"),
///     NavItem::new("fr/index.md"),
///     NavItem::new("en/guide.md"),
/// ]);
///
/// let nav = plugin
///     .on_nav(nav, &SiteConfig::default(), &Files::default())
///     .unwrap();
/// let kept: Vec<&str> = nav.items.iter().map(|i| i.src_path()).collect();
/// assert_eq!(kept, ["en/index.md", "en/guide.md"]);
/// ```
#[derive(Debug, Clone)]
pub struct LangSearchPlugin {
    config: PluginConfig,
}

impl LangSearchPlugin {
    /// Creates the extension for one build.
    pub fn new(config: PluginConfig) -> Self {
        log::info!(target: LOG_TARGET, "LangSearchPlugin initialized");
        Self { config }
    }

    /// The configuration the extension was built with.
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Sets `page.meta["language"]` to the first segment of the page's source path.
    pub fn tag_page_language(&self, mut page: Page) -> Page {
        log::info!(target: LOG_TARGET, "Processing page: {}", page.src_path());
        let language = page_language(page.src_path()).to_string();
        log::debug!(
            target: LOG_TARGET,
            "Set language for {} to {}",
            page.src_path(),
            language
        );
        page.meta
            .insert(LANGUAGE_META_KEY.to_string(), Value::String(language));
        page
    }

    /// Keeps only the top-level navigation entries of the default language.
    ///
    /// Children of a kept entry are kept as they are. `nav.pages` is not
    /// touched.
    pub fn filter_navigation(&self, mut nav: Navigation) -> Navigation {
        log::info!(
            target: LOG_TARGET,
            "Modifying navigation items based on default language"
        );
        let default_language = self.config.default_language();
        nav.items
            .retain(|item| matches_language(item.src_path(), default_language));
        log::debug!(
            target: LOG_TARGET,
            "Filtered navigation items to default language: {} ({} kept)",
            default_language,
            nav.items.len()
        );
        nav
    }

    /// Replaces `context["search"]` with an index of the default-language pages.
    ///
    /// # Errors
    /// Returns `Error::Json` if a page reference cannot be serialized.
    pub fn build_search_context(
        &self,
        mut context: Context,
        page: &Page,
        nav: &Navigation,
    ) -> Result<Context> {
        log::info!(
            target: LOG_TARGET,
            "Setting search index context for page: {}",
            page.src_path()
        );
        let default_language = self.config.default_language();
        let index = nav
            .pages
            .iter()
            .filter(|p| matches_language(p.src_path(), default_language))
            .map(|p| serde_json::to_value(SearchEntry::from(p)))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| json_error("search entry", e))?;

        let mut search = Map::new();
        search.insert(SEARCH_INDEX_KEY.to_string(), Value::Array(index));
        context.insert(SEARCH_CONTEXT_KEY.to_string(), Value::Object(search));
        log::debug!(
            target: LOG_TARGET,
            "Search context set for default language: {}",
            default_language
        );
        Ok(context)
    }
}

impl Plugin for LangSearchPlugin {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn on_pre_page(&self, page: Page, _config: &SiteConfig, _files: &Files) -> Result<Page> {
        Ok(self.tag_page_language(page))
    }

    fn on_nav(&self, nav: Navigation, _config: &SiteConfig, _files: &Files) -> Result<Navigation> {
        Ok(self.filter_navigation(nav))
    }

    fn on_page_context(
        &self,
        context: Context,
        page: &Page,
        _config: &SiteConfig,
        nav: &Navigation,
    ) -> Result<Context> {
        self.build_search_context(context, page, nav)
    }
}
