//! Drives registered plugins through one build's lifecycle.
//!
//! This is the stand-in for the host build pipeline: it assembles the
//! navigation, runs the navigation hook once, runs the pre-page hook for
//! every documentation page, then the page-context hook for every page.
//! Everything is sequential; each stage finishes before the next begins.

use crate::core_types::{Context, Files, NavItem, Navigation, Page, SiteConfig};
use crate::errors::{json_error, Result};
use crate::plugin::Plugin;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A complete build as handed over by the host: configuration, source files
/// and the raw navigation tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildDocument {
    /// Site-wide configuration, including per-plugin options.
    #[serde(default)]
    pub config: SiteConfig,
    /// All source files of the build.
    #[serde(default)]
    pub files: Files,
    /// Top-level navigation entries, before any plugin has run.
    #[serde(default)]
    pub nav: Vec<NavItem>,
}

/// One page after its hooks have run, with the context it would render with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPage {
    /// The page, as returned by the pre-page hooks.
    pub page: Page,
    /// The render context, as returned by the page-context hooks.
    pub context: Context,
}

/// The result of a build: final navigation and every rendered page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildOutput {
    /// Navigation as returned by the navigation hooks.
    pub nav: Navigation,
    /// Every documentation page, in file order.
    pub pages: Vec<RenderedPage>,
}

/// Runs a build's lifecycle hooks over a set of plugins, in registration order.
#[derive(Debug)]
pub struct BuildPipeline {
    site: SiteConfig,
    files: Files,
    plugins: Vec<Box<dyn Plugin>>,
}

impl BuildPipeline {
    /// Creates a pipeline with no plugins registered.
    pub fn new(site: SiteConfig, files: Files) -> Self {
        Self {
            site,
            files,
            plugins: Vec::new(),
        }
    }

    /// Registers a plugin; hooks run in registration order.
    pub fn with_plugin(mut self, plugin: Box<dyn Plugin>) -> Self {
        log::debug!("Registering plugin '{}'", plugin.name());
        self.plugins.push(plugin);
        self
    }

    /// Runs the full lifecycle for the given navigation tree.
    ///
    /// Every documentation page is rendered: each entry of the build's files,
    /// followed by any navigation page with no matching file. Pages listed in
    /// the navigation keep their navigation title. All pre-page hooks run
    /// before any page-context hook, and the tagged pages replace their
    /// counterparts in `nav.pages`.
    ///
    /// # Errors
    /// Propagates the first error returned by any hook.
    #[tracing::instrument(skip_all, fields(plugins = self.plugins.len(), items = nav_items.len()))]
    pub fn run(&self, nav_items: Vec<NavItem>) -> Result<BuildOutput> {
        let mut nav = Navigation::new(nav_items);
        for plugin in &self.plugins {
            nav = plugin.on_nav(nav, &self.site, &self.files)?;
        }

        let mut pages = Vec::new();
        for page in self.documentation_pages(&nav) {
            pages.push(self.pre_page(page)?);
        }

        // Navigation and rendering share the same page objects.
        for page in &pages {
            if let Some(slot) = nav
                .pages
                .iter_mut()
                .find(|p| p.src_path() == page.src_path())
            {
                *slot = page.clone();
            }
        }

        let mut rendered = Vec::with_capacity(pages.len());
        for page in pages {
            let context = self.page_context(&page, &nav)?;
            rendered.push(RenderedPage { page, context });
        }

        log::info!(
            "Build finished: {} navigation item(s), {} page(s)",
            nav.items.len(),
            rendered.len()
        );
        Ok(BuildOutput {
            nav,
            pages: rendered,
        })
    }

    /// Files in build order, then navigation pages the files don't cover.
    fn documentation_pages(&self, nav: &Navigation) -> Vec<Page> {
        let mut pages: Vec<Page> = self
            .files
            .iter()
            .map(|file| {
                nav.pages
                    .iter()
                    .find(|p| p.src_path() == file.src_path)
                    .cloned()
                    .unwrap_or_else(|| Page {
                        file: file.clone(),
                        ..Default::default()
                    })
            })
            .collect();
        for page in &nav.pages {
            if !pages.iter().any(|p| p.src_path() == page.src_path()) {
                pages.push(page.clone());
            }
        }
        pages
    }

    fn pre_page(&self, mut page: Page) -> Result<Page> {
        for plugin in &self.plugins {
            page = plugin.on_pre_page(page, &self.site, &self.files)?;
        }
        Ok(page)
    }

    fn page_context(&self, page: &Page, nav: &Navigation) -> Result<Context> {
        let mut context = self.base_context(page)?;
        for plugin in &self.plugins {
            context = plugin.on_page_context(context, page, &self.site, nav)?;
        }
        Ok(context)
    }

    /// The context the host provides before plugins contribute to it.
    fn base_context(&self, page: &Page) -> Result<Context> {
        let mut context = Context::new();
        context.insert(
            "page".to_string(),
            serde_json::to_value(page).map_err(|e| json_error("page", e))?,
        );
        if let Some(site_name) = &self.site.site_name {
            context.insert("site_name".to_string(), Value::String(site_name.clone()));
        }
        Ok(context)
    }
}
