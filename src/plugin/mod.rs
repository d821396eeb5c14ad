//! Provides the host extension contract and the language filter extension.
//!
//! A host build pipeline calls each registered [`Plugin`] at fixed lifecycle
//! points. Every hook receives the host object by value and hands it back,
//! possibly mutated, so ownership makes the mutation contract explicit.

use crate::core_types::{Context, Files, Navigation, Page, SiteConfig};
use crate::errors::Result;
use std::fmt;

mod lang_search;

pub use lang_search::LangSearchPlugin;

/// A trait for build lifecycle extensions.
///
/// All hooks default to returning their input unchanged, so an extension only
/// implements the points it cares about.
pub trait Plugin: Send + Sync {
    /// Returns the name the extension is registered under.
    fn name(&self) -> &'static str;

    /// Called for each page before it is rendered.
    fn on_pre_page(&self, page: Page, _config: &SiteConfig, _files: &Files) -> Result<Page> {
        Ok(page)
    }

    /// Called once after the site navigation has been assembled.
    fn on_nav(&self, nav: Navigation, _config: &SiteConfig, _files: &Files) -> Result<Navigation> {
        Ok(nav)
    }

    /// Called for each page once its render context has been assembled.
    fn on_page_context(
        &self,
        context: Context,
        _page: &Page,
        _config: &SiteConfig,
        _nav: &Navigation,
    ) -> Result<Context> {
        Ok(context)
    }
}

// Implement Debug manually for Box<dyn Plugin> by using the name method.
impl fmt::Debug for Box<dyn Plugin> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Plugin").field(&self.name()).finish()
    }
}
