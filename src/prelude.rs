//! The `lang-search` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `lang-search` library.
//!
//! # Example
//!
//! ```
//! use lang_search::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let plugin = LangSearchPlugin::new(ConfigBuilder::new().default_language("de").build()?);
//! let page = plugin.on_pre_page(Page::new("de/intro.md"), &SiteConfig::default(), &Files::default())?;
//! assert_eq!(page.meta["language"], "de");
//!
//! # Ok(())
//! # }
//! ```

pub use crate::config::{ConfigBuilder, PluginConfig};
pub use crate::core_types::{
    Context, File, Files, Meta, NavItem, Navigation, Page, SearchEntry, SiteConfig,
};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{matches_language, page_language};
pub use crate::input::InputSource;
pub use crate::output::OutputDestination;
pub use crate::pipeline::{BuildDocument, BuildOutput, BuildPipeline, RenderedPage};
pub use crate::plugin::{LangSearchPlugin, Plugin};
pub use crate::{execute, run, RunOptions};
