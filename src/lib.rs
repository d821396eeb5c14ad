//! `lang-search` is a documentation-site build extension that keeps
//! navigation and search indexing to a single language, chosen by the first
//! segment of each page's source path.
//!
//! It plugs into a host build pipeline at three lifecycle points:
//! 1.  **Pre-page**: tags every page with `meta.language`, the part of its
//!     source path before the first `/`.
//! 2.  **Navigation**: drops top-level navigation entries whose source path
//!     does not start with the configured `default_language`.
//! 3.  **Page context**: sets `search.index` in each page's render context to
//!     the pages of the default language.
//!
//! The extension is the [`LangSearchPlugin`] type, an implementation of the
//! [`Plugin`] host contract. [`BuildPipeline`] drives any set of plugins
//! through a build, and the `lang-search` binary runs the whole thing over a
//! JSON build document.
//!
//! # Example: Library Usage
//!
//! ```
//! use lang_search::{execute, BuildDocument, ConfigBuilder};
//! use lang_search::core_types::NavItem;
//!
//! let document = BuildDocument {
//!     nav: vec![
//!         NavItem::new("en/index.md"),
//!         NavItem::new("fr/index.md"),
//!         NavItem::new("en/guide.md"),
//!     ],
//!     ..Default::default()
//! };
//! let config = ConfigBuilder::from_site_config(&document.config).build().unwrap();
//!
//! let output = execute(document, config).unwrap();
//!
//! let nav: Vec<&str> = output.nav.items.iter().map(|i| i.src_path()).collect();
//! assert_eq!(nav, ["en/index.md", "en/guide.md"]);
//! assert_eq!(output.pages[1].page.meta["language"], "fr");
//! assert_eq!(output.pages[1].context["search"]["index"][1]["src_path"], "en/guide.md");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod filtering;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod plugin;
pub mod prelude;

// Re-export key public types for easier use as a library
pub use config::{ConfigBuilder, PluginConfig};
pub use errors::{Error, Result};
pub use input::InputSource;
pub use output::OutputDestination;
pub use pipeline::{BuildDocument, BuildOutput, BuildPipeline, RenderedPage};
pub use plugin::{LangSearchPlugin, Plugin};

/// Options for a complete command-line style run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Where to read the build document from.
    pub input: InputSource,
    /// Overrides the `default_language` found in the build document.
    pub default_language: Option<String>,
    /// Where to write the result.
    pub output: OutputDestination,
    /// Pretty-print the JSON result.
    pub pretty: bool,
}

impl From<cli::Cli> for RunOptions {
    fn from(cli: cli::Cli) -> Self {
        Self {
            input: InputSource::from_arg(cli.input.as_deref()),
            default_language: cli.default_language,
            output: cli
                .output_file
                .map_or(OutputDestination::Stdout, |path| {
                    OutputDestination::File(path.into())
                }),
            pretty: cli.pretty,
        }
    }
}

/// Runs the language filter over a build document.
///
/// The document's navigation is assembled, passed through the extension's
/// hooks and returned together with every rendered page.
///
/// # Errors
/// Propagates any error returned by a hook.
pub fn execute(document: BuildDocument, config: PluginConfig) -> Result<BuildOutput> {
    let BuildDocument {
        config: site,
        files,
        nav,
    } = document;
    log::debug!(
        "Executing build with {} file(s) and {} navigation item(s)",
        files.len(),
        nav.len()
    );
    BuildPipeline::new(site, files)
        .with_plugin(Box::new(LangSearchPlugin::new(config)))
        .run(nav)
}

/// Executes the complete run: read the document, filter, write the result.
///
/// This mirrors the command-line execution. The plugin configuration is read
/// from the document's site configuration, with
/// [`RunOptions::default_language`] taking precedence.
///
/// # Errors
/// Returns `Error::Io` or `Error::Json` for unreadable input or unwritable
/// output, and `Error::Config` for malformed plugin options.
pub fn run(options: &RunOptions) -> Result<BuildOutput> {
    let document = input::read_build_document(&options.input)?;

    let mut builder = ConfigBuilder::from_site_config(&document.config);
    if let Some(language) = &options.default_language {
        builder = builder.default_language(language.clone());
    }
    let config = builder.build()?;

    let output = execute(document, config)?;

    let mut writer = output::writer::setup_output_writer(&options.output)?;
    output::write_build_output(&output, &mut *writer, options.pretty, &options.output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::NavItem;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn write_document(dir: &std::path::Path, value: serde_json::Value) -> anyhow::Result<InputSource> {
        let path = dir.join("build.json");
        fs::write(&path, serde_json::to_string(&value)?)?;
        Ok(InputSource::File(path))
    }

    #[test]
    fn test_execute_scenario() -> Result<()> {
        let document = BuildDocument {
            nav: vec![
                NavItem::new("en/index.md"),
                NavItem::new("fr/index.md"),
                NavItem::new("en/guide.md"),
            ],
            ..Default::default()
        };
        let output = execute(document, PluginConfig::default())?;
        let nav: Vec<&str> = output.nav.items.iter().map(NavItem::src_path).collect();
        assert_eq!(nav, ["en/index.md", "en/guide.md"]);
        Ok(())
    }

    #[test]
    fn test_run_reads_config_from_document() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let output_path = temp_dir.path().join("out.json");
        let input = write_document(
            temp_dir.path(),
            json!({
                "config": { "plugins": { "lang-search": { "default_language": "fr" } } },
                "nav": [
                    { "file": { "src_path": "en/index.md" } },
                    { "file": { "src_path": "fr/index.md" } }
                ]
            }),
        )?;
        let options = RunOptions {
            input,
            output: OutputDestination::File(output_path.clone()),
            ..Default::default()
        };

        let output = run(&options)?;
        assert_eq!(output.nav.items.len(), 1);
        assert_eq!(output.nav.items[0].src_path(), "fr/index.md");

        let written: BuildOutput = serde_json::from_str(&fs::read_to_string(&output_path)?)?;
        assert_eq!(written, output);
        Ok(())
    }

    #[test]
    fn test_run_option_overrides_document() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let input = write_document(
            temp_dir.path(),
            json!({
                "config": { "plugins": { "lang-search": { "default_language": "fr" } } },
                "nav": [
                    { "file": { "src_path": "en/index.md" } },
                    { "file": { "src_path": "fr/index.md" } }
                ]
            }),
        )?;
        let options = RunOptions {
            input,
            default_language: Some("en".to_string()),
            output: OutputDestination::File(temp_dir.path().join("out.json")),
            ..Default::default()
        };
        let output = run(&options)?;
        assert_eq!(output.nav.items[0].src_path(), "en/index.md");
        Ok(())
    }

    #[test]
    fn test_run_rejects_bad_plugin_options() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let input = write_document(
            temp_dir.path(),
            json!({ "config": { "plugins": { "lang-search": { "default_language": 1 } } } }),
        )?;
        let options = RunOptions {
            input,
            output: OutputDestination::File(temp_dir.path().join("out.json")),
            ..Default::default()
        };
        assert!(matches!(run(&options), Err(Error::Config(_))));
        Ok(())
    }

    #[test]
    fn test_run_options_from_cli() {
        use clap::Parser;
        let cli = cli::Cli::parse_from(["lang-search", "-", "-l", "de", "-o", "x.json", "-p"]);
        let options = RunOptions::from(cli);
        assert_eq!(options.input, InputSource::Stdin);
        assert_eq!(options.default_language.as_deref(), Some("de"));
        assert_eq!(options.output, OutputDestination::File("x.json".into()));
        assert!(options.pretty);
    }
}
