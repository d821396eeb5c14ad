// src/constants.rs

/// Name under which the extension's options live in the host configuration.
pub const PLUGIN_NAME: &str = "lang-search";

/// Language prefix used when `default_language` is not configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Metadata key written on every page by the pre-page hook.
pub const LANGUAGE_META_KEY: &str = "language";

/// Render-context key holding the search settings.
pub const SEARCH_CONTEXT_KEY: &str = "search";

/// Key inside the search settings holding the filtered page list.
pub const SEARCH_INDEX_KEY: &str = "index";

/// Separator between the language segment and the rest of a source path.
pub const PATH_SEPARATOR: char = '/';

/// Log target for hook messages, mirroring the host's per-plugin logger naming.
pub const LOG_TARGET: &str = "lang_search::plugin";
