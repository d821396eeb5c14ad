// src/filtering/language.rs

use crate::constants::PATH_SEPARATOR;

/// Derives the language label of a page from its source path.
///
/// The label is the first path segment: everything before the first `/`.
/// A path without any separator is returned whole. No check is made against
/// a list of known languages.
///
/// # Examples
///
/// ```
/// use lang_search::filtering::page_language;
///
/// assert_eq!(page_language("de/intro.md"), "de");
/// assert_eq!(page_language("en/guide/setup.md"), "en");
/// assert_eq!(page_language("index.md"), "index.md");
/// assert_eq!(page_language("/abs.md"), "");
/// ```
pub fn page_language(src_path: &str) -> &str {
    src_path
        .split_once(PATH_SEPARATOR)
        .map_or(src_path, |(language, _)| language)
}

/// Checks whether a source path belongs to the given language prefix.
///
/// This is a plain, case-sensitive `starts_with`: there is no segment
/// boundary check, so `"end/x.md"` matches `"en"`. An empty prefix matches
/// every path.
///
/// # Examples
///
/// ```
/// use lang_search::filtering::matches_language;
///
/// assert!(matches_language("en/index.md", "en"));
/// assert!(matches_language("end/index.md", "en"));
/// assert!(!matches_language("EN/index.md", "en"));
/// assert!(matches_language("fr/index.md", ""));
/// ```
pub fn matches_language(src_path: &str, prefix: &str) -> bool {
    src_path.starts_with(prefix)
}
