//! Defines the host-owned data structures the extension operates on.
//!
//! Pages, navigation and render contexts are created by the host build
//! pipeline; the extension only ever receives them, mutates them and hands
//! them back. They are plain serde types so a build can be described as a
//! JSON document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-page metadata: string keys to any value the render layer accepts.
pub type Meta = Map<String, Value>;

/// The mutable mapping handed to template rendering for one page.
pub type Context = Map<String, Value>;

/// A content file known to the host.
///
/// # Examples
///
/// ```
/// use lang_search::core_types::File;
///
/// let file = File::new("en/guide.md");
/// assert_eq!(file.src_path, "en/guide.md");
/// assert!(file.url.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// Path of the source file relative to the content root, `/`-separated.
    pub src_path: String,
    /// Path of the rendered output, if the host has assigned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_path: Option<String>,
    /// Public URL of the rendered page, if the host has assigned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl File {
    /// Creates a file with only its source path set.
    pub fn new(src_path: impl Into<String>) -> Self {
        Self {
            src_path: src_path.into(),
            ..Default::default()
        }
    }
}

/// A named content unit with a source file and mutable metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Display title, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The file the page was built from.
    pub file: File,
    /// Metadata mapping; the extension writes the `language` key here.
    #[serde(default)]
    pub meta: Meta,
}

impl Page {
    /// Creates an untitled page with empty metadata.
    pub fn new(src_path: impl Into<String>) -> Self {
        Self {
            file: File::new(src_path),
            ..Default::default()
        }
    }

    /// Sets the title, builder style.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The page's source path.
    pub fn src_path(&self) -> &str {
        &self.file.src_path
    }
}

/// One entry of the navigation tree.
///
/// Every entry references a page through its file. Children are carried along
/// with their parent and are never filtered on their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display title, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The file of the page this entry points at.
    pub file: File,
    /// Nested entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// Creates a leaf entry for the given source path.
    pub fn new(src_path: impl Into<String>) -> Self {
        Self {
            file: File::new(src_path),
            ..Default::default()
        }
    }

    /// Sets the title, builder style.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a child entry, builder style.
    pub fn with_child(mut self, child: NavItem) -> Self {
        self.children.push(child);
        self
    }

    /// The source path of the page this entry points at.
    pub fn src_path(&self) -> &str {
        &self.file.src_path
    }

    /// The page this entry represents, without metadata.
    pub fn to_page(&self) -> Page {
        Page {
            title: self.title.clone(),
            file: self.file.clone(),
            meta: Meta::new(),
        }
    }

    fn collect_pages(&self, pages: &mut Vec<Page>) {
        pages.push(self.to_page());
        for child in &self.children {
            child.collect_pages(pages);
        }
    }
}

/// The site navigation: top-level entries plus the flattened page list.
///
/// `pages` is computed once in [`Navigation::new`] and stays as assembled even
/// when `items` is later reassigned by a hook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Navigation {
    /// Ordered top-level entries.
    pub items: Vec<NavItem>,
    /// Every page reachable from the navigation, depth-first, parents first.
    pub pages: Vec<Page>,
}

impl Navigation {
    /// Assembles a navigation from its top-level entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use lang_search::core_types::{NavItem, Navigation};
    ///
    /// let nav = Navigation::new(vec![
    ///     NavItem::new("en/index.md").with_child(NavItem::new("en/guide.md")),
    ///     NavItem::new("fr/index.md"),
    /// ]);
    /// let paths: Vec<&str> = nav.pages.iter().map(|p| p.src_path()).collect();
    /// assert_eq!(paths, ["en/index.md", "en/guide.md", "fr/index.md"]);
    /// ```
    pub fn new(items: Vec<NavItem>) -> Self {
        let mut pages = Vec::new();
        for item in &items {
            item.collect_pages(&mut pages);
        }
        Self { items, pages }
    }
}

/// The host's collection of source files for the current build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Files(pub Vec<File>);

impl Files {
    /// Number of files in the build.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the build has no files.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the files in host order.
    pub fn iter(&self) -> std::slice::Iter<'_, File> {
        self.0.iter()
    }
}

/// The host's site-wide configuration, as seen by plugins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Name of the site, exposed to templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// Per-plugin option mappings keyed by plugin name.
    #[serde(default)]
    pub plugins: Map<String, Value>,
}

/// A page reference as placed in the search index of a render context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    /// Display title, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Source path of the referenced page.
    pub src_path: String,
    /// Public URL of the referenced page, if assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<&Page> for SearchEntry {
    fn from(page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            src_path: page.file.src_path.clone(),
            url: page.file.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_navigation_flattens_depth_first() {
        let nav = Navigation::new(vec![
            NavItem::new("en/index.md")
                .with_child(NavItem::new("en/a.md").with_child(NavItem::new("en/a/b.md"))),
            NavItem::new("en/z.md"),
        ]);
        let paths: Vec<&str> = nav.pages.iter().map(Page::src_path).collect();
        assert_eq!(paths, ["en/index.md", "en/a.md", "en/a/b.md", "en/z.md"]);
    }

    #[test]
    fn test_pages_survive_items_reassignment() {
        let mut nav = Navigation::new(vec![NavItem::new("en/a.md"), NavItem::new("fr/a.md")]);
        nav.items.clear();
        assert_eq!(nav.pages.len(), 2);
    }

    #[test]
    fn test_nav_item_deserializes_with_defaults() -> anyhow::Result<()> {
        let item: NavItem = serde_json::from_value(json!({
            "title": "Home",
            "file": { "src_path": "en/index.md" }
        }))?;
        assert_eq!(item.title.as_deref(), Some("Home"));
        assert_eq!(item.src_path(), "en/index.md");
        assert!(item.children.is_empty());
        Ok(())
    }

    #[test]
    fn test_search_entry_from_page() {
        let mut page = Page::new("en/guide.md").with_title("Guide");
        page.file.url = Some("en/guide/".to_string());
        let entry = SearchEntry::from(&page);
        assert_eq!(entry.title.as_deref(), Some("Guide"));
        assert_eq!(entry.src_path, "en/guide.md");
        assert_eq!(entry.url.as_deref(), Some("en/guide/"));
    }

    #[test]
    fn test_files_is_transparent() -> anyhow::Result<()> {
        let files: Files = serde_json::from_value(json!([{ "src_path": "en/index.md" }]))?;
        assert_eq!(files.len(), 1);
        assert_eq!(files.iter().next().map(|f| f.src_path.as_str()), Some("en/index.md"));
        Ok(())
    }
}
