// tests/common.rs

use assert_cmd::Command;
use serde_json::{json, Value};

// Helper function to get the binary command
#[allow(dead_code)] // This is used by the CLI tests, but not all.
pub fn lang_search_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("lang-search"))
}

/// Builds a JSON build document with one top-level nav entry per path.
#[allow(dead_code)]
pub fn build_document(default_language: Option<&str>, paths: &[&str]) -> Value {
    let nav: Vec<Value> = paths
        .iter()
        .map(|p| json!({ "file": { "src_path": p } }))
        .collect();
    let plugins = match default_language {
        Some(lang) => json!({ "lang-search": { "default_language": lang } }),
        None => json!({ "lang-search": null }),
    };
    json!({
        "config": { "site_name": "Docs", "plugins": plugins },
        "nav": nav
    })
}
