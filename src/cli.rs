// src/cli.rs

use clap::Parser;

/// Filters documentation navigation and search indexing by language prefix.
///
/// lang-search reads a JSON build document (site configuration, source files
/// and navigation tree), runs the language filter through the page lifecycle
/// and writes the resulting navigation, page metadata and per-page render
/// contexts as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the build document. Reads stdin when omitted or `-`.
    #[arg(value_name = "BUILD_JSON")]
    pub input: Option<String>,

    /// Language prefix kept in navigation and search. Overrides the site configuration.
    #[arg(short = 'l', long, value_name = "LANG")]
    pub default_language: Option<String>,

    /// Write output to the specified file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(short = 'p', long, action = clap::ArgAction::SetTrue)]
    pub pretty: bool,
}
