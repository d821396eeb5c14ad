// src/input.rs

//! Reads the build document handed over by the host.

use crate::errors::{io_error_with_path, json_error, Result};
use crate::pipeline::BuildDocument;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Where the build document comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    /// Read from standard input.
    #[default]
    Stdin,
    /// Read from the given file.
    File(PathBuf),
}

impl InputSource {
    /// Interprets a command-line argument; `-` or no argument means stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Self::Stdin,
            Some(path) => Self::File(PathBuf::from(path)),
        }
    }
}

/// Reads and parses a build document.
///
/// # Errors
/// Returns `Error::Io` if the source cannot be read and `Error::Json` if it
/// is not a valid build document.
pub fn read_build_document(source: &InputSource) -> Result<BuildDocument> {
    let text = match source {
        InputSource::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| io_error_with_path(e, "-"))?;
            text
        }
        InputSource::File(path) => read_file_content(path)?,
    };
    parse_build_document(&text)
}

/// Parses a build document from JSON text.
pub fn parse_build_document(text: &str) -> Result<BuildDocument> {
    serde_json::from_str(text).map_err(|e| json_error("build document", e))
}

fn read_file_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))
}
