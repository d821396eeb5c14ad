// src/output/writer.rs

//! Manages the output destination (stdout or file).
//!
//! This module provides a function to set up the appropriate `Write` trait
//! object based on the configured destination.

use super::OutputDestination;
use crate::errors::{io_error_with_path, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Creates the appropriate output writer for the given destination.
///
/// # Errors
/// Returns an error if a file cannot be created for writing.
pub fn setup_output_writer(destination: &OutputDestination) -> Result<Box<dyn Write + Send>> {
    let writer: Box<dyn Write + Send> = match destination {
        OutputDestination::Stdout => Box::new(io::stdout()),
        OutputDestination::File(path) => {
            let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
            Box::new(BufWriter::new(file)) // Use BufWriter for file I/O
        }
    };
    Ok(writer)
}
