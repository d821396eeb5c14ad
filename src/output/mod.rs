// src/output/mod.rs

//! Serializes a finished build and writes it to its destination.

use crate::errors::{io_error_with_path, json_error, Result};
use crate::pipeline::BuildOutput;
use log::debug;
use std::io::Write;
use std::path::PathBuf;

pub mod writer; // Manages the output destination

/// Represents the destination for the generated output.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
#[non_exhaustive]
pub enum OutputDestination {
    /// Write to standard output.
    #[default]
    Stdout,
    /// Write to the specified file path.
    File(PathBuf),
}

impl OutputDestination {
    /// Path used in error messages for this destination.
    pub fn display_path(&self) -> PathBuf {
        match self {
            Self::Stdout => PathBuf::from("-"),
            Self::File(path) => path.clone(),
        }
    }
}

/// Writes the build output as JSON, followed by a newline.
///
/// # Errors
/// Returns `Error::Io`, carrying the destination path, if writing fails and
/// `Error::Json` if the output cannot be serialized.
pub fn write_build_output(
    output: &BuildOutput,
    writer: &mut dyn Write,
    pretty: bool,
    destination: &OutputDestination,
) -> Result<()> {
    debug!("Starting output generation...");
    let path = destination.display_path();
    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, output)
    } else {
        serde_json::to_writer(&mut *writer, output)
    };
    result.map_err(|e| {
        if e.is_io() {
            io_error_with_path(e.into(), &path)
        } else {
            json_error("build output", e)
        }
    })?;

    writeln!(writer).map_err(|e| io_error_with_path(e, &path))?;
    writer.flush().map_err(|e| io_error_with_path(e, &path))?;
    debug!("Output generation complete.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{NavItem, Navigation};
    use crate::errors::Error;

    fn sample_output() -> BuildOutput {
        BuildOutput {
            nav: Navigation::new(vec![NavItem::new("en/index.md")]),
            pages: Vec::new(),
        }
    }

    #[test]
    fn test_compact_output_is_single_line() -> anyhow::Result<()> {
        let mut buffer = Vec::new();
        write_build_output(&sample_output(), &mut buffer, false, &OutputDestination::Stdout)?;
        let text = String::from_utf8(buffer)?;
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
        let parsed: BuildOutput = serde_json::from_str(&text)?;
        assert_eq!(parsed, sample_output());
        Ok(())
    }

    #[test]
    fn test_pretty_output_is_indented() -> anyhow::Result<()> {
        let mut buffer = Vec::new();
        write_build_output(&sample_output(), &mut buffer, true, &OutputDestination::Stdout)?;
        let text = String::from_utf8(buffer)?;
        assert!(text.contains("\n  \"nav\""));
        Ok(())
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_io_error_with_path() {
        let destination = OutputDestination::File(PathBuf::from("out.json"));
        let result = write_build_output(&sample_output(), &mut BrokenPipe, false, &destination);
        match result {
            Err(Error::Io { path, source }) => {
                assert_eq!(path, "out.json");
                assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe);
            }
            other => panic!("Expected Error::Io, got {:?}", other),
        }
    }

    #[test]
    fn test_display_path() {
        assert_eq!(OutputDestination::Stdout.display_path(), PathBuf::from("-"));
        assert_eq!(
            OutputDestination::File(PathBuf::from("out.json")).display_path(),
            PathBuf::from("out.json")
        );
    }
}
