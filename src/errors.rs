//! Defines application-specific error types.
//!
//! The hooks themselves never fail on well-formed host objects; these errors
//! cover the surfaces around them: reading build documents, parsing the
//! plugin's options and writing the result.

use thiserror::Error;

/// Errors related to the extension's configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option was given a value of the wrong type or shape.
    #[error("Invalid value for option '{option}': {reason}")]
    InvalidValue {
        /// The offending option, as named in the host configuration.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Errors used throughout `lang-search`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring while reading or writing a build document.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error (`-` for stdin/stdout).
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// A build document or host object could not be (de)serialized.
    #[error("Malformed {what}: {source}")]
    Json {
        /// What was being (de)serialized, e.g. "build document".
        what: &'static str,
        /// The underlying `serde_json::Error`.
        #[source]
        source: serde_json::Error,
    },

    /// The plugin configuration was rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// A specialized `Result` type for `lang-search` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper function to wrap a `serde_json::Error` with a short description.
pub fn json_error(what: &'static str, source: serde_json::Error) -> Error {
    Error::Json { what, source }
}
