//! Error types for format and publish operations
//!
//! Markdown parsing is total: every line sequence maps to a document. Errors only
//! come from format selection, the JSON reader, serialization and the file boundary.

use std::io;
use std::path::PathBuf;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

/// Errors raised while reading a source file, converting it and writing the result.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The input path does not exist or is not a regular file.
    #[error("Missing {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input exists but could not be read. Reported like a missing input; the
    /// I/O error stays available through `source()`.
    #[error("Missing {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),
}
