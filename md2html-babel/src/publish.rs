//! Document publishing pipeline.
//!
//! Provides a high-level API for converting a source file into an output file.
//! This module bridges the gap between the format registry and file I/O:
//! it checks that the input exists, reads it, converts it and writes the result.
//!
//! Nothing is written until conversion has succeeded, so a failure leaves an
//! existing output file untouched.
//!
//! For more control over the conversion process, use [`FormatRegistry`] directly.

use crate::error::PublishError;
use crate::registry::FormatRegistry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Specifies how to publish a document.
///
/// ```ignore
/// let spec = PublishSpec::new("README.md", "README.html").with_format("html");
/// publish(&spec, &FormatRegistry::default())?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSpec {
    /// Source file to read.
    pub input: PathBuf,
    /// Destination file, created or overwritten.
    pub output: PathBuf,
    /// Source format name. Defaults to "markdown".
    pub from: String,
    /// Target format name. Defaults to "html".
    pub to: String,
}

impl PublishSpec {
    pub fn new(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            from: "markdown".to_string(),
            to: "html".to_string(),
        }
    }

    /// Sets the target format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.to = format.into();
        self
    }

    /// Sets the source format.
    pub fn with_source_format(mut self, format: impl Into<String>) -> Self {
        self.from = format.into();
        self
    }
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResult {
    /// Path of the written file.
    pub output: PathBuf,
    /// Number of blocks in the converted document.
    pub blocks: usize,
    /// Number of bytes written.
    pub bytes: usize,
}

/// Converts `spec.input` and writes the result to `spec.output`.
///
/// # Errors
///
/// - [`PublishError::InputNotFound`] if the input is missing or not a regular file
/// - [`PublishError::Read`] / [`PublishError::Write`] on I/O failures
/// - [`PublishError::Format`] if a format is unknown or cannot perform the conversion
pub fn publish(spec: &PublishSpec, registry: &FormatRegistry) -> Result<PublishResult, PublishError> {
    if !spec.input.is_file() {
        return Err(PublishError::InputNotFound(spec.input.clone()));
    }

    // Validate both formats before touching any file contents.
    registry.get(&spec.from)?;
    registry.get(&spec.to)?;

    info!(input = %spec.input.display(), from = %spec.from, to = %spec.to, "converting");
    let source = fs::read_to_string(&spec.input).map_err(|source| PublishError::Read {
        path: spec.input.clone(),
        source,
    })?;

    let doc = registry.parse(&source, &spec.from)?;
    let rendered = registry.serialize(&doc, &spec.to)?;
    debug!(blocks = doc.len(), bytes = rendered.len(), "rendered document");

    fs::write(&spec.output, rendered.as_bytes()).map_err(|source| PublishError::Write {
        path: spec.output.clone(),
        source,
    })?;
    info!(output = %spec.output.display(), "wrote output");

    Ok(PublishResult {
        output: spec.output.clone(),
        blocks: doc.len(),
        bytes: rendered.len(),
    })
}
