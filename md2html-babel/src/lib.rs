//! Markdown to HTML conversion
//!
//!     This crate converts a small, line-oriented markdown dialect into HTML fragments.
//!     It is a pure lib: it powers md2html-cli but makes no assumption about a shell
//!     environment. The only file access lives in [`publish`].
//!
//! Architecture
//!
//!     Conversion goes through a format-agnostic block IR (./ir/mod.rs):
//!
//!         source lines ──classify──▶ LineKind ──assemble──▶ Document ──events──▶ HTML lines
//!
//!     - formats/markdown/line.rs     classifies one trimmed line
//!     - formats/markdown/parser.rs   groups lines into blocks (explicit state machine)
//!     - formats/markdown/inlines.rs  resolves [[..]], ((..)), **..** and __..__ per line
//!     - common/nested_to_flat.rs     turns the block tree into a flat event stream
//!     - formats/html/serializer.rs   writes one HTML fragment per output line
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # file in, file out
//!     ├── formats
//!     │   ├── markdown            # parsing
//!     │   ├── html                # serialization
//!     │   └── json                # IR dump
//!     ├── ir                      # Intermediate Representation
//!     └── common                  # event stream
//!
//! Testing
//!     tests
//!     └── <format>
//!         ├── <testname>.rs
//!         └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so these are
//!     included from tests/lib.rs.
pub mod error;
pub mod format;
pub mod formats;
pub mod publish;
pub mod registry;

pub mod common;
pub mod ir;

pub use error::{FormatError, PublishError};
pub use format::Format;
pub use formats::html::HtmlOptions;
pub use formats::markdown::{InlineOptions, ParseOptions, SyntaxOptions};
pub use ir::nodes::{Block, Document, Text};
pub use publish::{publish, PublishResult, PublishSpec};
pub use registry::FormatRegistry;

/// Parse markdown source into the block IR using default options.
pub fn parse(source: &str) -> Document {
    formats::markdown::parser::parse_from_markdown(source)
}

/// Convert markdown source to HTML using default options.
///
/// # Errors
///
/// Only fails if the HTML writer receives an unbalanced event stream, which the
/// markdown parser never produces.
pub fn markdown_to_html(source: &str) -> Result<String, FormatError> {
    formats::html::serialize_to_html(&parse(source), &HtmlOptions::default())
}
