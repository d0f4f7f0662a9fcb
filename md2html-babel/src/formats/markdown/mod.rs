//! Markdown format implementation
//!
//! This module implements the import side of the converter: a small, line-oriented
//! markdown dialect is read into the block IR.
//!
//! # Recognized Syntax
//!
//! | Source                | IR                          | Notes                                   |
//! |-----------------------|-----------------------------|-----------------------------------------|
//! | `#`…`######` + text   | `Block::Heading`            | Run of 7+ `#` is a plain line           |
//! | `- item`              | `Block::UnorderedList` item | Consecutive `-` lines share a list      |
//! | `* item`              | `Block::OrderedList` item   | Consecutive `*` lines share a list      |
//! | other text            | `Block::Paragraph` line     | Consecutive lines share a paragraph     |
//! | blank line            | closes the open block       |                                         |
//! | `[[X]]`               | MD5 hex digest of `X`       | Inline                                  |
//! | `((X))`               | `X` without `c`/`C`         | Inline                                  |
//! | `**X**`               | `<b>X</b>`                  | Inline, tag configurable                |
//! | `__X__`               | `<em>X</em>`                | Inline, tag configurable                |
//!
//! There are no tables, code blocks, links, images, nested lists or escapes.
//!
//! # Architecture Notes
//!
//! Lines are classified one at a time (see [`line`]) and fed to the block assembler
//! (see [`parser`]), which runs the inline transforms (see [`inlines`]) on each
//! line's content once its leading marker is removed. Parsing never fails: every
//! line has a classification and every classification has a transition.

pub mod inlines;
pub mod line;
pub mod parser;

pub use inlines::{InlineOptions, InlineTransformer};
pub use line::{classify_line, LineKind, SyntaxOptions};
pub use parser::{AssemblerState, BlockAssembler, MarkdownParser, ParseOptions};

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

/// Format implementation for Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    parser: MarkdownParser,
}

impl MarkdownFormat {
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            parser: MarkdownParser::new(options),
        }
    }

    pub fn parser(&self) -> &MarkdownParser {
        &self.parser
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Line-oriented markdown with headings, flat lists and paragraphs"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(self.parser.parse(source))
    }
}
