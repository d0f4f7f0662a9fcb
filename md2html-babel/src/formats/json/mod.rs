//! JSON format implementation
//!
//! Dumps the block IR as pretty-printed JSON, and reads it back. Useful for
//! inspecting how a source file was split into blocks:
//!
//! ```text
//! {
//!   "blocks": [
//!     { "type": "heading", "level": 1, "content": "Title" },
//!     { "type": "unordered_list", "items": ["a", "b"] }
//!   ]
//! }
//! ```

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::{Block, Document, MAX_HEADING_LEVEL};

/// Format implementation for the JSON view of the IR
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Block structure as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let doc: Document =
            serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))?;
        validate(&doc)?;
        Ok(doc)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

/// Reject documents the markdown parser could never have produced.
fn validate(doc: &Document) -> Result<(), FormatError> {
    for (index, block) in doc.blocks.iter().enumerate() {
        let problem = match block {
            Block::Heading(h) if !(1..=MAX_HEADING_LEVEL).contains(&h.level) => {
                format!("heading level {} is outside 1..={MAX_HEADING_LEVEL}", h.level)
            }
            Block::UnorderedList(list) | Block::OrderedList(list) if list.items.is_empty() => {
                "list has no items".to_string()
            }
            Block::Paragraph(p) if p.lines.is_empty() => "paragraph has no lines".to_string(),
            _ => continue,
        };
        return Err(FormatError::ParseError(format!("block {index}: {problem}")));
    }
    Ok(())
}
