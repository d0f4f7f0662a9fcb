//! Core data structures for the Intermediate Representation (IR).
//!
//! A [`Document`] is an ordered list of closed [`Block`]s. Every piece of [`Text`]
//! stored here has already been through the inline transforms, so the serializers
//! only need to wrap it in block tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest heading level a `#` run may produce.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Represents the root of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }
}

/// A top-level structural unit of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading(Heading),
    UnorderedList(List),
    OrderedList(List),
    Paragraph(Paragraph),
}

impl Block {
    /// Short lowercase name used in logs and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading(_) => "heading",
            Block::UnorderedList(_) => "unordered_list",
            Block::OrderedList(_) => "ordered_list",
            Block::Paragraph(_) => "paragraph",
        }
    }
}

/// Represents a heading with a specific level (1 to 6).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub content: Text,
}

/// Represents a list of items. Whether it is ordered is carried by the [`Block`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub items: Vec<Text>,
}

/// Represents a paragraph made of one or more content lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub lines: Vec<Text>,
}

/// Content with inline transforms already applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Text(String);

impl Text {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text(value)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text(value.to_string())
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
