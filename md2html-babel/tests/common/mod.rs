//! Shared helpers for the integration tests.

use md2html_babel::ir::nodes::{Block, Heading, List, Paragraph, Text};
use std::path::PathBuf;

/// Read a file from tests/fixtures.
pub fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

pub fn heading(level: u8, content: &str) -> Block {
    Block::Heading(Heading {
        level,
        content: Text::from(content),
    })
}

pub fn unordered(items: &[&str]) -> Block {
    Block::UnorderedList(List {
        items: items.iter().map(|i| Text::from(*i)).collect(),
    })
}

pub fn ordered(items: &[&str]) -> Block {
    Block::OrderedList(List {
        items: items.iter().map(|i| Text::from(*i)).collect(),
    })
}

pub fn paragraph(lines: &[&str]) -> Block {
    Block::Paragraph(Paragraph {
        lines: lines.iter().map(|l| Text::from(*l)).collect(),
    })
}
