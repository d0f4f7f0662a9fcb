//! Line classification
//!
//! Every source line maps to exactly one [`LineKind`]. The line is trimmed before
//! it is inspected and the returned content borrows from the trimmed line with its
//! leading marker (`#` run, `-`, `*`) removed.

use crate::ir::nodes::MAX_HEADING_LEVEL;

/// Knobs that change how list markers are recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyntaxOptions {
    /// Only treat `-`/`*` as list markers when followed by whitespace or the end of
    /// the line. Off by default, so `-item` is a list item; turning it on lets a
    /// paragraph start with `**bold**`.
    pub require_marker_space: bool,
}

/// The classification of one trimmed source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: u8, content: &'a str },
    UnorderedItem(&'a str),
    OrderedItem(&'a str),
    Blank,
    Plain(&'a str),
}

impl LineKind<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            LineKind::Heading { .. } => "heading",
            LineKind::UnorderedItem(_) => "unordered-item",
            LineKind::OrderedItem(_) => "ordered-item",
            LineKind::Blank => "blank",
            LineKind::Plain(_) => "plain",
        }
    }
}

/// Classify a single source line.
pub fn classify_line<'a>(raw: &'a str, options: &SyntaxOptions) -> LineKind<'a> {
    let line = raw.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }

    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if hashes > 0 {
        // A run longer than the deepest heading is ordinary text.
        if hashes > usize::from(MAX_HEADING_LEVEL) {
            return LineKind::Plain(line);
        }
        return LineKind::Heading {
            level: hashes as u8,
            content: line[hashes..].trim(),
        };
    }

    if let Some(content) = strip_marker(line, '-', options) {
        return LineKind::UnorderedItem(content);
    }
    if let Some(content) = strip_marker(line, '*', options) {
        return LineKind::OrderedItem(content);
    }

    LineKind::Plain(line)
}

fn strip_marker<'a>(line: &'a str, marker: char, options: &SyntaxOptions) -> Option<&'a str> {
    let rest = line.strip_prefix(marker)?;
    if options.require_marker_space && !rest.is_empty() && !rest.starts_with(char::is_whitespace)
    {
        return None;
    }
    Some(rest.trim())
}
