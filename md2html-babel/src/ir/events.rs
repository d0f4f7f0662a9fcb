//! Defines the flat event stream representation of a document.

use crate::ir::nodes::Text;

/// Represents a single event in the document stream.
///
/// Serializers consume this flat sequence instead of walking the block tree, so
/// every output format shares one traversal (see `common::nested_to_flat`).
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    StartDocument,
    EndDocument,
    StartHeading(u8),
    EndHeading(u8),
    StartParagraph,
    EndParagraph,
    StartList {
        ordered: bool,
    },
    EndList,
    StartListItem,
    EndListItem,
    Text(Text),
    /// Separates two consecutive lines of the same paragraph.
    LineBreak,
}
