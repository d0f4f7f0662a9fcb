//! Converts the block tree into a flat event stream.
//!
//! # The High-Level Concept
//!
//! Walking the document in order lets us emit a sequence of start/content/end
//! events. Each block produces its own start/end markers around its text, so a
//! serializer only has to react to events and never needs to know how blocks are
//! nested.
//!
//! # The Algorithm
//!
//! 1. Emit `StartDocument`.
//! 2. For every block, in document order:
//!    - Heading: `StartHeading(n)`, `Text`, `EndHeading(n)`
//!    - List: `StartList`, then `StartListItem`/`Text`/`EndListItem` per item, `EndList`
//!    - Paragraph: `StartParagraph`, the lines as `Text` events separated by
//!      `LineBreak`, `EndParagraph`
//! 3. Emit `EndDocument`.
//!
//! Line breaks are placed only between two lines, so the last line of a paragraph
//! never gets one.

use crate::ir::events::Event;
use crate::ir::nodes::{Block, Document, Heading, List, Paragraph};

/// Converts a `Document` to a flat vector of `Event`s.
pub fn tree_to_events(doc: &Document) -> Vec<Event> {
    let mut events = Vec::new();
    events.push(Event::StartDocument);
    for block in &doc.blocks {
        walk_block(block, &mut events);
    }
    events.push(Event::EndDocument);
    events
}

fn walk_block(block: &Block, events: &mut Vec<Event>) {
    match block {
        Block::Heading(Heading { level, content }) => {
            events.push(Event::StartHeading(*level));
            events.push(Event::Text(content.clone()));
            events.push(Event::EndHeading(*level));
        }
        Block::UnorderedList(list) => walk_list(list, false, events),
        Block::OrderedList(list) => walk_list(list, true, events),
        Block::Paragraph(Paragraph { lines }) => {
            events.push(Event::StartParagraph);
            for (index, line) in lines.iter().enumerate() {
                if index > 0 {
                    events.push(Event::LineBreak);
                }
                events.push(Event::Text(line.clone()));
            }
            events.push(Event::EndParagraph);
        }
    }
}

fn walk_list(List { items }: &List, ordered: bool, events: &mut Vec<Event>) {
    events.push(Event::StartList { ordered });
    for item in items {
        events.push(Event::StartListItem);
        events.push(Event::Text(item.clone()));
        events.push(Event::EndListItem);
    }
    events.push(Event::EndList);
}
