//! Import tests for Markdown format (Markdown → IR)
//!
//! These tests verify that markdown sources are split into the expected blocks.

use crate::common::{heading, load_fixture, ordered, paragraph, unordered};
use md2html_babel::format::Format;
use md2html_babel::formats::markdown::{MarkdownFormat, ParseOptions, SyntaxOptions};
use md2html_babel::ir::nodes::{Block, Document};

fn md_to_ir(md: &str) -> Document {
    MarkdownFormat::default()
        .parse(md)
        .expect("markdown parsing never fails")
}

#[test]
fn test_kitchensink_blocks() {
    let doc = md_to_ir(&load_fixture("kitchensink.md"));
    assert_eq!(
        doc.blocks,
        vec![
            heading(1, "My title"),
            heading(2, "Sub-title with <b>bold</b>"),
            unordered(&["Hello", "Bye <em>now</em>"]),
            ordered(&["First", "Second iero"]),
            paragraph(&[
                "Hello there",
                "This is <b>awesome</b> and <em>nice</em>"
            ]),
            paragraph(&[
                "####### not a heading",
                "A 5ebe2294ecd0e0f08eab7690d2a6ee69 line"
            ]),
            heading(6, "Smallest"),
            unordered(&["Closing list"]),
        ]
    );
}

#[test]
fn test_blocks_keep_input_order() {
    let doc = md_to_ir("# Head\n- one\n- two\n\nSome text\n");
    let kinds: Vec<&str> = doc.blocks.iter().map(Block::kind).collect();
    assert_eq!(kinds, vec!["heading", "unordered_list", "paragraph"]);
}

#[test]
fn test_heading_between_list_items_splits_list() {
    let doc = md_to_ir("- a\n# H\n- b");
    assert_eq!(
        doc.blocks,
        vec![unordered(&["a"]), heading(1, "H"), unordered(&["b"])]
    );
}

#[test]
fn test_heading_inside_paragraph_run() {
    let doc = md_to_ir("first\n### Mid\nsecond");
    assert_eq!(
        doc.blocks,
        vec![paragraph(&["first"]), heading(3, "Mid"), paragraph(&["second"])]
    );
}

#[test]
fn test_whitespace_only_input() {
    assert!(md_to_ir("   \n\t\n").is_empty());
}

#[test]
fn test_strict_markers_from_options() {
    let format = MarkdownFormat::new(&ParseOptions {
        syntax: SyntaxOptions {
            require_marker_space: true,
        },
        ..ParseOptions::default()
    });
    let doc = format.parse("-not a list\n- a list").unwrap();
    assert_eq!(
        doc.blocks,
        vec![paragraph(&["-not a list"]), unordered(&["a list"])]
    );
}
