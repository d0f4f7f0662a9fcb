//! Export tests for HTML format (Markdown → HTML)
//!
//! These tests run the whole pipeline and check the resulting HTML lines.

use crate::common::load_fixture;
use insta::assert_snapshot;
use md2html_babel::format::Format;
use md2html_babel::formats::html::{HtmlFormat, HtmlOptions};
use md2html_babel::{markdown_to_html, parse};
use once_cell::sync::Lazy;
use regex::Regex;

static DIGEST: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-f]{32}$").unwrap());

/// Helper to convert markdown source to HTML
fn md_to_html(md: &str) -> String {
    markdown_to_html(md).expect("serialize html")
}

// ============================================================================
// BASIC ELEMENT TESTS
// ============================================================================

#[test]
fn test_every_heading_level() {
    for level in 1..=6 {
        let md = format!("{} Heading text", "#".repeat(level));
        assert_eq!(md_to_html(&md), format!("<h{level}>Heading text</h{level}>"));
    }
}

#[test]
fn test_seven_hashes_is_paragraph() {
    assert_eq!(md_to_html("####### x"), "<p>\n####### x\n</p>");
}

#[test]
fn test_single_line_paragraph() {
    assert_eq!(md_to_html("hello"), "<p>\nhello\n</p>");
}

#[test]
fn test_two_line_paragraph() {
    assert_eq!(md_to_html("a\nb"), "<p>\na<br/>\nb\n</p>");
}

#[test]
fn test_unordered_list() {
    assert_snapshot!(md_to_html("- Item 1\n- Item 2\n- Item 3\n"), @r"
    <ul>
    <li>Item 1</li>
    <li>Item 2</li>
    <li>Item 3</li>
    </ul>
    ");
}

#[test]
fn test_ordered_list() {
    assert_snapshot!(md_to_html("* First item\n* Second item\n"), @r"
    <ol>
    <li>First item</li>
    <li>Second item</li>
    </ol>
    ");
}

#[test]
fn test_list_switch_and_paragraph() {
    assert_snapshot!(md_to_html("- a\n* b\nafter\nmore\n\nlast"), @r"
    <ul>
    <li>a</li>
    </ul>
    <ol>
    <li>b</li>
    </ol>
    <p>
    after<br/>
    more
    </p>
    <p>
    last
    </p>
    ");
}

// ============================================================================
// INLINE TESTS
// ============================================================================

#[test]
fn test_bold_and_emphasis() {
    assert_eq!(
        md_to_html("Some **bold** and __em__"),
        "<p>\nSome <b>bold</b> and <em>em</em>\n</p>"
    );
}

#[test]
fn test_hash_brackets() {
    assert_eq!(
        md_to_html("# [[abc]]"),
        "<h1>900150983cd24fb0d6963f7d28e17f72</h1>"
    );
    let html = md_to_html("- [[anything at all]]");
    let item = html.lines().nth(1).unwrap();
    let digest = item.trim_start_matches("<li>").trim_end_matches("</li>");
    assert!(DIGEST.is_match(digest), "not a digest: {digest}");
}

#[test]
fn test_strip_brackets() {
    assert_eq!(md_to_html("((cCaCt))"), "<p>\nat\n</p>");
}

#[test]
fn test_unmatched_markers_are_verbatim() {
    assert_eq!(
        md_to_html("half **open and __shut"),
        "<p>\nhalf **open and __shut\n</p>"
    );
}

// ============================================================================
// DOCUMENT TESTS
// ============================================================================

#[test]
fn test_empty_document() {
    assert_eq!(md_to_html(""), "");
}

#[test]
fn test_kitchensink_fixture() {
    let md = load_fixture("kitchensink.md");
    let expected = load_fixture("kitchensink.html");
    assert_eq!(md_to_html(&md), expected.trim_end());
}

#[test]
fn test_conversion_is_deterministic() {
    let md = load_fixture("kitchensink.md");
    assert_eq!(md_to_html(&md), md_to_html(&md));
}

#[test]
fn test_html_format_options() {
    let doc = parse("one\ntwo");
    let format = HtmlFormat::new(
        HtmlOptions::default()
            .with_line_break("<br />")
            .with_trailing_newline(true),
    );
    assert_snapshot!(format.serialize(&doc).unwrap(), @r"
    <p>
    one<br />
    two
    </p>
    ");
    assert!(format.serialize(&doc).unwrap().ends_with("</p>\n"));
}
