//! HTML format implementation
//!
//! This module implements export from the block IR to HTML fragments.
//!
//! # Element Mapping Table
//!
//! | IR Block          | HTML                                           |
//! |-------------------|------------------------------------------------|
//! | `Heading`         | `<hN>content</hN>` on one line                 |
//! | `UnorderedList`   | `<ul>`, one `<li>item</li>` per item, `</ul>`  |
//! | `OrderedList`     | `<ol>`, one `<li>item</li>` per item, `</ol>`  |
//! | `Paragraph`       | `<p>`, one line per content line, `</p>`       |
//!
//! Every paragraph line except the last gets the line-break marker (`<br/>` by
//! default) appended. No document wrapper, stylesheet or escaping is added: the
//! output is exactly the fragments above joined by newlines.
//!
//! Import (HTML → IR) is not supported.

mod serializer;

pub use serializer::{render_lines, serialize_to_html, HtmlOptions};

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragments, one element per line"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serializer::serialize_to_html(doc, &self.options)
    }
}
