//! HTML serialization (IR → HTML export)
//!
//! Pipeline: IR Document → Events → HTML lines → string
//!
//! Output is one fragment per line: heading lines, list open/item/close lines and
//! paragraph open/content/close lines. Text is written as is; it already carries the
//! inline tags produced while parsing.

use crate::common::nested_to_flat::tree_to_events;
use crate::error::FormatError;
use crate::ir::events::Event;
use crate::ir::nodes::Document;

/// Options for HTML serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Marker appended to every paragraph line except the last.
    pub line_break: String,
    /// End the output with a newline (only when there is any output).
    pub trailing_newline: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            line_break: "<br/>".to_string(),
            trailing_newline: false,
        }
    }
}

impl HtmlOptions {
    pub fn with_line_break(mut self, marker: impl Into<String>) -> Self {
        self.line_break = marker.into();
        self
    }

    pub fn with_trailing_newline(mut self, enabled: bool) -> Self {
        self.trailing_newline = enabled;
        self
    }
}

/// Serialize a document to an HTML string, lines joined with `\n`.
pub fn serialize_to_html(doc: &Document, options: &HtmlOptions) -> Result<String, FormatError> {
    let lines = render_lines(doc, options)?;
    let mut html = lines.join("\n");
    if options.trailing_newline && !html.is_empty() {
        html.push('\n');
    }
    Ok(html)
}

/// Render a document to its HTML lines, one fragment per output line.
pub fn render_lines(doc: &Document, options: &HtmlOptions) -> Result<Vec<String>, FormatError> {
    let events = tree_to_events(doc);
    let mut writer = LineWriter::new(options);
    for event in &events {
        writer.handle(event)?;
    }
    writer.finish()
}

struct LineWriter<'o> {
    options: &'o HtmlOptions,
    lines: Vec<String>,
    pending: Option<String>,
    list_stack: Vec<bool>,
    in_paragraph: bool,
}

impl<'o> LineWriter<'o> {
    fn new(options: &'o HtmlOptions) -> Self {
        Self {
            options,
            lines: Vec::new(),
            pending: None,
            list_stack: Vec::new(),
            in_paragraph: false,
        }
    }

    fn handle(&mut self, event: &Event) -> Result<(), FormatError> {
        match event {
            Event::StartDocument | Event::EndDocument => {}

            Event::StartHeading(level) => self.open_line(format!("<h{level}>"))?,
            Event::EndHeading(level) => self.close_line(&format!("</h{level}>"))?,

            Event::StartList { ordered } => {
                self.list_stack.push(*ordered);
                self.lines.push(list_tag(*ordered, false).to_string());
            }
            Event::EndList => {
                let ordered = self.list_stack.pop().ok_or_else(|| {
                    FormatError::SerializationError("Unbalanced list end".to_string())
                })?;
                self.lines.push(list_tag(ordered, true).to_string());
            }
            Event::StartListItem => self.open_line("<li>".to_string())?,
            Event::EndListItem => self.close_line("</li>")?,

            Event::StartParagraph => {
                self.in_paragraph = true;
                self.lines.push("<p>".to_string());
            }
            Event::EndParagraph => {
                if !self.in_paragraph {
                    return Err(FormatError::SerializationError(
                        "Unbalanced paragraph end".to_string(),
                    ));
                }
                if let Some(line) = self.pending.take() {
                    self.lines.push(line);
                }
                self.in_paragraph = false;
                self.lines.push("</p>".to_string());
            }

            Event::Text(text) => {
                if self.in_paragraph && self.pending.is_none() {
                    self.pending = Some(String::new());
                }
                let line = self.pending.as_mut().ok_or_else(|| {
                    FormatError::SerializationError("Text outside of a block".to_string())
                })?;
                line.push_str(text.as_str());
            }
            Event::LineBreak => {
                let mut line = self.pending.take().ok_or_else(|| {
                    FormatError::SerializationError("Line break without a line".to_string())
                })?;
                line.push_str(&self.options.line_break);
                self.lines.push(line);
            }
        }
        Ok(())
    }

    fn open_line(&mut self, tag: String) -> Result<(), FormatError> {
        if self.pending.is_some() {
            return Err(FormatError::SerializationError(format!(
                "Cannot open {tag} inside another line"
            )));
        }
        self.pending = Some(tag);
        Ok(())
    }

    fn close_line(&mut self, tag: &str) -> Result<(), FormatError> {
        let mut line = self.pending.take().ok_or_else(|| {
            FormatError::SerializationError(format!("Unbalanced {tag}"))
        })?;
        line.push_str(tag);
        self.lines.push(line);
        Ok(())
    }

    fn finish(self) -> Result<Vec<String>, FormatError> {
        if self.pending.is_some() || self.in_paragraph || !self.list_stack.is_empty() {
            return Err(FormatError::SerializationError(
                "Document ended with an open block".to_string(),
            ));
        }
        Ok(self.lines)
    }
}

fn list_tag(ordered: bool, closing: bool) -> &'static str {
    match (ordered, closing) {
        (false, false) => "<ul>",
        (false, true) => "</ul>",
        (true, false) => "<ol>",
        (true, true) => "</ol>",
    }
}
