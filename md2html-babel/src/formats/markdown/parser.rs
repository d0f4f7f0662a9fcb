//! Markdown parsing (Markdown → IR)
//!
//! Pipeline: source lines → [`LineKind`] → block assembler → [`Document`]
//!
//! The assembler is a small state machine with a single open-block accumulator.
//! Its state is derived from the open block:
//!
//! | State             | Open block           |
//! |-------------------|----------------------|
//! | `Idle`            | none                 |
//! | `InParagraph`     | paragraph lines      |
//! | `InUnorderedList` | `-` items            |
//! | `InOrderedList`   | `*` items            |
//!
//! Headings are emitted immediately and never stay open. A blank line closes
//! whatever is open. A list item of the other marker type, or a plain line, closes
//! an open list before opening the next block. End of input closes the open block.

use super::inlines::{InlineOptions, InlineTransformer};
use super::line::{classify_line, LineKind, SyntaxOptions};
use crate::ir::nodes::{Block, Document, Heading, List, Paragraph, Text};
use tracing::{debug, trace};

/// Options for customizing markdown parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub syntax: SyntaxOptions,
    pub inline: InlineOptions,
}

/// The assembler state, as seen from the line being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerState {
    Idle,
    InParagraph,
    InUnorderedList,
    InOrderedList,
}

#[derive(Debug)]
enum OpenBlock {
    Paragraph(Vec<Text>),
    UnorderedList(Vec<Text>),
    OrderedList(Vec<Text>),
}

impl OpenBlock {
    fn into_block(self) -> Block {
        match self {
            OpenBlock::Paragraph(lines) => Block::Paragraph(Paragraph { lines }),
            OpenBlock::UnorderedList(items) => Block::UnorderedList(List { items }),
            OpenBlock::OrderedList(items) => Block::OrderedList(List { items }),
        }
    }
}

/// Groups classified lines into blocks.
///
/// Feed lines in order with [`BlockAssembler::push_line`] and call
/// [`BlockAssembler::finish`] once the input is exhausted.
pub struct BlockAssembler<'p> {
    syntax: SyntaxOptions,
    inlines: &'p InlineTransformer,
    blocks: Vec<Block>,
    open: Option<OpenBlock>,
    lines_seen: usize,
}

impl<'p> BlockAssembler<'p> {
    pub fn new(syntax: SyntaxOptions, inlines: &'p InlineTransformer) -> Self {
        Self {
            syntax,
            inlines,
            blocks: Vec::new(),
            open: None,
            lines_seen: 0,
        }
    }

    pub fn state(&self) -> AssemblerState {
        match self.open {
            None => AssemblerState::Idle,
            Some(OpenBlock::Paragraph(_)) => AssemblerState::InParagraph,
            Some(OpenBlock::UnorderedList(_)) => AssemblerState::InUnorderedList,
            Some(OpenBlock::OrderedList(_)) => AssemblerState::InOrderedList,
        }
    }

    /// Blocks closed so far, in input order.
    pub fn closed_blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn push_line(&mut self, raw: &str) {
        self.lines_seen += 1;
        let kind = classify_line(raw, &self.syntax);
        trace!(line = self.lines_seen, kind = kind.name(), state = ?self.state(), "classified line");

        match kind {
            LineKind::Heading { level, content } => {
                self.close_open_block();
                let content = self.text(content);
                self.emit(Block::Heading(Heading { level, content }));
            }
            LineKind::UnorderedItem(content) => {
                let item = self.text(content);
                match &mut self.open {
                    Some(OpenBlock::UnorderedList(items)) => items.push(item),
                    _ => {
                        self.close_open_block();
                        self.open = Some(OpenBlock::UnorderedList(vec![item]));
                    }
                }
            }
            LineKind::OrderedItem(content) => {
                let item = self.text(content);
                match &mut self.open {
                    Some(OpenBlock::OrderedList(items)) => items.push(item),
                    _ => {
                        self.close_open_block();
                        self.open = Some(OpenBlock::OrderedList(vec![item]));
                    }
                }
            }
            LineKind::Blank => self.close_open_block(),
            LineKind::Plain(content) => {
                let line = self.text(content);
                match &mut self.open {
                    Some(OpenBlock::Paragraph(lines)) => lines.push(line),
                    _ => {
                        self.close_open_block();
                        self.open = Some(OpenBlock::Paragraph(vec![line]));
                    }
                }
            }
        }
    }

    /// Close the open block, if any, and return the finished document.
    pub fn finish(mut self) -> Document {
        self.close_open_block();
        let doc = Document::new(self.blocks);
        debug!(
            lines = self.lines_seen,
            blocks = doc.len(),
            "assembled document"
        );
        doc
    }

    fn text(&self, content: &str) -> Text {
        Text::from(self.inlines.transform(content))
    }

    fn close_open_block(&mut self) {
        if let Some(open) = self.open.take() {
            self.emit(open.into_block());
        }
    }

    fn emit(&mut self, block: Block) {
        trace!(kind = block.kind(), index = self.blocks.len(), "closed block");
        self.blocks.push(block);
    }
}

/// Line-oriented markdown parser.
#[derive(Debug, Clone, Default)]
pub struct MarkdownParser {
    syntax: SyntaxOptions,
    inlines: InlineTransformer,
}

impl MarkdownParser {
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            syntax: options.syntax,
            inlines: InlineTransformer::new(&options.inline),
        }
    }

    /// Parse a whole source string. Both `\n` and `\r\n` line endings are accepted.
    pub fn parse(&self, source: &str) -> Document {
        self.parse_lines(source.lines())
    }

    /// Parse an already split sequence of lines.
    pub fn parse_lines<I, S>(&self, lines: I) -> Document
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut assembler = BlockAssembler::new(self.syntax, &self.inlines);
        for line in lines {
            assembler.push_line(line.as_ref());
        }
        assembler.finish()
    }
}

/// Parse a markdown string with the default options.
pub fn parse_from_markdown(source: &str) -> Document {
    MarkdownParser::default().parse(source)
}
