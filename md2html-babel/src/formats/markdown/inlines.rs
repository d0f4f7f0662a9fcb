//! Inline transforms
//!
//!     Inline markup is resolved by an ordered list of delimiter specs. Each spec owns an
//!     opening and closing delimiter and an action that turns the enclosed text into its
//!     replacement. Specs run one after the other over the whole content string:
//!
//!         1. `[[X]]`  → lowercase hex MD5 digest of `X`
//!         2. `((X))`  → `X` without any `c`/`C`
//!         3. `**X**`  → `<b>X</b>`
//!         4. `__X__`  → `<em>X</em>`
//!
//!     A span is the leftmost opening delimiter followed by the shortest non-empty text
//!     that is closed by the closing delimiter. Output of a delimiter spec is never rescanned by
//!     the same spec, and markers without a partner are kept verbatim.

use md5::{Digest, Md5};

/// Configures which inline transforms run and which tags they emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineOptions {
    /// Replace `[[X]]` with the MD5 digest of `X`.
    pub hash_brackets: bool,
    /// Replace `((X))` with `X` minus every `c`/`C`.
    pub strip_brackets: bool,
    /// Element name used for `**X**`.
    pub bold_tag: String,
    /// Element name used for `__X__`.
    pub emphasis_tag: String,
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self {
            hash_brackets: true,
            strip_brackets: true,
            bold_tag: "b".to_string(),
            emphasis_tag: "em".to_string(),
        }
    }
}

/// What a matched span is replaced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineAction {
    Digest,
    StripLetters,
    Wrap(String),
}

impl InlineAction {
    fn apply(&self, inner: &str, out: &mut String) {
        match self {
            InlineAction::Digest => out.push_str(&hex::encode(Md5::digest(inner.as_bytes()))),
            InlineAction::StripLetters => {
                out.extend(inner.chars().filter(|c| !matches!(c, 'c' | 'C')));
            }
            InlineAction::Wrap(tag) => {
                out.push('<');
                out.push_str(tag);
                out.push('>');
                out.push_str(inner);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

/// One delimiter pair and the action applied to what it encloses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpec {
    pub open: &'static str,
    pub close: &'static str,
    pub action: InlineAction,
}

impl InlineSpec {
    pub fn new(open: &'static str, close: &'static str, action: InlineAction) -> Self {
        Self {
            open,
            close,
            action,
        }
    }

    /// Replace every span of this spec in `input`, left to right.
    pub fn substitute(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(span) = self.find_span(rest) {
            out.push_str(&rest[..span.start]);
            self.action.apply(span.inner, &mut out);
            rest = &rest[span.end..];
        }
        out.push_str(rest);
        out
    }

    // Only the first opening delimiter has to be tried: any later one would need a
    // closing delimiter even further right, and there is none.
    fn find_span<'a>(&self, text: &'a str) -> Option<Span<'a>> {
        let start = text.find(self.open)?;
        let inner_start = start + self.open.len();
        let first = text[inner_start..].chars().next()?;
        let search_from = inner_start + first.len_utf8();
        let close_at = search_from + text[search_from..].find(self.close)?;
        Some(Span {
            start,
            inner: &text[inner_start..close_at],
            end: close_at + self.close.len(),
        })
    }
}

struct Span<'a> {
    start: usize,
    inner: &'a str,
    end: usize,
}

/// Applies the configured inline specs in their fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineTransformer {
    specs: Vec<InlineSpec>,
}

impl InlineTransformer {
    pub fn new(options: &InlineOptions) -> Self {
        let mut specs = Vec::with_capacity(4);
        if options.hash_brackets {
            specs.push(InlineSpec::new("[[", "]]", InlineAction::Digest));
        }
        if options.strip_brackets {
            specs.push(InlineSpec::new("((", "))", InlineAction::StripLetters));
        }
        specs.push(InlineSpec::new(
            "**",
            "**",
            InlineAction::Wrap(options.bold_tag.clone()),
        ));
        specs.push(InlineSpec::new(
            "__",
            "__",
            InlineAction::Wrap(options.emphasis_tag.clone()),
        ));
        Self { specs }
    }

    pub fn specs(&self) -> &[InlineSpec] {
        &self.specs
    }

    pub fn transform(&self, content: &str) -> String {
        let mut text = content.to_string();
        for spec in &self.specs {
            if text.contains(spec.open) {
                text = spec.substitute(&text);
            }
        }
        text
    }
}

impl Default for InlineTransformer {
    fn default() -> Self {
        Self::new(&InlineOptions::default())
    }
}

/// Run the default inline transforms over `content`.
pub fn transform_inlines(content: &str) -> String {
    InlineTransformer::default().transform(content)
}
