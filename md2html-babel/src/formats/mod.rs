//! Format implementations
//!
//! This module contains all format implementations that convert between
//! the block IR and text representations.

pub mod html;
pub mod json;
pub mod markdown;

pub use html::{HtmlFormat, HtmlOptions};
pub use json::JsonFormat;
pub use markdown::{MarkdownFormat, ParseOptions};
