//! HTML format tests
//!
//! Tests for IR → HTML export, end to end from markdown source.

mod export;
