//! Markdown format tests
//!
//! Tests for Markdown → IR import.

mod import;
