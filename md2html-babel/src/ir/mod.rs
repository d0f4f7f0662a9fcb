//! Intermediate Representation (IR) for converted documents.
//!
//! This module defines the format-agnostic block model produced by the markdown
//! parser and consumed by the HTML and JSON serializers.

pub mod events;
pub mod nodes;
