//! Parsed forms of the flat structured-text input.

pub mod document;

pub use document::{Document, Value};
