//! Structured-text parsing.
//!
//! Only the flat `key: value` / `- item` dialect is supported; nested
//! mappings, multi-line scalars and anchors are left to real YAML tooling.

pub mod flat;

pub use flat::{Line, classify, parse};
