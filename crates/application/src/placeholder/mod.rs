//! Placeholder handling
//!
//! Unresolved `{{variable}}` placeholders must reach generated code exactly
//! as written. This module finds them so encoders can skip over them.

pub mod parser;

pub use parser::{PlaceholderSplit, Segment, split_placeholders};
