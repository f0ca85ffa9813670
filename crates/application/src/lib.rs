//! Unisnip Application - option handling and placeholder parsing
//!
//! This crate sits between the pure domain model and the code generators:
//! it declares the generator options, validates caller input against them,
//! and splits text on `{{variable}}` placeholders.

pub mod error;
pub mod options;
pub mod placeholder;

pub use error::{OptionIssue, OptionsError, OptionsResult};
pub use options::{option_specs, sanitize_option_map, sanitize_options};
pub use placeholder::{PlaceholderSplit, Segment, split_placeholders};
