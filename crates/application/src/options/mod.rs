//! Generator options: declaration and sanitizing.

pub mod sanitizer;
pub mod schema;

pub use sanitizer::{sanitize_option_map, sanitize_options};
pub use schema::option_specs;
