//! Rendering module for converting pipeline output to JSON or text.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::to_text;
