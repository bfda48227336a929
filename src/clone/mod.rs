//! Cloning live stylesheets into plain data.
//!
//! Only style rules and `(min-width: Npx)` media rules survive, and style
//! rules keep only their fluid declarations. Sheets the host refuses to
//! expose are skipped without error.

mod cloner;
mod filter;

pub use cloner::{
    clone_document, clone_document_with_stats, clone_media_rule, clone_style_rule,
    parse_min_width, CloneStats, Cloner,
};
pub use filter::{is_fluid_property, FLUID_PROPERTY_NAMES};
