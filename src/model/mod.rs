//! Data model for stylesheet snapshots and breakpoint batches.
//!
//! The clone types mirror the subset of the CSS object model the pipeline
//! cares about. They hold no references to host objects and serialize to
//! JSON, so a snapshot taken in one process can be parsed in another.

mod batch;
mod clone;

pub use batch::{ParseResult, StyleBatch, StyleSheetBreakdown};
pub use clone::{CssRuleClone, DocumentClone, MediaRuleClone, StyleRuleClone, StyleSheetClone};
