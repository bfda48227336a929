//! Breakpoint discovery across all stylesheets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::DocumentClone;

/// Breakpoints found in a document and the global baseline width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoints {
    /// Unique media rule widths, ascending
    pub breakpoints: Vec<u32>,

    /// Width of the last empty media rule, or the default
    pub baseline_width: u32,
}

/// Collect every media rule width and resolve the global baseline.
///
/// Each empty media rule overrides the baseline, so the last one in
/// stylesheet order, then rule order, wins.
pub fn discover_breakpoints(doc: &DocumentClone, default_baseline: u32) -> Breakpoints {
    let mut widths = BTreeSet::new();
    let mut baseline_width = default_baseline;

    for sheet in &doc.style_sheets {
        for media in sheet.media_rules() {
            widths.insert(media.min_width);
            if media.is_baseline_marker() {
                baseline_width = media.min_width;
            }
        }
    }

    Breakpoints {
        breakpoints: widths.into_iter().collect(),
        baseline_width,
    }
}
