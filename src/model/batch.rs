//! Parse-phase output types.

use super::StyleRuleClone;
use serde::{Deserialize, Serialize};

/// Style rules that take effect starting at a viewport width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleBatch {
    /// Viewport width (px) at which the rules apply
    pub width: u32,

    /// Rules in source order
    pub style_rules: Vec<StyleRuleClone>,

    /// Whether the batch came from a media rule rather than the baseline
    pub is_media_rule: bool,
}

impl StyleBatch {
    /// Open an empty batch at the baseline width.
    pub fn baseline(width: u32) -> Self {
        Self {
            width,
            style_rules: Vec::new(),
            is_media_rule: false,
        }
    }

    /// Build a batch from a media rule's width and nested rules.
    pub fn media(width: u32, style_rules: Vec<StyleRuleClone>) -> Self {
        Self {
            width,
            style_rules,
            is_media_rule: true,
        }
    }

    /// Selectors of the rules in this batch.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.style_rules.iter().map(|r| r.selector_text.as_str())
    }

    /// Check if the batch has no rules.
    pub fn is_empty(&self) -> bool {
        self.style_rules.is_empty()
    }
}

/// Batches of one stylesheet, with its resolved baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSheetBreakdown {
    /// Location of the source stylesheet, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Baseline width used for rules outside media rules
    pub baseline_width: u32,

    /// Batches in the order their rules appear
    pub batches: Vec<StyleBatch>,
}

/// Result of parsing a document clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// Unique breakpoint widths, ascending
    pub breakpoints: Vec<u32>,

    /// Global baseline width
    pub baseline_width: u32,

    /// One breakdown per cloned stylesheet, same order
    pub style_sheets: Vec<StyleSheetBreakdown>,
}

impl ParseResult {
    /// Total number of batches across all stylesheets.
    pub fn batch_count(&self) -> usize {
        self.style_sheets.iter().map(|s| s.batches.len()).sum()
    }
}
