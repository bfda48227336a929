//! Plain-data snapshot of a document's stylesheets.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of every accessible stylesheet of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentClone {
    /// Accessible stylesheets, in document order
    pub style_sheets: Vec<StyleSheetClone>,
}

impl DocumentClone {
    /// Create a new empty clone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a clone previously serialized as JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidClone(e.to_string()))
    }

    /// Add a stylesheet to the clone.
    pub fn add_style_sheet(&mut self, sheet: StyleSheetClone) {
        self.style_sheets.push(sheet);
    }

    /// Number of stylesheets in the clone.
    pub fn style_sheet_count(&self) -> usize {
        self.style_sheets.len()
    }

    /// Total number of top-level rules across all stylesheets.
    pub fn rule_count(&self) -> usize {
        self.style_sheets.iter().map(|s| s.css_rules.len()).sum()
    }

    /// Check if the clone holds no stylesheets.
    pub fn is_empty(&self) -> bool {
        self.style_sheets.is_empty()
    }
}

/// Snapshot of one stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSheetClone {
    /// Location the sheet was loaded from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Rules in source order
    pub css_rules: Vec<CssRuleClone>,
}

impl StyleSheetClone {
    /// Create a new empty stylesheet clone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stylesheet clone with a source location.
    pub fn with_href(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            css_rules: Vec::new(),
        }
    }

    /// Append a rule.
    pub fn push(&mut self, rule: impl Into<CssRuleClone>) {
        self.css_rules.push(rule.into());
    }

    /// Iterate over the top-level media rules.
    pub fn media_rules(&self) -> impl Iterator<Item = &MediaRuleClone> {
        self.css_rules.iter().filter_map(CssRuleClone::as_media)
    }

    /// Check if the stylesheet has no rules.
    pub fn is_empty(&self) -> bool {
        self.css_rules.is_empty()
    }
}

/// A cloned rule: either a style rule or a min-width media rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CssRuleClone {
    /// `selector { declarations }`
    Style(StyleRuleClone),
    /// `@media (min-width: Npx) { ... }`
    Media(MediaRuleClone),
}

impl CssRuleClone {
    /// Get the style rule, if this is one.
    pub fn as_style(&self) -> Option<&StyleRuleClone> {
        match self {
            CssRuleClone::Style(rule) => Some(rule),
            CssRuleClone::Media(_) => None,
        }
    }

    /// Get the media rule, if this is one.
    pub fn as_media(&self) -> Option<&MediaRuleClone> {
        match self {
            CssRuleClone::Media(rule) => Some(rule),
            CssRuleClone::Style(_) => None,
        }
    }
}

impl From<StyleRuleClone> for CssRuleClone {
    fn from(rule: StyleRuleClone) -> Self {
        CssRuleClone::Style(rule)
    }
}

impl From<MediaRuleClone> for CssRuleClone {
    fn from(rule: MediaRuleClone) -> Self {
        CssRuleClone::Media(rule)
    }
}

/// A style rule reduced to its fluid declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRuleClone {
    /// Selector text, copied verbatim
    pub selector_text: String,

    /// Fluid property name to value
    pub style: BTreeMap<String, String>,
}

impl StyleRuleClone {
    /// Create a style rule with no declarations.
    pub fn new(selector_text: impl Into<String>) -> Self {
        Self {
            selector_text: selector_text.into(),
            style: BTreeMap::new(),
        }
    }

    /// Add a declaration (builder style).
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(name.into(), value.into());
        self
    }

    /// Get the value of a property.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }
}

/// A `(min-width: Npx)` media rule and the style rules inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRuleClone {
    /// Minimum viewport width in pixels
    pub min_width: u32,

    /// Nested style rules in source order
    pub css_rules: Vec<StyleRuleClone>,
}

impl MediaRuleClone {
    /// Create a media rule with no nested rules.
    pub fn new(min_width: u32) -> Self {
        Self {
            min_width,
            css_rules: Vec::new(),
        }
    }

    /// Add a nested style rule (builder style).
    pub fn with_rule(mut self, rule: StyleRuleClone) -> Self {
        self.css_rules.push(rule);
        self
    }

    /// An empty media rule marks the baseline width of its stylesheet.
    pub fn is_baseline_marker(&self) -> bool {
        self.css_rules.is_empty()
    }
}
