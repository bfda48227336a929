//! Stylesheet cloner.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::host::{HostRule, HostStyleSheet, RuleKind, StyleSheetSource};
use crate::model::{DocumentClone, MediaRuleClone, StyleRuleClone, StyleSheetClone};

use super::filter::is_fluid_property;

/// `(min-width: <digits>px)` and nothing else.
static MIN_WIDTH_CONDITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(min-width:\s*([0-9]+)px\)$").unwrap());

/// Counters collected while cloning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneStats {
    /// Stylesheets whose rules could not be read
    pub inaccessible_sheets: u32,

    /// Style rules cloned, including those nested in media rules
    pub style_rules: u32,

    /// Media rules cloned
    pub media_rules: u32,

    /// Media rules dropped for an unsupported condition
    pub dropped_media_rules: u32,

    /// Rules of other types that were skipped
    pub ignored_rules: u32,

    /// Declarations dropped because the property is not fluid
    pub filtered_properties: u32,
}

/// Walks host stylesheets and builds a [`DocumentClone`].
#[derive(Debug, Default)]
pub struct Cloner {
    stats: CloneStats,
}

impl Cloner {
    /// Create a cloner with empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone every accessible stylesheet of `source`.
    pub fn clone_document<S: StyleSheetSource>(&mut self, source: &S) -> DocumentClone {
        let mut result = DocumentClone::new();
        for sheet in source.style_sheets() {
            if let Some(sheet_clone) = self.clone_style_sheet(sheet) {
                result.add_style_sheet(sheet_clone);
            }
        }
        result
    }

    /// Clone one stylesheet, or `None` if the host refuses access.
    pub fn clone_style_sheet<H: HostStyleSheet>(&mut self, sheet: &H) -> Option<StyleSheetClone> {
        let rules = match sheet.css_rules() {
            Ok(rules) => rules,
            Err(e) => {
                log::debug!("Skipping stylesheet: {}", e);
                self.stats.inaccessible_sheets += 1;
                return None;
            }
        };

        let mut result = StyleSheetClone {
            href: sheet.href().map(str::to_string),
            css_rules: Vec::with_capacity(rules.len()),
        };
        for rule in rules {
            match rule.kind() {
                RuleKind::Style => result.push(self.clone_style_rule(rule)),
                RuleKind::Media => {
                    if let Some(media) = self.clone_media_rule(rule) {
                        result.push(media);
                    }
                }
                RuleKind::Other(code) => {
                    log::trace!("Ignoring rule of type {}", code);
                    self.stats.ignored_rules += 1;
                }
            }
        }
        Some(result)
    }

    /// Copy the selector and the fluid declarations of a style rule.
    pub fn clone_style_rule<R: HostRule>(&mut self, rule: &R) -> StyleRuleClone {
        let mut result = StyleRuleClone::new(rule.selector_text());
        for (name, value) in rule.declarations() {
            if is_fluid_property(name) {
                result.style.insert(name.to_string(), value.to_string());
            } else {
                self.stats.filtered_properties += 1;
            }
        }
        self.stats.style_rules += 1;
        result
    }

    /// Clone a media rule if its condition is a bare min-width check.
    ///
    /// Nested rules other than style rules are not visited.
    pub fn clone_media_rule<R: HostRule>(&mut self, rule: &R) -> Option<MediaRuleClone> {
        let Some(min_width) = parse_min_width(rule.condition_text()) else {
            log::debug!(
                "Dropping media rule with unsupported condition {:?}",
                rule.condition_text()
            );
            self.stats.dropped_media_rules += 1;
            return None;
        };

        let css_rules = rule
            .css_rules()
            .iter()
            .filter(|nested| nested.kind() == RuleKind::Style)
            .map(|nested| self.clone_style_rule(nested))
            .collect();

        self.stats.media_rules += 1;
        Some(MediaRuleClone {
            min_width,
            css_rules,
        })
    }

    /// Statistics collected so far.
    pub fn stats(&self) -> &CloneStats {
        &self.stats
    }

    /// Consume the cloner, returning its statistics.
    pub fn into_stats(self) -> CloneStats {
        self.stats
    }
}

/// Extract the width from a `(min-width: Npx)` condition.
///
/// Any other condition, including combinations with `and`/`or`, yields
/// `None`. Widths past `u32::MAX` saturate.
pub fn parse_min_width(condition_text: &str) -> Option<u32> {
    let caps = MIN_WIDTH_CONDITION.captures(condition_text.trim())?;
    Some(caps[1].parse().unwrap_or(u32::MAX))
}

/// Clone every accessible stylesheet of `source`.
///
/// Never fails: unreadable sheets and unsupported media rules are left out.
pub fn clone_document<S: StyleSheetSource>(source: &S) -> DocumentClone {
    Cloner::new().clone_document(source)
}

/// Clone a document and report what was kept and dropped.
pub fn clone_document_with_stats<S: StyleSheetSource>(source: &S) -> (DocumentClone, CloneStats) {
    let mut cloner = Cloner::new();
    let doc = cloner.clone_document(source);
    (doc, cloner.into_stats())
}

/// Copy the selector and the fluid declarations of a style rule.
pub fn clone_style_rule<R: HostRule>(rule: &R) -> StyleRuleClone {
    Cloner::new().clone_style_rule(rule)
}

/// Clone a media rule if its condition is a bare min-width check.
pub fn clone_media_rule<R: HostRule>(rule: &R) -> Option<MediaRuleClone> {
    Cloner::new().clone_media_rule(rule)
}
