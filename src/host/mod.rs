//! Host-side view of a live document's stylesheets.
//!
//! A host is whatever owns the real stylesheet objects: a browser bridge, an
//! automation harness, or the in-memory [`CssomDocument`] built from CSS
//! text. The cloner only talks to these traits.
//!
//! Rule types are reported as CSSOM numeric codes. They are translated to
//! [`RuleKind`] at this boundary and never travel further.

mod cssom;
mod shorthand;

pub use cssom::{CssomDocument, CssomRule, CssomStyleSheet};
pub use shorthand::expand_shorthand;

use thiserror::Error;

/// CSSOM `CSSRule.STYLE_RULE`.
pub const STYLE_RULE_TYPE: u16 = 1;

/// CSSOM `CSSRule.MEDIA_RULE`.
pub const MEDIA_RULE_TYPE: u16 = 4;

/// Reading a stylesheet's rules was refused by the host.
///
/// Browsers raise this for cross-origin sheets loaded without CORS.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Rules of stylesheet {href} are not accessible")]
pub struct AccessError {
    /// Location of the refused sheet
    pub href: String,
}

impl AccessError {
    /// Create an access error for a sheet location.
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// Rule kinds the pipeline distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Style rule (`selector { ... }`)
    Style,
    /// `@media` rule
    Media,
    /// Any other rule, carrying its CSSOM type code
    Other(u16),
}

impl RuleKind {
    /// Translate a CSSOM rule type code.
    pub fn from_type_code(code: u16) -> Self {
        match code {
            STYLE_RULE_TYPE => RuleKind::Style,
            MEDIA_RULE_TYPE => RuleKind::Media,
            other => RuleKind::Other(other),
        }
    }
}

/// A single rule as exposed by the host.
pub trait HostRule {
    /// CSSOM rule type code.
    fn type_code(&self) -> u16;

    /// Selector text of a style rule. Empty for other rules.
    fn selector_text(&self) -> &str;

    /// Declared `(property, value)` pairs of a style rule, in declaration
    /// order. Empty for other rules.
    fn declarations(&self) -> Vec<(&str, &str)>;

    /// Condition text of a media rule. Empty for other rules.
    fn condition_text(&self) -> &str;

    /// Rules nested in a grouping rule. Empty for other rules.
    fn css_rules(&self) -> &[Self]
    where
        Self: Sized;

    /// Kind of this rule.
    fn kind(&self) -> RuleKind {
        RuleKind::from_type_code(self.type_code())
    }
}

/// A stylesheet as exposed by the host.
pub trait HostStyleSheet {
    /// Rule type of this host.
    type Rule: HostRule;

    /// Location the sheet was loaded from. `None` for inline sheets.
    fn href(&self) -> Option<&str>;

    /// Read the sheet's top-level rules.
    ///
    /// Fails when the host refuses access, e.g. for cross-origin sheets.
    fn css_rules(&self) -> Result<&[Self::Rule], AccessError>;
}

/// A document exposing its stylesheet list.
pub trait StyleSheetSource {
    /// Stylesheet type of this host.
    type Sheet: HostStyleSheet;

    /// Stylesheets in document order.
    fn style_sheets(&self) -> &[Self::Sheet];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_kind_from_code() {
        assert_eq!(RuleKind::from_type_code(1), RuleKind::Style);
        assert_eq!(RuleKind::from_type_code(4), RuleKind::Media);
        assert_eq!(RuleKind::from_type_code(5), RuleKind::Other(5));
    }

    #[test]
    fn test_access_error_display() {
        let err = AccessError::new("https://cdn.example.com/site.css");
        assert_eq!(
            err.to_string(),
            "Rules of stylesheet https://cdn.example.com/site.css are not accessible"
        );
    }
}
