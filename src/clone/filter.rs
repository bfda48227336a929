//! Properties eligible for fluid scaling.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Longhand properties whose values may scale with the viewport.
pub const FLUID_PROPERTY_NAMES: &[&str] = &[
    "font-size",
    "line-height",
    "letter-spacing",
    "word-spacing",
    "text-indent",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-right-radius",
    "border-bottom-left-radius",
    "width",
    "min-width",
    "max-width",
    "height",
    "min-height",
    "max-height",
    "grid-template-columns",
    "grid-template-rows",
    "background-position-x",
    "background-position-y",
    "--fluid-bg-size",
    "top",
    "left",
    "right",
    "bottom",
    "column-gap",
    "row-gap",
];

static FLUID_PROPERTIES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| FLUID_PROPERTY_NAMES.iter().copied().collect());

/// Check whether a property survives cloning.
pub fn is_fluid_property(name: &str) -> bool {
    FLUID_PROPERTIES.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluid_properties() {
        assert_eq!(FLUID_PROPERTY_NAMES.len(), 38);
        assert!(is_fluid_property("font-size"));
        assert!(is_fluid_property("--fluid-bg-size"));
        assert!(is_fluid_property("row-gap"));
    }

    #[test]
    fn test_non_fluid_properties() {
        assert!(!is_fluid_property("color"));
        assert!(!is_fluid_property("padding"));
        assert!(!is_fluid_property("Font-Size"));
        assert!(!is_fluid_property(""));
    }
}
