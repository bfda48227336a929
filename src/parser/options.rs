//! Parsing options and configuration.

use crate::error::{Error, Result};

/// Baseline viewport width (px) used when no stylesheet declares one.
pub const DEFAULT_BASELINE_WIDTH: u32 = 375;

/// Options for parsing a document clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Baseline width when no empty media rule overrides it
    pub baseline_width: u32,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default baseline width.
    pub fn with_baseline_width(mut self, width: u32) -> Self {
        self.baseline_width = width;
        self
    }

    /// Reject options that cannot describe a viewport.
    pub fn validate(&self) -> Result<()> {
        if self.baseline_width == 0 {
            return Err(Error::InvalidBaseline(self.baseline_width));
        }
        Ok(())
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            baseline_width: DEFAULT_BASELINE_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new().with_baseline_width(320);
        assert_eq!(options.baseline_width, 320);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.baseline_width, 375);
    }

    #[test]
    fn test_zero_baseline_rejected() {
        let options = ParseOptions::new().with_baseline_width(0);
        assert!(matches!(options.validate(), Err(Error::InvalidBaseline(0))));
    }
}
