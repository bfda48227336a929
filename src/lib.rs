//! # fluidsheet
//!
//! Snapshot a page's stylesheets and group fluid CSS declarations by the
//! viewport width at which they apply.
//!
//! The pipeline has two phases:
//!
//! 1. **Clone**: read the stylesheets a host exposes and keep only style
//!    rules (reduced to fluid properties) and `(min-width: Npx)` media
//!    rules. The result is plain, serializable data.
//! 2. **Parse**: find every breakpoint, resolve the baseline width and
//!    split each stylesheet into width-tagged batches of style rules.
//!
//! ## Quick Start
//!
//! ```
//! use fluidsheet::{clone_css, parser::parse_css};
//!
//! let doc = clone_css(&[
//!     "h1 { font-size: 2rem; color: navy }\n\
//!      @media (min-width: 768px) { h1 { font-size: 3rem } }",
//! ]);
//! let result = parse_css(&doc);
//!
//! assert_eq!(result.breakpoints, vec![768]);
//! assert_eq!(result.style_sheets[0].batches.len(), 2);
//! ```
//!
//! ## Features
//!
//! - **Host abstraction**: clone from any stylesheet source through the
//!   [`host`] traits, or from CSS text via [`CssomDocument`]
//! - **Lossy by design**: only the properties in
//!   [`FLUID_PROPERTY_NAMES`] are kept
//! - **Total**: cross-origin sheets and unsupported media conditions are
//!   skipped, never reported as errors
//! - **Portable output**: clones and parse results serialize to JSON

pub mod clone;
pub mod error;
pub mod host;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use clone::{
    clone_document, clone_document_with_stats, is_fluid_property, CloneStats,
    FLUID_PROPERTY_NAMES,
};
pub use error::{Error, Result};
pub use host::{CssomDocument, CssomStyleSheet, HostRule, HostStyleSheet, StyleSheetSource};
pub use model::{
    CssRuleClone, DocumentClone, MediaRuleClone, ParseResult, StyleBatch, StyleRuleClone,
    StyleSheetBreakdown, StyleSheetClone,
};
pub use parser::{parse_css, parse_css_with_options, ParseOptions, DEFAULT_BASELINE_WIDTH};
pub use render::JsonFormat;

use std::fs;
use std::path::Path;

/// Clone inline stylesheets given as CSS text.
///
/// # Example
///
/// ```
/// use fluidsheet::clone_css;
///
/// let doc = clone_css(&["p { margin-top: 1rem; color: red }"]);
/// let rule = doc.style_sheets[0].css_rules[0].as_style().unwrap();
/// assert_eq!(rule.get("margin-top"), Some("1rem"));
/// assert_eq!(rule.get("color"), None);
/// ```
pub fn clone_css(sources: &[&str]) -> DocumentClone {
    let mut document = CssomDocument::new();
    for css in sources {
        document.add_style_sheet(CssomStyleSheet::parse(css));
    }
    clone_document(&document)
}

/// Read CSS files and clone them, using each path as the sheet's `href`.
///
/// # Example
///
/// ```no_run
/// use fluidsheet::clone_css_files;
///
/// let doc = clone_css_files(&["base.css", "layout.css"]).unwrap();
/// println!("Rules: {}", doc.rule_count());
/// ```
pub fn clone_css_files<P: AsRef<Path>>(paths: &[P]) -> Result<DocumentClone> {
    let mut document = CssomDocument::new();
    for path in paths {
        document.add_style_sheet(load_style_sheet(path.as_ref())?);
    }
    Ok(clone_document(&document))
}

/// Read and parse one CSS file.
pub fn load_style_sheet<P: AsRef<Path>>(path: P) -> Result<CssomStyleSheet> {
    let path = path.as_ref();
    let css = fs::read_to_string(path)?;
    Ok(CssomStyleSheet::parse_with_href(
        &css,
        path.display().to_string(),
    ))
}

/// Builder running the whole clone-then-parse pipeline.
///
/// # Example
///
/// ```
/// use fluidsheet::Fluidsheet;
///
/// let result = Fluidsheet::new()
///     .with_baseline_width(320)
///     .add_css(".card { padding: 1rem }")
///     .add_cross_origin("https://fonts.example.com/font.css")
///     .run()?;
///
/// assert_eq!(result.stats.inaccessible_sheets, 1);
/// assert_eq!(result.parse.style_sheets[0].baseline_width, 320);
/// # Ok::<(), fluidsheet::Error>(())
/// ```
pub struct Fluidsheet {
    document: CssomDocument,
    parse_options: ParseOptions,
}

impl Fluidsheet {
    /// Create a new builder with no stylesheets.
    pub fn new() -> Self {
        Self {
            document: CssomDocument::new(),
            parse_options: ParseOptions::default(),
        }
    }

    /// Set the default baseline width.
    pub fn with_baseline_width(mut self, width: u32) -> Self {
        self.parse_options = self.parse_options.with_baseline_width(width);
        self
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Add an inline stylesheet.
    pub fn add_css(mut self, css: &str) -> Self {
        self.document.add_style_sheet(CssomStyleSheet::parse(css));
        self
    }

    /// Add a stylesheet read from a file.
    pub fn add_css_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.document.add_style_sheet(load_style_sheet(path)?);
        Ok(self)
    }

    /// Add a sheet whose rules the host refuses to expose.
    pub fn add_cross_origin(mut self, href: impl Into<String>) -> Self {
        self.document
            .add_style_sheet(CssomStyleSheet::cross_origin(href));
        self
    }

    /// Clone the stylesheets and parse the clone.
    ///
    /// Fails only when the options are invalid.
    pub fn run(self) -> Result<FluidsheetResult> {
        self.parse_options.validate()?;
        let (snapshot, stats) = clone_document_with_stats(&self.document);
        let parse = parse_css_with_options(&snapshot, &self.parse_options);
        Ok(FluidsheetResult {
            snapshot,
            stats,
            parse,
        })
    }
}

impl Default for Fluidsheet {
    fn default() -> Self {
        Self::new()
    }
}

/// Output of a full pipeline run.
#[derive(Debug, Clone)]
pub struct FluidsheetResult {
    /// The stylesheet clone
    pub snapshot: DocumentClone,
    /// What the cloner kept and dropped
    pub stats: CloneStats,
    /// Breakpoints and batches
    pub parse: ParseResult,
}

impl FluidsheetResult {
    /// Serialize the parse result to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.parse, format)
    }

    /// Render the parse result as a text report.
    pub fn to_text(&self) -> String {
        render::to_text(&self.parse)
    }

    /// Serialize the stylesheet clone to JSON.
    pub fn snapshot_to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.snapshot, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = Fluidsheet::default();
        assert_eq!(builder.parse_options.baseline_width, 375);
        assert!(builder.document.style_sheets.is_empty());
    }

    #[test]
    fn test_builder_chained() {
        let builder = Fluidsheet::new()
            .with_baseline_width(414)
            .add_css("a { top: 0 }")
            .add_cross_origin("https://cdn.example.com/x.css");

        assert_eq!(builder.parse_options.baseline_width, 414);
        assert_eq!(builder.document.style_sheets.len(), 2);
        assert!(builder.document.style_sheets[1].is_cross_origin());
    }

    #[test]
    fn test_builder_parse_options() {
        let result = Fluidsheet::new()
            .with_parse_options(ParseOptions::new().with_baseline_width(320))
            .add_css("h1 { font-size: 2rem }")
            .run()
            .unwrap();

        assert_eq!(result.parse.baseline_width, 320);
        assert_eq!(result.parse.style_sheets[0].batches[0].width, 320);
    }

    #[test]
    fn test_builder_rejects_zero_baseline() {
        let result = Fluidsheet::new().with_baseline_width(0).run();
        assert!(matches!(result, Err(Error::InvalidBaseline(0))));
    }

    #[test]
    fn test_builder_missing_file() {
        let result = Fluidsheet::new().add_css_file("definitely/not/here.css");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_result_outputs() {
        let result = Fluidsheet::new()
            .add_css("h1 { font-size: 2rem }\n@media (min-width: 900px) { h1 { font-size: 3rem } }")
            .run()
            .unwrap();

        assert!(result.to_text().contains("@900px [media] h1"));
        assert!(result.to_json(JsonFormat::Compact).unwrap().contains("\"breakpoints\":[900]"));
        assert!(result
            .snapshot_to_json(JsonFormat::Compact)
            .unwrap()
            .contains("\"minWidth\":900"));
    }

    #[test]
    fn test_clone_css_multiple_sources() {
        let doc = clone_css(&["a { top: 0 }", "", "@media (min-width: 1px) {}"]);
        assert_eq!(doc.style_sheet_count(), 3);
        assert!(doc.style_sheets[1].is_empty());
    }
}
