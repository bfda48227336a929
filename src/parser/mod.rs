//! Breakpoint parsing of document clones.

mod batching;
mod breakpoints;
mod options;

pub use batching::{batch_style_sheet, parse_style_sheet, resolve_baseline_width};
pub use breakpoints::{discover_breakpoints, Breakpoints};
pub use options::{ParseOptions, DEFAULT_BASELINE_WIDTH};

use crate::model::{DocumentClone, ParseResult};

/// Parse a clone with the default baseline width.
pub fn parse_css(doc: &DocumentClone) -> ParseResult {
    parse_css_with_options(doc, &ParseOptions::default())
}

/// Discover breakpoints, then batch every stylesheet.
pub fn parse_css_with_options(doc: &DocumentClone, options: &ParseOptions) -> ParseResult {
    let Breakpoints {
        breakpoints,
        baseline_width,
    } = discover_breakpoints(doc, options.baseline_width);

    let style_sheets = doc
        .style_sheets
        .iter()
        .map(|sheet| parse_style_sheet(sheet, baseline_width))
        .collect();

    log::debug!(
        "Parsed {} stylesheets: breakpoints {:?}, baseline {}px",
        doc.style_sheet_count(),
        breakpoints,
        baseline_width
    );

    ParseResult {
        breakpoints,
        baseline_width,
        style_sheets,
    }
}
