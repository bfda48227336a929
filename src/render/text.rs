//! Plain text report of a parse result.

use std::fmt::Write;

use crate::model::{ParseResult, StyleBatch};

/// Render breakpoints and batches as a readable report.
pub fn to_text(result: &ParseResult) -> String {
    let mut out = String::new();

    let breakpoints = if result.breakpoints.is_empty() {
        "none".to_string()
    } else {
        result
            .breakpoints
            .iter()
            .map(|w| format!("{}px", w))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let _ = writeln!(out, "Breakpoints: {}", breakpoints);
    let _ = writeln!(out, "Baseline: {}px", result.baseline_width);

    for (i, sheet) in result.style_sheets.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Stylesheet {} ({}), baseline {}px",
            i + 1,
            sheet.href.as_deref().unwrap_or("inline"),
            sheet.baseline_width
        );
        for batch in &sheet.batches {
            let _ = writeln!(out, "  {}", describe_batch(batch));
        }
    }

    out.trim_end().to_string()
}

fn describe_batch(batch: &StyleBatch) -> String {
    let origin = if batch.is_media_rule { "media" } else { "baseline" };
    let selectors: Vec<&str> = batch.selectors().collect();
    if selectors.is_empty() {
        format!("@{}px [{}] (no rules)", batch.width, origin)
    } else {
        format!("@{}px [{}] {}", batch.width, origin, selectors.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StyleRuleClone, StyleSheetBreakdown};

    #[test]
    fn test_to_text() {
        let result = ParseResult {
            breakpoints: vec![600, 900],
            baseline_width: 375,
            style_sheets: vec![StyleSheetBreakdown {
                href: Some("site.css".to_string()),
                baseline_width: 375,
                batches: vec![
                    StyleBatch {
                        width: 375,
                        style_rules: vec![StyleRuleClone::new("h1"), StyleRuleClone::new("p")],
                        is_media_rule: false,
                    },
                    StyleBatch::media(600, Vec::new()),
                ],
            }],
        };

        let text = to_text(&result);

        assert!(text.starts_with("Breakpoints: 600px, 900px"));
        assert!(text.contains("Stylesheet 1 (site.css), baseline 375px"));
        assert!(text.contains("@375px [baseline] h1 | p"));
        assert!(text.ends_with("@600px [media] (no rules)"));
    }

    #[test]
    fn test_to_text_empty() {
        let result = ParseResult {
            breakpoints: Vec::new(),
            baseline_width: 375,
            style_sheets: Vec::new(),
        };
        assert_eq!(to_text(&result), "Breakpoints: none\nBaseline: 375px");
    }
}
