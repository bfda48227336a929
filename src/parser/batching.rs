//! Per-stylesheet batching of style rules by viewport width.

use crate::model::{CssRuleClone, StyleBatch, StyleSheetBreakdown, StyleSheetClone};

/// Baseline width for one stylesheet.
///
/// The first empty media rule of the sheet wins over `global_baseline`.
pub fn resolve_baseline_width(sheet: &StyleSheetClone, global_baseline: u32) -> u32 {
    sheet
        .media_rules()
        .find(|media| media.is_baseline_marker())
        .map_or(global_baseline, |media| media.min_width)
}

/// Group a stylesheet's rules into width-tagged batches.
///
/// Consecutive top-level style rules share one batch at `baseline_width`.
/// Every media rule closes that batch and emits its own, even when it has
/// no nested rules.
pub fn batch_style_sheet(sheet: &StyleSheetClone, baseline_width: u32) -> Vec<StyleBatch> {
    let mut batches: Vec<StyleBatch> = Vec::new();
    // Index into `batches` of the open baseline batch
    let mut current: Option<usize> = None;

    for rule in &sheet.css_rules {
        match rule {
            CssRuleClone::Style(style) => {
                let index = *current.get_or_insert_with(|| {
                    batches.push(StyleBatch::baseline(baseline_width));
                    batches.len() - 1
                });
                batches[index].style_rules.push(style.clone());
            }
            CssRuleClone::Media(media) => {
                current = None;
                batches.push(StyleBatch::media(media.min_width, media.css_rules.clone()));
            }
        }
    }

    batches
}

/// Resolve the sheet's baseline and batch its rules.
pub fn parse_style_sheet(sheet: &StyleSheetClone, global_baseline: u32) -> StyleSheetBreakdown {
    let baseline_width = resolve_baseline_width(sheet, global_baseline);
    StyleSheetBreakdown {
        href: sheet.href.clone(),
        baseline_width,
        batches: batch_style_sheet(sheet, baseline_width),
    }
}
