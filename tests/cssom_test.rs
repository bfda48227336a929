//! Integration tests running CSS text and files through the pipeline.

use std::fs;

use fluidsheet::render::{to_json, to_text};
use fluidsheet::{clone_css, clone_css_files, parse_css, Fluidsheet, JsonFormat};
use tempfile::tempdir;

const SITE_CSS: &str = r#"
@font-face { font-family: Inter; src: url(inter.woff2) }
@media (min-width: 360px) {}

html { font-size: 16px; color: #222 }
h1 { font-size: 2rem; margin: 0 0 1rem; font-family: serif }

@media (min-width: 768px) {
  h1 { font-size: 3rem }
  .grid { grid-template-columns: 1fr 1fr; gap: 2rem }
}

@media screen and (min-width: 1024px) {
  h1 { font-size: 4rem }
}

.card { padding: 1rem 2rem; border-radius: 8px }
"#;

#[test]
fn test_site_breakdown() {
    let result = parse_css(&clone_css(&[SITE_CSS]));

    assert_eq!(result.breakpoints, vec![360, 768]);
    assert_eq!(result.baseline_width, 360);

    let sheet = &result.style_sheets[0];
    assert_eq!(sheet.baseline_width, 360);
    let summary: Vec<(u32, bool, usize)> = sheet
        .batches
        .iter()
        .map(|b| (b.width, b.is_media_rule, b.style_rules.len()))
        .collect();
    assert_eq!(
        summary,
        vec![(360, true, 0), (360, false, 2), (768, true, 2), (360, false, 1)]
    );
}

#[test]
fn test_shorthands_reach_clone() {
    let doc = clone_css(&[SITE_CSS]);
    let card = doc.style_sheets[0]
        .css_rules
        .last()
        .and_then(|r| r.as_style())
        .unwrap();

    assert_eq!(card.selector_text, ".card");
    assert_eq!(card.get("padding-left"), Some("2rem"));
    assert_eq!(card.get("border-bottom-left-radius"), Some("8px"));
    assert_eq!(card.style.len(), 8);
}

#[test]
fn test_files_keep_href() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("base.css");
    let wide = dir.path().join("wide.css");
    fs::write(&base, "body { margin-left: 1rem }").unwrap();
    fs::write(&wide, "@media (min-width: 1200px) { body { margin-left: 4rem } }").unwrap();

    let doc = clone_css_files(&[&base, &wide]).unwrap();

    assert_eq!(doc.style_sheet_count(), 2);
    assert_eq!(
        doc.style_sheets[1].href.as_deref(),
        Some(wide.display().to_string().as_str())
    );
    assert_eq!(parse_css(&doc).breakpoints, vec![1200]);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempdir().unwrap();
    let result = clone_css_files(&[dir.path().join("missing.css")]);
    assert!(matches!(result, Err(fluidsheet::Error::Io(_))));
}

#[test]
fn test_builder_with_cross_origin() {
    let result = Fluidsheet::new()
        .add_cross_origin("https://fonts.example.com/inter.css")
        .add_css(SITE_CSS)
        .run()
        .unwrap();

    assert_eq!(result.snapshot.style_sheet_count(), 1);
    assert_eq!(result.stats.inaccessible_sheets, 1);
    assert_eq!(result.stats.dropped_media_rules, 1);
    assert_eq!(result.stats.ignored_rules, 1);
}

#[test]
fn test_media_spellings_share_breakpoints() {
    let doc = clone_css(&[
        "@media (MIN-WIDTH: 768px) { .a { width: 50% } }",
        "@media ( min-width: 768px ) { .b { width: 40% } }",
        "@media (min-width : 1024PX) { .c { width: 30% } }",
        "@media all and (min-width: 480px) { .d { width: 20% } }",
    ]);
    let result = parse_css(&doc);

    assert_eq!(result.breakpoints, vec![480, 768, 1024]);
    assert_eq!(doc.rule_count(), 4);
}

#[test]
fn test_declarations_follow_cssom_values() {
    let doc = clone_css(&[
        ".a { width: 10px !important; width: 20px; height: ; font-size: /* c */ 2rem }",
    ]);
    let rule = doc.style_sheets[0].css_rules[0].as_style().unwrap();

    assert_eq!(rule.get("width"), Some("10px"));
    assert_eq!(rule.get("height"), None);
    assert_eq!(rule.get("font-size"), Some("2rem"));
}

#[test]
fn test_render_outputs() {
    let result = parse_css(&clone_css(&[SITE_CSS]));

    let json = to_json(&result, JsonFormat::Compact).unwrap();
    assert!(json.contains("\"breakpoints\":[360,768]"));
    assert!(json.contains("\"isMediaRule\":true"));

    let text = to_text(&result);
    assert!(text.contains("Baseline: 360px"));
    assert!(text.contains("@768px [media] h1 | .grid"));
}
