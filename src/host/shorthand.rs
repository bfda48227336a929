//! Box shorthand expansion.
//!
//! Browsers report longhands through CSSOM, so `padding: 1rem 2rem` shows up
//! as four `padding-*` properties. The in-memory host does the same for the
//! shorthands that cover fluid longhands.

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];
const CORNERS: [&str; 4] = ["top-left", "top-right", "bottom-right", "bottom-left"];

/// Expand a shorthand declaration into longhands.
///
/// Returns `None` when `name` is not a supported shorthand or the value does
/// not have a shape that can be expanded (wrong arity, slash syntax).
pub fn expand_shorthand(name: &str, value: &str) -> Option<Vec<(String, String)>> {
    let parts = split_components(value);
    match name {
        "margin" | "padding" => {
            let values = four_values(&parts)?;
            Some(zip_names(SIDES.map(|side| format!("{name}-{side}")), values))
        }
        "border-width" => {
            let values = four_values(&parts)?;
            Some(zip_names(SIDES.map(|side| format!("border-{side}-width")), values))
        }
        "inset" => {
            let values = four_values(&parts)?;
            Some(zip_names(SIDES.map(str::to_string), values))
        }
        "border-radius" => {
            if value.contains('/') {
                return None;
            }
            let values = four_values(&parts)?;
            Some(zip_names(
                CORNERS.map(|corner| format!("border-{corner}-radius")),
                values,
            ))
        }
        "gap" => {
            let (row, column) = match parts.as_slice() {
                [both] => (*both, *both),
                [row, column] => (*row, *column),
                _ => return None,
            };
            Some(vec![
                ("row-gap".to_string(), row.to_string()),
                ("column-gap".to_string(), column.to_string()),
            ])
        }
        _ => None,
    }
}

/// Apply the 1-to-4 value rule shared by box shorthands.
fn four_values<'a>(parts: &[&'a str]) -> Option<[&'a str; 4]> {
    match *parts {
        [a] => Some([a, a, a, a]),
        [a, b] => Some([a, b, a, b]),
        [a, b, c] => Some([a, b, c, b]),
        [a, b, c, d] => Some([a, b, c, d]),
        _ => None,
    }
}

fn zip_names(names: [String; 4], values: [&str; 4]) -> Vec<(String, String)> {
    names
        .into_iter()
        .zip(values)
        .map(|(name, value)| (name, value.to_string()))
        .collect()
}

/// Split a value on top-level whitespace, keeping functions like
/// `calc(1rem + 2vw)` intact.
fn split_components(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;

    for (i, c) in value.char_indices() {
        match c {
            '(' => {
                depth += 1;
                start.get_or_insert(i);
            }
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    parts.push(&value[s..i]);
                }
            }
            _ => {
                start.get_or_insert(i);
            }
        }
    }
    if let Some(s) = start {
        parts.push(&value[s..]);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(expanded: &'a [(String, String)], name: &str) -> &'a str {
        expanded
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn test_split_components_keeps_functions() {
        assert_eq!(
            split_components("calc(1rem + 2vw)  0 clamp(1px, 2vw, 3px)"),
            vec!["calc(1rem + 2vw)", "0", "clamp(1px, 2vw, 3px)"]
        );
    }

    #[test]
    fn test_expand_padding_two_values() {
        let expanded = expand_shorthand("padding", "1rem 2rem").unwrap();
        assert_eq!(expanded.len(), 4);
        assert_eq!(lookup(&expanded, "padding-top"), "1rem");
        assert_eq!(lookup(&expanded, "padding-right"), "2rem");
        assert_eq!(lookup(&expanded, "padding-bottom"), "1rem");
        assert_eq!(lookup(&expanded, "padding-left"), "2rem");
    }

    #[test]
    fn test_expand_margin_three_values() {
        let expanded = expand_shorthand("margin", "1px 2px 3px").unwrap();
        assert_eq!(lookup(&expanded, "margin-bottom"), "3px");
        assert_eq!(lookup(&expanded, "margin-left"), "2px");
    }

    #[test]
    fn test_expand_border_radius() {
        let expanded = expand_shorthand("border-radius", "4px 8px").unwrap();
        assert_eq!(lookup(&expanded, "border-top-left-radius"), "4px");
        assert_eq!(lookup(&expanded, "border-bottom-right-radius"), "4px");
        assert_eq!(lookup(&expanded, "border-top-right-radius"), "8px");
        assert!(expand_shorthand("border-radius", "4px / 8px").is_none());
    }

    #[test]
    fn test_expand_inset_and_gap() {
        let inset = expand_shorthand("inset", "0").unwrap();
        assert_eq!(lookup(&inset, "left"), "0");

        let gap = expand_shorthand("gap", "1rem 2rem").unwrap();
        assert_eq!(lookup(&gap, "row-gap"), "1rem");
        assert_eq!(lookup(&gap, "column-gap"), "2rem");
    }

    #[test]
    fn test_not_expandable() {
        assert!(expand_shorthand("font", "12px serif").is_none());
        assert!(expand_shorthand("margin", "1px 2px 3px 4px 5px").is_none());
        assert!(expand_shorthand("padding", "").is_none());
    }
}
