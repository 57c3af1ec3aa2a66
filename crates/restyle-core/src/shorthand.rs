//! Shorthand decomposition
//!
//! Two depths are offered. [`decompose_shorthand`] splits one level, which is
//! what a style write needs (`border-left` to its width/style/color triple).
//! [`expand_longhands`] splits all the way down to per-side longhands, which
//! is what a cascade needs.

use crate::declarations::split_value_tokens;
use crate::error::PropertyError;
use crate::properties::BORDER_STYLES;
use crate::values::{is_color, Length, Unit};

/// Box sides in shorthand order
pub const BOX_SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

const BORDER_WIDTH_KEYWORDS: &[&str] = &["thin", "medium", "thick"];

const FONT_SIZE_KEYWORDS: &[&str] = &[
    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "xxx-large", "smaller",
    "larger",
];

const FONT_STRETCH_KEYWORDS: &[&str] = &[
    "ultra-condensed",
    "extra-condensed",
    "condensed",
    "semi-condensed",
    "semi-expanded",
    "expanded",
    "extra-expanded",
    "ultra-expanded",
];

/// Whether a style write of `property` is always split before it is stored.
/// `border-width`, `border-style` and `border-color` split only when they
/// carry more than one value.
pub fn is_shorthand(property: &str) -> bool {
    matches!(
        property,
        "border" | "border-top" | "border-right" | "border-bottom" | "border-left" | "margin" | "padding"
    )
}

/// Split a shorthand one level. Non-shorthands come back unchanged.
///
/// ```rust
/// use restyle_core::decompose_shorthand;
///
/// let parts = decompose_shorthand("border-left", "4px solid #3498db").unwrap();
/// assert_eq!(parts[0], ("border-left-width".to_string(), "4px".to_string()));
/// assert_eq!(parts[1], ("border-left-style".to_string(), "solid".to_string()));
/// assert_eq!(parts[2], ("border-left-color".to_string(), "#3498db".to_string()));
/// ```
pub fn decompose_shorthand(
    property: &str,
    value: &str,
) -> Result<Vec<(String, String)>, PropertyError> {
    match property {
        "border" => border_triple("border", property, value),
        "border-top" | "border-right" | "border-bottom" | "border-left" => {
            border_triple(property, property, value)
        }
        "margin" | "padding" => box_sides(property, value, |side| format!("{}-{}", property, side)),
        "border-width" | "border-style" | "border-color" if split_value_tokens(value).len() > 1 => {
            let kind = &property["border-".len()..];
            box_sides(property, value, |side| format!("border-{}-{}", side, kind))
        }
        _ => Ok(vec![(property.to_string(), value.trim().to_string())]),
    }
}

/// Split a shorthand down to per-side longhands.
///
/// `border` becomes twelve `border-{side}-{width,style,color}` entries and
/// `border-width: 1px 2px` becomes four `border-{side}-width` entries.
/// `background`, `font` and `list-style` are split into the longhands a
/// cascade tracks.
pub fn expand_longhands(
    property: &str,
    value: &str,
) -> Result<Vec<(String, String)>, PropertyError> {
    match property {
        "border" => {
            let mut result = Vec::with_capacity(12);
            for (part, part_value) in border_triple("border", property, value)? {
                result.extend(expand_longhands(&part, &part_value)?);
            }
            Ok(result)
        }
        "border-width" | "border-style" | "border-color" => {
            let kind = &property["border-".len()..];
            box_sides(property, value, |side| format!("border-{}-{}", side, kind))
        }
        "background" => background(value),
        "font" => font(value),
        "list-style" => list_style(value),
        _ => decompose_shorthand(property, value),
    }
}

fn background(value: &str) -> Result<Vec<(String, String)>, PropertyError> {
    let mut color = "transparent";
    let mut image = "none";
    for token in split_value_tokens(value) {
        let lower = token.to_ascii_lowercase();
        if is_color(token) {
            color = token;
        } else if lower.starts_with("url(") || lower.contains("gradient(") {
            image = token;
        }
    }
    Ok(vec![
        ("background-color".to_string(), color.to_string()),
        ("background-image".to_string(), image.to_string()),
    ])
}

/// `[style || variant || weight || stretch]? size[/line-height]? family`
fn font(value: &str) -> Result<Vec<(String, String)>, PropertyError> {
    let malformed = || PropertyError::MalformedShorthand {
        property: "font".to_string(),
        value: value.to_string(),
    };

    let tokens = split_value_tokens(value);
    let mut style = "normal";
    let mut variant = "normal";
    let mut weight = "normal";
    let mut size: Option<&str> = None;
    let mut line_height = "normal";
    let mut rest = tokens.iter().copied().peekable();

    while let Some(token) = rest.next() {
        let lower = token.to_ascii_lowercase();
        match lower.as_str() {
            "normal" => continue,
            "italic" | "oblique" => style = token,
            "small-caps" => variant = token,
            "bold" | "bolder" | "lighter" => weight = token,
            _ if FONT_STRETCH_KEYWORDS.contains(&lower.as_str()) => {}
            _ if Length::parse(token).is_some_and(|l| l.unit == Unit::Number) => weight = token,
            _ => {
                let (size_part, height_part) = match token.split_once('/') {
                    Some((s, h)) => (s, Some(h)),
                    None => (token, None),
                };
                let size_lower = size_part.to_ascii_lowercase();
                if !FONT_SIZE_KEYWORDS.contains(&size_lower.as_str()) && !is_width(size_part) {
                    return Err(malformed());
                }
                size = Some(size_part);
                match height_part {
                    Some("") => line_height = rest.next().ok_or_else(malformed)?,
                    Some(h) => line_height = h,
                    None => {
                        if let Some(next) = rest.peek().copied() {
                            if let Some(h) = next.strip_prefix('/') {
                                rest.next();
                                line_height = if h.is_empty() {
                                    rest.next().ok_or_else(malformed)?
                                } else {
                                    h
                                };
                            }
                        }
                    }
                }
                break;
            }
        }
    }

    let size = size.ok_or_else(malformed)?;
    let family = rest.collect::<Vec<_>>().join(" ");
    if family.is_empty() {
        return Err(malformed());
    }

    Ok(vec![
        ("font-style".to_string(), style.to_string()),
        ("font-variant".to_string(), variant.to_string()),
        ("font-weight".to_string(), weight.to_string()),
        ("font-size".to_string(), size.to_string()),
        ("line-height".to_string(), line_height.to_string()),
        ("font-family".to_string(), family),
    ])
}

fn list_style(value: &str) -> Result<Vec<(String, String)>, PropertyError> {
    let mut kind: Option<&str> = None;
    let mut position = "outside";
    for token in split_value_tokens(value) {
        let lower = token.to_ascii_lowercase();
        if lower == "inside" || lower == "outside" {
            position = token;
        } else if !lower.starts_with("url(") && kind.replace(token).is_some() {
            return Err(PropertyError::MalformedShorthand {
                property: "list-style".to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(vec![
        ("list-style-type".to_string(), kind.unwrap_or("disc").to_string()),
        ("list-style-position".to_string(), position.to_string()),
    ])
}

/// Classify the tokens of a `<width> <style> <color>` triple in any order.
/// Missing parts take their initial values.
fn border_triple(
    prefix: &str,
    property: &str,
    value: &str,
) -> Result<Vec<(String, String)>, PropertyError> {
    let malformed = || PropertyError::MalformedShorthand {
        property: property.to_string(),
        value: value.to_string(),
    };

    let tokens = split_value_tokens(value);
    if tokens.is_empty() || tokens.len() > 3 {
        return Err(malformed());
    }

    let mut width: Option<&str> = None;
    let mut style: Option<&str> = None;
    let mut color: Option<&str> = None;

    for token in tokens {
        let lower = token.to_ascii_lowercase();
        let slot = if BORDER_STYLES.contains(&lower.as_str()) {
            &mut style
        } else if BORDER_WIDTH_KEYWORDS.contains(&lower.as_str()) || is_width(token) {
            &mut width
        } else if is_color(token) {
            &mut color
        } else {
            return Err(malformed());
        };
        if slot.replace(token).is_some() {
            return Err(malformed());
        }
    }

    Ok(vec![
        (format!("{}-width", prefix), width.unwrap_or("medium").to_string()),
        (format!("{}-style", prefix), style.unwrap_or("none").to_string()),
        (format!("{}-color", prefix), color.unwrap_or("currentcolor").to_string()),
    ])
}

fn is_width(token: &str) -> bool {
    Length::parse(token).is_some_and(|l| l.value >= 0.0)
}

/// Spread one to four values over the box sides
fn box_sides<F>(property: &str, value: &str, name: F) -> Result<Vec<(String, String)>, PropertyError>
where
    F: Fn(&str) -> String,
{
    let tokens = split_value_tokens(value);
    let [top, right, bottom, left] = match tokens.as_slice() {
        [all] => [*all; 4],
        [vertical, horizontal] => [*vertical, *horizontal, *vertical, *horizontal],
        [top, horizontal, bottom] => [*top, *horizontal, *bottom, *horizontal],
        [top, right, bottom, left] => [*top, *right, *bottom, *left],
        _ => {
            return Err(PropertyError::MalformedShorthand {
                property: property.to_string(),
                value: value.to_string(),
            })
        }
    };

    Ok(BOX_SIDES
        .iter()
        .zip([top, right, bottom, left])
        .map(|(side, v)| (name(side), v.to_string()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_border_left_any_order() {
        let parts = decompose_shorthand("border-left", "#dfe2e5 4px solid").unwrap();
        assert_eq!(
            parts,
            pairs(&[
                ("border-left-width", "4px"),
                ("border-left-style", "solid"),
                ("border-left-color", "#dfe2e5"),
            ])
        );
    }

    #[test]
    fn test_border_partial_fills_initial_values() {
        let parts = decompose_shorthand("border-bottom", "solid").unwrap();
        assert_eq!(
            parts,
            pairs(&[
                ("border-bottom-width", "medium"),
                ("border-bottom-style", "solid"),
                ("border-bottom-color", "currentcolor"),
            ])
        );
    }

    #[test]
    fn test_malformed_border() {
        assert!(decompose_shorthand("border-left", "4px solid").is_ok());
        assert!(decompose_shorthand("border-left", "4px wavy #000").is_err());
        assert!(decompose_shorthand("border-left", "4px 2px solid").is_err());
        assert!(decompose_shorthand("border-left", "").is_err());
        assert!(decompose_shorthand("border-left", "1px solid red extra").is_err());
    }

    #[test]
    fn test_border_groups_split_only_with_several_values() {
        let parts = decompose_shorthand("border-style", "none none none solid").unwrap();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[3], ("border-left-style".to_string(), "solid".to_string()));

        let single = decompose_shorthand("border-color", "rgb(52, 73, 94)").unwrap();
        assert_eq!(single, pairs(&[("border-color", "rgb(52, 73, 94)")]));
    }

    #[test]
    fn test_margin_sides() {
        let parts = decompose_shorthand("margin", "1.2em 0").unwrap();
        assert_eq!(
            parts,
            pairs(&[
                ("margin-top", "1.2em"),
                ("margin-right", "0"),
                ("margin-bottom", "1.2em"),
                ("margin-left", "0"),
            ])
        );
        assert!(decompose_shorthand("padding", "1px 2px 3px 4px 5px").is_err());
    }

    #[test]
    fn test_non_shorthand_passthrough() {
        let parts = decompose_shorthand("color", " red ").unwrap();
        assert_eq!(parts, pairs(&[("color", "red")]));
        assert!(!is_shorthand("border-radius"));
    }

    #[test]
    fn test_expand_border_to_sides() {
        let parts = expand_longhands("border", "1px solid #eaecef").unwrap();
        assert_eq!(parts.len(), 12);
        assert!(parts.contains(&("border-right-style".to_string(), "solid".to_string())));
        assert!(parts.contains(&("border-bottom-color".to_string(), "#eaecef".to_string())));

        let widths = expand_longhands("border-width", "0 0 0 4px").unwrap();
        assert_eq!(widths[3], ("border-left-width".to_string(), "4px".to_string()));
    }

    #[test]
    fn test_expand_background_color() {
        let parts = expand_longhands("background", "#f4f4f4").unwrap();
        assert_eq!(
            parts,
            pairs(&[("background-color", "#f4f4f4"), ("background-image", "none")])
        );

        let image = expand_longhands("background", "url(paper.png) repeat-x rgb(1, 2, 3)").unwrap();
        assert_eq!(image[0], ("background-color".to_string(), "rgb(1, 2, 3)".to_string()));
        assert_eq!(image[1], ("background-image".to_string(), "url(paper.png)".to_string()));
    }

    #[test]
    fn test_expand_font() {
        let parts = expand_longhands("font", "italic bold 20px/1.5 Georgia, serif").unwrap();
        assert_eq!(
            parts,
            pairs(&[
                ("font-style", "italic"),
                ("font-variant", "normal"),
                ("font-weight", "bold"),
                ("font-size", "20px"),
                ("line-height", "1.5"),
                ("font-family", "Georgia, serif"),
            ])
        );

        let spaced = expand_longhands("font", "700 1.2em / 30px \"Helvetica Neue\", sans-serif").unwrap();
        assert_eq!(spaced[2], ("font-weight".to_string(), "700".to_string()));
        assert_eq!(spaced[3], ("font-size".to_string(), "1.2em".to_string()));
        assert_eq!(spaced[4], ("line-height".to_string(), "30px".to_string()));
        assert_eq!(
            spaced[5],
            ("font-family".to_string(), "\"Helvetica Neue\", sans-serif".to_string())
        );
    }

    #[test]
    fn test_malformed_font() {
        assert!(expand_longhands("font", "bold").is_err());
        assert!(expand_longhands("font", "16px").is_err());
        assert!(expand_longhands("font", "italic serif").is_err());
        assert!(expand_longhands("font", "small-caps large Arial").is_ok());
    }

    #[test]
    fn test_expand_list_style() {
        let parts = expand_longhands("list-style", "square").unwrap();
        assert_eq!(
            parts,
            pairs(&[("list-style-type", "square"), ("list-style-position", "outside")])
        );

        let inside = expand_longhands("list-style", "inside upper-roman").unwrap();
        assert_eq!(inside[0].1, "upper-roman");
        assert_eq!(inside[1].1, "inside");
        assert!(expand_longhands("list-style", "square circle").is_err());
    }
}
