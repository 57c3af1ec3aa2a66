//! Property names and the registry of properties a profile may carry.

/// Properties measured for every watched template element, in record order
pub const MEASURED_PROPERTIES: &[&str] = &[
    "color",
    "background-color",
    "font-size",
    "line-height",
    "font-weight",
    "font-family",
    "text-align",
    "margin-top",
    "margin-bottom",
    "margin-left",
    "margin-right",
    "padding-top",
    "padding-bottom",
    "padding-left",
    "padding-right",
    "border-radius",
    "border-width",
    "border-style",
    "border-color",
    "text-decoration",
    "letter-spacing",
    "text-indent",
    "list-style-type",
    "display",
];

/// Every other property a style write may target
const OTHER_PROPERTIES: &[&str] = &[
    "background",
    "background-image",
    "border",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
    "border-top-style",
    "border-right-style",
    "border-bottom-style",
    "border-left-style",
    "border-top-color",
    "border-right-color",
    "border-bottom-color",
    "border-left-color",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-right-radius",
    "border-bottom-left-radius",
    "box-shadow",
    "font",
    "font-style",
    "font-variant",
    "height",
    "hyphens",
    "list-style",
    "list-style-position",
    "margin",
    "max-width",
    "min-width",
    "opacity",
    "overflow",
    "padding",
    "text-decoration-color",
    "text-decoration-line",
    "text-decoration-style",
    "text-shadow",
    "text-transform",
    "vertical-align",
    "white-space",
    "width",
    "word-break",
    "word-spacing",
];

/// Border line styles accepted in a border shorthand
pub const BORDER_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// Resolved values that carry no visible effect
const NO_EFFECT_DEFAULTS: &[&str] = &["0px", "none", "normal"];

/// Convert a camelCase property name (`backgroundColor`) to its CSS
/// spelling (`background-color`). Names already in kebab-case pass through.
pub fn to_kebab_case(name: &str) -> String {
    let name = name.trim();
    if name.starts_with("--") {
        return name.to_string();
    }

    let mut result = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Whether a (kebab-case) property may be written to an element
pub fn is_known_property(property: &str) -> bool {
    if property.starts_with("--") && property.len() > 2 {
        return true;
    }
    MEASURED_PROPERTIES.contains(&property) || OTHER_PROPERTIES.contains(&property)
}

/// color and background-color are kept and written even at their defaults
pub fn is_color_property(property: &str) -> bool {
    matches!(property, "color" | "background-color")
}

/// Whether a resolved value is noise that extraction drops
pub fn is_no_effect_default(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || NO_EFFECT_DEFAULTS.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("backgroundColor"), "background-color");
        assert_eq!(to_kebab_case("borderLeftWidth"), "border-left-width");
        assert_eq!(to_kebab_case("color"), "color");
        assert_eq!(to_kebab_case("font-size"), "font-size");
        assert_eq!(to_kebab_case("--accentColor"), "--accentColor");
    }

    #[test]
    fn test_known_properties() {
        assert!(is_known_property("color"));
        assert!(is_known_property("border-left"));
        assert!(is_known_property("font-style"));
        assert!(is_known_property("--brand"));
        assert!(!is_known_property("colour"));
        assert!(!is_known_property("--"));
    }

    #[test]
    fn test_no_effect_defaults() {
        assert!(is_no_effect_default("0px"));
        assert!(is_no_effect_default("none"));
        assert!(is_no_effect_default("normal"));
        assert!(is_no_effect_default(""));
        assert!(!is_no_effect_default("rgba(0, 0, 0, 0)"));
        assert!(!is_no_effect_default("16px"));
    }
}
