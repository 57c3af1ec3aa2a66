//! Resolving the final per-element presentation of template markup.
//!
//! Any component that can render markup and report final property values per
//! element satisfies [`StyleResolver`]. The bundled [`CascadeResolver`] does
//! so without a browser, by running a CSS cascade over the template's own
//! `<style>` blocks, inline styles and user-agent defaults.

mod cascade;
mod defaults;
mod stylesheet;

pub use cascade::CascadeResolver;

use indexmap::IndexMap;
use restyle_core::values::{format_px, parse_px, Length, Unit};
use restyle_core::BOX_SIDES;

/// Errors a resolver reports when it cannot produce styles
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("rendering surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("style resolution failed: {0}")]
    Failed(String),
}

/// Options shared by all resolvers
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverOptions {
    /// Fixed layout width; percentages in margins and paddings resolve
    /// against it
    pub reference_width_px: f32,

    /// Font size of the root element
    pub root_font_size_px: f32,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            reference_width_px: 800.0,
            root_font_size_px: 16.0,
        }
    }
}

/// Renders markup and reports the resolved style of every element
pub trait StyleResolver: Send + Sync {
    /// Elements in document order
    fn resolve(
        &self,
        markup: &str,
        options: &ResolverOptions,
    ) -> Result<Vec<ResolvedElement>, ResolveError>;
}

/// One rendered element with its resolved styles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedElement {
    /// Lowercase tag name
    pub tag: String,

    /// Literal class list
    pub class_names: Vec<String>,

    /// Raw `style` attribute text
    pub inline_style: String,

    /// Computed longhand values
    pub computed: IndexMap<String, String>,
}

impl ResolvedElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            ..Default::default()
        }
    }

    /// The resolved value of a property as a measurement reports it.
    ///
    /// `border-width`, `border-style` and `border-color` are assembled from
    /// their sides, and a unitless `line-height` is reported in pixels.
    pub fn value(&self, property: &str) -> Option<String> {
        match property {
            "border-width" | "border-style" | "border-color" => {
                let kind = &property["border-".len()..];
                let sides: Option<Vec<&str>> = BOX_SIDES
                    .iter()
                    .map(|side| {
                        self.computed
                            .get(&format!("border-{}-{}", side, kind))
                            .map(String::as_str)
                    })
                    .collect();
                sides.map(collapse_sides)
            }
            "line-height" => {
                let value = self.computed.get(property)?;
                match Length::parse(value) {
                    Some(Length {
                        value: factor,
                        unit: Unit::Number,
                    }) => {
                        let font_size = self.computed.get("font-size").and_then(|v| parse_px(v))?;
                        Some(format_px(factor * font_size))
                    }
                    _ => Some(value.clone()),
                }
            }
            _ => self.computed.get(property).cloned(),
        }
    }
}

/// Print four side values the way a shorthand does
fn collapse_sides(sides: Vec<&str>) -> String {
    match sides.as_slice() {
        [top, right, bottom, left] if top == right && right == bottom && bottom == left => {
            top.to_string()
        }
        [top, right, bottom, left] if top == bottom && right == left => {
            format!("{} {}", top, right)
        }
        [top, right, bottom, left] if right == left => format!("{} {} {}", top, right, bottom),
        _ => sides.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(pairs: &[(&str, &str)]) -> ResolvedElement {
        let mut el = ResolvedElement::new("p");
        for (k, v) in pairs {
            el.computed.insert(k.to_string(), v.to_string());
        }
        el
    }

    #[test]
    fn test_border_width_collapses_sides() {
        let el = element(&[
            ("border-top-width", "0px"),
            ("border-right-width", "0px"),
            ("border-bottom-width", "0px"),
            ("border-left-width", "4px"),
        ]);
        assert_eq!(el.value("border-width").as_deref(), Some("0px 0px 0px 4px"));

        let uniform = element(&[
            ("border-top-style", "solid"),
            ("border-right-style", "solid"),
            ("border-bottom-style", "solid"),
            ("border-left-style", "solid"),
        ]);
        assert_eq!(uniform.value("border-style").as_deref(), Some("solid"));
        assert_eq!(uniform.value("border-color"), None);
    }

    #[test]
    fn test_unitless_line_height_reports_pixels() {
        let el = element(&[("font-size", "16px"), ("line-height", "1.8")]);
        assert_eq!(el.value("line-height").as_deref(), Some("28.8px"));

        let normal = element(&[("font-size", "16px"), ("line-height", "normal")]);
        assert_eq!(normal.value("line-height").as_deref(), Some("normal"));
    }
}
