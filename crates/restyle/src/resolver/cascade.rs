//! A browser-free resolver: user-agent defaults, author rules and inline
//! styles cascaded per element, then computed against the parent.

use std::collections::HashMap;

use indexmap::IndexMap;
use restyle_core::values::{format_number, format_px, normalize_color, parse_px, Length, Unit};
use restyle_core::{expand_longhands, parse_declarations, BOX_SIDES};
use scraper::{ElementRef, Html, Selector};

use super::defaults::{initial_value, is_inherited, user_agent_declarations, TRACKED_PROPERTIES};
use super::stylesheet::Stylesheet;
use super::{ResolveError, ResolvedElement, ResolverOptions, StyleResolver};

type ComputedStyle = IndexMap<String, String>;

/// Cascade levels, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Level {
    UserAgent,
    Author,
    Inline,
    AuthorImportant,
    InlineImportant,
}

/// Resolves template styles by running a CSS cascade over the markup itself
#[derive(Debug, Clone, Copy, Default)]
pub struct CascadeResolver;

impl CascadeResolver {
    pub fn new() -> Self {
        Self
    }
}

impl StyleResolver for CascadeResolver {
    fn resolve(
        &self,
        markup: &str,
        options: &ResolverOptions,
    ) -> Result<Vec<ResolvedElement>, ResolveError> {
        let document = if looks_like_document(markup) {
            Html::parse_document(markup)
        } else {
            Html::parse_fragment(markup)
        };

        let sheet = collect_stylesheet(&document)?;
        let root_style = root_style(options);

        // Preorder guarantees a parent is computed before its children.
        let mut computed: HashMap<_, ComputedStyle> = HashMap::new();
        let mut elements = Vec::new();

        for node in document.root_element().descendants() {
            let Some(element) = ElementRef::wrap(node) else {
                continue;
            };

            let parent_style = element
                .parent()
                .and_then(|parent| computed.get(&parent.id()))
                .unwrap_or(&root_style);
            let style = compute_style(&element, parent_style, &sheet, options);

            elements.push(ResolvedElement {
                tag: element.value().name().to_lowercase(),
                class_names: element.value().classes().map(str::to_string).collect(),
                inline_style: element.value().attr("style").unwrap_or("").to_string(),
                computed: style.clone(),
            });
            computed.insert(element.id(), style);
        }

        tracing::debug!(
            elements = elements.len(),
            rules = sheet.len(),
            "Resolved template styles"
        );
        Ok(elements)
    }
}

fn looks_like_document(markup: &str) -> bool {
    let trimmed = markup.trim_start();
    let head = trimmed.get(..64).unwrap_or(trimmed).to_ascii_lowercase();
    head.starts_with("<!doctype") || head.starts_with("<html")
}

fn collect_stylesheet(document: &Html) -> Result<Stylesheet, ResolveError> {
    let selector =
        Selector::parse("style").map_err(|err| ResolveError::Failed(format!("{:?}", err)))?;

    let mut sheet = Stylesheet::default();
    for style in document.select(&selector) {
        sheet.add_source(&style.text().collect::<String>());
    }
    Ok(sheet)
}

/// Computed style the top element inherits from
fn root_style(options: &ResolverOptions) -> ComputedStyle {
    let mut style: ComputedStyle = TRACKED_PROPERTIES
        .iter()
        .filter_map(|p| Some((p.to_string(), initial_value(p)?.to_string())))
        .collect();
    style.insert("font-size".into(), format_px(options.root_font_size_px));
    style
}

/// Shared inputs of value computation for one element
struct Context<'a> {
    parent: &'a ComputedStyle,
    options: &'a ResolverOptions,
    parent_font_size: f32,
    font_size: f32,
}

fn compute_style(
    element: &ElementRef,
    parent: &ComputedStyle,
    sheet: &Stylesheet,
    options: &ResolverOptions,
) -> ComputedStyle {
    let specified = cascade(element, sheet);

    // Inherited properties start from the parent, the rest from their initial value.
    let mut style: ComputedStyle = parent
        .iter()
        .filter(|(p, _)| is_inherited(p))
        .map(|(p, v)| (p.clone(), v.clone()))
        .collect();
    for property in TRACKED_PROPERTIES {
        if !is_inherited(property) {
            if let Some(value) = initial_value(property) {
                style.insert(property.to_string(), value.to_string());
            }
        }
    }

    let parent_font_size = parent
        .get("font-size")
        .and_then(|v| parse_px(v))
        .unwrap_or(options.root_font_size_px);
    let mut ctx = Context {
        parent,
        options,
        parent_font_size,
        font_size: parent_font_size,
    };

    // font-size first: em lengths of every other property depend on it.
    if let Some(value) = specified.get("font-size") {
        let font_size = compute_font_size(value, &ctx);
        ctx.font_size = font_size;
        style.insert("font-size".into(), format_px(font_size));
    }

    for (property, value) in &specified {
        if property == "font-size" {
            continue;
        }
        if let Some(computed) = compute_value(property, value, &ctx) {
            style.insert(property.clone(), computed);
        }
    }

    finish_borders(&mut style);
    style
}

/// Specified longhand values of an element, cascade order applied
fn cascade(element: &ElementRef, sheet: &Stylesheet) -> IndexMap<String, String> {
    let mut candidates: Vec<(Level, u32, usize, String, String)> = Vec::new();

    for (property, value) in user_agent_declarations(element.value().name()) {
        candidates.push((Level::UserAgent, 0, 0, property.to_string(), value.to_string()));
    }

    for rule in sheet.matching(element) {
        for decl in &rule.declarations {
            let level = if decl.important {
                Level::AuthorImportant
            } else {
                Level::Author
            };
            candidates.push((level, rule.specificity, rule.order, decl.property.clone(), decl.value.clone()));
        }
    }

    if let Some(inline) = element.value().attr("style") {
        for decl in parse_declarations(inline) {
            let level = if decl.important {
                Level::InlineImportant
            } else {
                Level::Inline
            };
            candidates.push((level, 0, 0, decl.property, decl.value));
        }
    }

    // Stable sort keeps declaration order within one rule.
    candidates.sort_by_key(|(level, specificity, order, _, _)| (*level, *specificity, *order));

    let mut specified = IndexMap::new();
    for (_, _, _, property, value) in candidates {
        match expand_longhands(&property, &value) {
            Ok(longhands) => {
                for (longhand, v) in longhands {
                    specified.insert(longhand, v);
                }
            }
            Err(err) => {
                tracing::warn!(tag = element.value().name(), error = %err, "Ignoring template declaration");
            }
        }
    }
    specified
}

fn compute_font_size(value: &str, ctx: &Context) -> f32 {
    let parent = ctx.parent_font_size;
    let root = ctx.options.root_font_size_px;
    match value.trim().to_ascii_lowercase().as_str() {
        "inherit" => parent,
        "initial" | "medium" => root,
        "xx-small" => root * 9.0 / 16.0,
        "x-small" => root * 10.0 / 16.0,
        "small" => root * 13.0 / 16.0,
        "large" => root * 18.0 / 16.0,
        "x-large" => root * 1.5,
        "xx-large" => root * 2.0,
        "smaller" => parent / 1.2,
        "larger" => parent * 1.2,
        other => Length::parse(other)
            .and_then(|l| l.to_px(parent, root, parent))
            .unwrap_or(parent),
    }
}

fn compute_value(property: &str, value: &str, ctx: &Context) -> Option<String> {
    let value = value.trim();
    match value.to_ascii_lowercase().as_str() {
        "inherit" => {
            return ctx
                .parent
                .get(property)
                .cloned()
                .or_else(|| initial_value(property).map(str::to_string))
        }
        "initial" => return initial_value(property).map(str::to_string),
        _ => {}
    }

    let computed = match property {
        "color" | "background-color" | "text-decoration-color" => {
            normalize_color(value).unwrap_or_else(|| value.to_ascii_lowercase())
        }
        p if p.starts_with("border-") && p.ends_with("-color") => {
            normalize_color(value).unwrap_or_else(|| value.to_ascii_lowercase())
        }
        p if p.starts_with("border-") && p.ends_with("-width") => match value {
            "thin" => "1px".to_string(),
            "medium" => "3px".to_string(),
            "thick" => "5px".to_string(),
            other => length_px(other, ctx, 0.0),
        },
        "font-weight" => compute_font_weight(value, ctx.parent),
        "line-height" => match Length::parse(value) {
            Some(Length {
                value: factor,
                unit: Unit::Number,
            }) => format_number(factor),
            Some(length) => length
                .to_px(ctx.font_size, ctx.options.root_font_size_px, ctx.font_size)
                .map(format_px)
                .unwrap_or_else(|| value.to_string()),
            None => value.to_ascii_lowercase(),
        },
        "border-radius" => value
            .split_whitespace()
            .map(|token| length_px(token, ctx, 0.0))
            .collect::<Vec<_>>()
            .join(" "),
        p if p.starts_with("margin-") || p.starts_with("padding-") || p == "text-indent" => {
            length_px(value, ctx, ctx.options.reference_width_px)
        }
        "letter-spacing" | "word-spacing" => length_px(value, ctx, 0.0),
        _ => value.to_string(),
    };
    Some(computed)
}

/// Resolve a length to pixels, leaving keywords such as `auto` untouched
fn length_px(value: &str, ctx: &Context, percent_base: f32) -> String {
    Length::parse(value)
        .and_then(|l| l.to_px(ctx.font_size, ctx.options.root_font_size_px, percent_base))
        .map(format_px)
        .unwrap_or_else(|| value.to_ascii_lowercase())
}

fn compute_font_weight(value: &str, parent: &ComputedStyle) -> String {
    let parent_weight: u32 = parent
        .get("font-weight")
        .and_then(|w| w.parse().ok())
        .unwrap_or(400);

    let weight = match value.to_ascii_lowercase().as_str() {
        "normal" => 400,
        "bold" => 700,
        "bolder" => match parent_weight {
            0..=349 => 400,
            350..=549 => 700,
            _ => 900,
        },
        "lighter" => match parent_weight {
            0..=549 => 100,
            550..=749 => 400,
            _ => 700,
        },
        other => match other.parse::<u32>() {
            Ok(w) if (1..=1000).contains(&w) => w,
            _ => return other.to_string(),
        },
    };
    weight.to_string()
}

/// A side without a visible style has no width; `currentcolor` takes the
/// element's color.
fn finish_borders(style: &mut ComputedStyle) {
    let color = style
        .get("color")
        .cloned()
        .unwrap_or_else(|| "rgb(0, 0, 0)".to_string());

    for side in BOX_SIDES {
        let border_style = style
            .get(&format!("border-{}-style", side))
            .map(String::as_str)
            .unwrap_or("none");
        if matches!(border_style, "none" | "hidden") {
            style.insert(format!("border-{}-width", side), "0px".to_string());
        }

        let color_key = format!("border-{}-color", side);
        if style.get(&color_key).map(String::as_str) == Some("currentcolor") {
            style.insert(color_key, color.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve(markup: &str) -> Vec<ResolvedElement> {
        CascadeResolver::new()
            .resolve(markup, &ResolverOptions::default())
            .unwrap()
    }

    fn first<'a>(elements: &'a [ResolvedElement], tag: &str) -> &'a ResolvedElement {
        elements.iter().find(|e| e.tag == tag).unwrap()
    }

    #[test]
    fn test_user_agent_heading() {
        let elements = resolve("<h1>Title</h1>");
        let h1 = first(&elements, "h1");

        assert_eq!(h1.value("font-size").as_deref(), Some("32px"));
        assert_eq!(h1.value("font-weight").as_deref(), Some("700"));
        assert_eq!(h1.value("margin-top").as_deref(), Some("21.44px"));
        assert_eq!(h1.value("margin-left").as_deref(), Some("0px"));
        assert_eq!(h1.value("color").as_deref(), Some("rgb(0, 0, 0)"));
        assert_eq!(h1.value("background-color").as_deref(), Some("rgba(0, 0, 0, 0)"));
        assert_eq!(h1.value("display").as_deref(), Some("block"));
    }

    #[test]
    fn test_author_rules_and_inline_cascade() {
        let elements = resolve(
            r#"<style>
                p { color: #333; font-size: 18px }
                p.lead { color: #2c3e50 }
                .quiet { color: gray !important }
            </style>
            <p class="lead" style="color: red">a</p>
            <p class="lead quiet" style="color: red">b</p>
            <p>c</p>"#,
        );
        let paragraphs: Vec<&ResolvedElement> = elements.iter().filter(|e| e.tag == "p").collect();

        assert_eq!(paragraphs[0].value("color").as_deref(), Some("rgb(255, 0, 0)"));
        assert_eq!(paragraphs[1].value("color").as_deref(), Some("rgb(128, 128, 128)"));
        assert_eq!(paragraphs[2].value("color").as_deref(), Some("rgb(51, 51, 51)"));
        assert_eq!(paragraphs[2].value("font-size").as_deref(), Some("18px"));
        assert_eq!(paragraphs[0].class_names, vec!["lead"]);
        assert_eq!(paragraphs[0].inline_style, "color: red");
    }

    #[test]
    fn test_inheritance_and_relative_units() {
        let elements = resolve(
            r#"<style>
                blockquote { font-size: 20px; color: #5a6a7a; line-height: 1.5 }
                blockquote p { margin: 0.5em 10% }
            </style>
            <blockquote><p>quoted <em>words</em></p></blockquote>"#,
        );
        let p = first(&elements, "p");
        let em = first(&elements, "em");

        assert_eq!(p.value("color").as_deref(), Some("rgb(90, 106, 122)"));
        assert_eq!(p.value("font-size").as_deref(), Some("20px"));
        assert_eq!(p.value("line-height").as_deref(), Some("30px"));
        assert_eq!(p.value("margin-top").as_deref(), Some("10px"));
        assert_eq!(p.value("margin-left").as_deref(), Some("80px"));
        assert_eq!(p.value("background-color").as_deref(), Some("rgba(0, 0, 0, 0)"));
        assert_eq!(em.value("margin-top").as_deref(), Some("0px"));
    }

    #[test]
    fn test_border_shorthand_resolution() {
        let elements = resolve(
            r#"<blockquote style="border-left: 4px solid #3498db; color: #222">q</blockquote>
               <p style="border: thin dashed">p</p>"#,
        );
        let quote = first(&elements, "blockquote");
        assert_eq!(quote.value("border-width").as_deref(), Some("0px 0px 0px 4px"));
        assert_eq!(quote.value("border-style").as_deref(), Some("none none none solid"));
        assert_eq!(
            quote.value("border-left-color").as_deref(),
            Some("rgb(52, 152, 219)")
        );
        assert_eq!(quote.value("border-top-color").as_deref(), Some("rgb(34, 34, 34)"));

        let p = first(&elements, "p");
        assert_eq!(p.value("border-width").as_deref(), Some("1px"));
        assert_eq!(p.value("border-style").as_deref(), Some("dashed"));
        assert_eq!(p.value("border-color").as_deref(), Some("rgb(0, 0, 0)"));
    }

    #[test]
    fn test_font_weight_keywords() {
        let elements = resolve(
            r#"<style>h2 strong { font-weight: bolder } p { font-weight: lighter }</style>
               <h2>a <strong>b</strong></h2><p>c</p>"#,
        );
        assert_eq!(first(&elements, "strong").value("font-weight").as_deref(), Some("900"));
        assert_eq!(first(&elements, "p").value("font-weight").as_deref(), Some("100"));
    }

    #[test]
    fn test_full_document_template() {
        let elements = resolve(
            "<!DOCTYPE html><html><head><style>h2 { color: #20c997 }</style></head><body><h2>x</h2></body></html>",
        );
        let h2 = first(&elements, "h2");
        assert_eq!(h2.value("color").as_deref(), Some("rgb(32, 201, 151)"));
        assert_eq!(h2.value("font-size").as_deref(), Some("24px"));
    }

    #[test]
    fn test_background_font_and_list_style_shorthands() {
        let elements = resolve(
            r#"<style>
                code { background: #f4f4f4 }
                ul { list-style: square }
                p { font: italic bold 20px/1.5 Georgia, serif }
            </style>
            <p>a <code>b</code></p><ul><li>c</li></ul>"#,
        );
        let code = first(&elements, "code");
        assert_eq!(code.value("background-color").as_deref(), Some("rgb(244, 244, 244)"));

        let ul = first(&elements, "ul");
        assert_eq!(ul.value("list-style-type").as_deref(), Some("square"));
        assert_eq!(first(&elements, "li").value("list-style-type").as_deref(), Some("square"));

        let p = first(&elements, "p");
        assert_eq!(p.value("font-size").as_deref(), Some("20px"));
        assert_eq!(p.value("font-family").as_deref(), Some("Georgia, serif"));
        assert_eq!(p.value("font-style").as_deref(), Some("italic"));
        assert_eq!(p.value("font-weight").as_deref(), Some("700"));
        assert_eq!(p.value("line-height").as_deref(), Some("30px"));
    }
}
