//! Style application engine
//!
//! Application runs two passes over a content tree:
//!
//! 1. **Explicit pass** - every element whose tag the profile knows is
//!    matched to a record by ordinal, falling back to the first record, and
//!    the record's properties and classes are written onto it.
//! 2. **Inheritance pass** - top-down, each element that lacks a value for an
//!    inheritable property takes its parent's effective value.
//!
//! The second pass only starts once the first has covered the whole tree, so
//! inherited values compound correctly across depth.

use std::rc::Rc;

use indexmap::IndexMap;
use restyle_core::properties::{is_color_property, is_known_property, to_kebab_case};
use restyle_core::{decompose_shorthand, InheritedSet, PropertyError, StyleProfile, StyleRecord};

use crate::node::ContentNode;

/// Options for the application engine
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// Properties propagated by the inheritance pass
    pub inherited: InheritedSet,
}

impl ApplyOptions {
    /// For profiles measured from template markup
    pub fn extracted() -> Self {
        Self {
            inherited: InheritedSet::baseline(),
        }
    }

    /// For profiles from the built-in catalog
    pub fn catalog() -> Self {
        Self {
            inherited: InheritedSet::extended(),
        }
    }
}

/// What one application did to a tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Elements that received a record
    pub matched: usize,
    /// Style values written by the explicit pass
    pub written: usize,
    /// Style values filled in by the inheritance pass
    pub inherited: usize,
    /// Writes skipped, in the order they were met
    pub skipped: Vec<PropertyError>,
}

/// Applies a [`StyleProfile`] to content trees
#[derive(Debug, Clone, Default)]
pub struct ApplyEngine {
    options: ApplyOptions,
}

impl ApplyEngine {
    pub fn new(options: ApplyOptions) -> Self {
        Self { options }
    }

    /// Engine for profiles measured from template markup
    pub fn extracted() -> Self {
        Self::new(ApplyOptions::extracted())
    }

    /// Engine for profiles from the built-in catalog
    pub fn catalog() -> Self {
        Self::new(ApplyOptions::catalog())
    }

    pub fn options(&self) -> &ApplyOptions {
        &self.options
    }

    /// Style the tree in place and serialize it.
    ///
    /// An absent or empty profile leaves the tree untouched.
    pub fn apply(&self, profile: Option<&StyleProfile>, tree: &mut ContentNode) -> String {
        match profile {
            Some(profile) if !profile.is_empty() => {
                let report = self.apply_styles(profile, tree);
                tracing::debug!(
                    matched = report.matched,
                    written = report.written,
                    inherited = report.inherited,
                    skipped = report.skipped.len(),
                    "Applied style profile"
                );
            }
            _ => tracing::debug!("No style profile, rendering unstyled"),
        }
        tree.inner_html()
    }

    /// Run both passes without serializing.
    ///
    /// Ordinals are reassigned first, so hand-built trees match records by
    /// position too.
    pub fn apply_styles(&self, profile: &StyleProfile, tree: &mut ContentNode) -> ApplyReport {
        tree.assign_ordinals();
        let mut report = ApplyReport::default();
        explicit_pass(profile, tree, &mut report);
        inheritance_pass(&self.options.inherited, tree, &mut report);
        report
    }
}

fn explicit_pass(profile: &StyleProfile, tree: &mut ContentNode, report: &mut ApplyReport) {
    let mut stack: Vec<&mut ContentNode> = vec![tree];

    while let Some(node) = stack.pop() {
        if node.is_element() {
            if let Some(record) = profile.record_for(&node.tag, node.ordinal) {
                tracing::trace!(tag = %node.tag, ordinal = node.ordinal, record = record.ordinal, "Matched");
                write_record(node, record, report);
                report.matched += 1;
            }
        }
        stack.extend(node.children.iter_mut().rev());
    }
}

/// Write a record's properties and classes onto one element
fn write_record(node: &mut ContentNode, record: &StyleRecord, report: &mut ApplyReport) {
    for (name, value) in &record.styles {
        let property = to_kebab_case(name);

        if !is_known_property(&property) {
            tracing::warn!(tag = %node.tag, property = %property, "Skipping unknown style property");
            report.skipped.push(PropertyError::UnknownProperty { property });
            continue;
        }

        if !is_color_property(&property) && value.trim().is_empty() {
            continue;
        }

        match decompose_shorthand(&property, value) {
            Ok(longhands) => {
                for (longhand, v) in longhands {
                    node.style.insert(longhand, v);
                    report.written += 1;
                }
            }
            Err(err) => {
                tracing::warn!(tag = %node.tag, error = %err, "Skipping malformed style shorthand");
                report.skipped.push(err);
            }
        }
    }

    node.classes.extend(record.class_names.iter().cloned());
}

/// Effective inheritable values handed from a parent to its children
type Inherited = Rc<IndexMap<String, String>>;

fn inheritance_pass(inherited: &InheritedSet, tree: &mut ContentNode, report: &mut ApplyReport) {
    if inherited.is_empty() {
        return;
    }

    let mut stack: Vec<(&mut ContentNode, Inherited)> = vec![(tree, Rc::default())];

    while let Some((node, from_parent)) = stack.pop() {
        let passed_down = if node.is_element() {
            for (property, value) in from_parent.iter() {
                if node.effective_style(property).is_none() {
                    node.style.insert(property.clone(), value.clone());
                    report.inherited += 1;
                }
            }

            let effective: IndexMap<String, String> = inherited
                .iter()
                .filter_map(|p| Some((p.to_string(), node.effective_style(p)?.to_string())))
                .collect();
            Rc::new(effective)
        } else {
            from_parent
        };

        for child in node.children.iter_mut().rev() {
            if child.is_element() {
                stack.push((child, Rc::clone(&passed_down)));
            }
        }
    }
}

/// Apply a profile with the baseline inherited set and serialize the tree
pub fn apply(profile: Option<&StyleProfile>, tree: &mut ContentNode) -> String {
    ApplyEngine::extracted().apply(profile, tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::parse_html;
    use pretty_assertions::assert_eq;

    fn profile(tags: &[(&str, &[(&str, &str)])]) -> StyleProfile {
        StyleProfile::from_literal(tags.iter().map(|(tag, pairs)| (*tag, pairs.iter().copied())))
    }

    #[test]
    fn test_absent_or_empty_profile_returns_content_unchanged() {
        let html = "<h1>Title</h1><p>Body</p>";

        let mut tree = parse_html(html);
        assert_eq!(apply(None, &mut tree), html);

        let mut empty = StyleProfile::new();
        empty.insert("p", Vec::new());
        let mut tree = parse_html(html);
        assert_eq!(apply(Some(&empty), &mut tree), html);
    }

    #[test]
    fn test_tag_without_records_keeps_styles() {
        let mut p = StyleProfile::new();
        p.insert("p", Vec::new());
        p.push("h1", StyleRecord::new().with_style("font-size", "2em"));

        let mut tree = parse_html(r#"<h1>T</h1><p style="margin-top: 3px">x</p>"#);
        ApplyEngine::extracted().apply_styles(&p, &mut tree);

        let para = tree.nodes_by_tag("p")[0];
        assert_eq!(para.style.len(), 1);
        assert_eq!(para.effective_style("margin-top"), Some("3px"));
    }

    #[test]
    fn test_positional_match_then_fallback_to_first() {
        let mut p = StyleProfile::new();
        p.push("h2", StyleRecord::new().with_style("color", "red"));
        p.push("h2", StyleRecord::new().with_style("color", "blue").with_class("second"));

        let mut tree = parse_html("<h2>a</h2><h2>b</h2><h2>c</h2><h2>d</h2>");
        let report = ApplyEngine::extracted().apply_styles(&p, &mut tree);

        let colors: Vec<&str> = tree
            .nodes_by_tag("h2")
            .iter()
            .map(|n| n.effective_style("color").unwrap())
            .collect();
        assert_eq!(colors, vec!["red", "blue", "red", "red"]);
        assert!(tree.nodes_by_tag("h2")[1].classes.contains("second"));
        assert_eq!(report.matched, 4);
    }

    #[test]
    fn test_colors_written_even_when_empty() {
        let p = profile(&[("p", &[("color", ""), ("margin-top", "  "), ("backgroundColor", "rgba(0, 0, 0, 0)")])]);
        let mut tree = parse_html("<p>x</p>");
        ApplyEngine::extracted().apply_styles(&p, &mut tree);

        let para = tree.nodes_by_tag("p")[0];
        assert!(para.style.contains_key("color"));
        assert!(!para.style.contains_key("margin-top"));
        assert_eq!(para.effective_style("background-color"), Some("rgba(0, 0, 0, 0)"));
    }

    #[test]
    fn test_border_left_shorthand_decomposes() {
        let p = profile(&[("blockquote", &[("borderLeft", "4px solid #3498db")])]);
        let mut tree = parse_html("<blockquote><p>a</p></blockquote><blockquote><p>b</p></blockquote>");
        ApplyEngine::catalog().apply_styles(&p, &mut tree);

        for quote in tree.nodes_by_tag("blockquote") {
            assert_eq!(quote.effective_style("border-left-width"), Some("4px"));
            assert_eq!(quote.effective_style("border-left-style"), Some("solid"));
            assert_eq!(quote.effective_style("border-left-color"), Some("#3498db"));
            assert!(!quote.style.contains_key("border-left"));
        }
    }

    #[test]
    fn test_measured_border_groups_spread_over_sides() {
        let p = profile(&[(
            "blockquote",
            &[("border-width", "0px 0px 0px 4px"), ("border-style", "none none none solid")],
        )]);
        let mut tree = parse_html("<blockquote>q</blockquote>");
        ApplyEngine::extracted().apply_styles(&p, &mut tree);

        let quote = tree.nodes_by_tag("blockquote")[0];
        assert_eq!(quote.effective_style("border-left-width"), Some("4px"));
        assert_eq!(quote.effective_style("border-top-style"), Some("none"));
        assert!(!quote.style.contains_key("border-width"));
    }

    #[test]
    fn test_bad_writes_are_skipped_individually() {
        let p = profile(&[(
            "blockquote",
            &[("borderLeft", "4px wavy"), ("colour", "red"), ("color", "#666"), ("margin", "1.2em 0")],
        )]);
        let mut tree = parse_html("<blockquote>q</blockquote>");
        let report = ApplyEngine::catalog().apply_styles(&p, &mut tree);

        let quote = tree.nodes_by_tag("blockquote")[0];
        assert_eq!(quote.effective_style("color"), Some("#666"));
        assert_eq!(quote.effective_style("margin-top"), Some("1.2em"));
        assert_eq!(quote.effective_style("margin-left"), Some("0"));
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].property(), "border-left");
        assert_eq!(report.skipped[1].property(), "colour");
    }

    #[test]
    fn test_inheritance_compounds_across_depth() {
        let p = profile(&[
            ("blockquote", &[("color", "#5a6a7a"), ("font-size", "18px")]),
            ("p", &[("line-height", "1.8")]),
            ("strong", &[("font-size", "20px")]),
        ]);
        let mut tree = parse_html("<blockquote><p>a <em>b <strong>c <code>d</code></strong></em></p></blockquote>");
        ApplyEngine::extracted().apply_styles(&p, &mut tree);

        let em = tree.nodes_by_tag("em")[0];
        assert_eq!(em.effective_style("color"), Some("#5a6a7a"));
        assert_eq!(em.effective_style("font-size"), Some("18px"));
        assert_eq!(em.effective_style("line-height"), Some("1.8"));

        let code = tree.nodes_by_tag("code")[0];
        assert_eq!(code.effective_style("font-size"), Some("20px"));
        assert_eq!(code.effective_style("color"), Some("#5a6a7a"));
        assert_eq!(code.effective_style("font-family"), None);
    }

    #[test]
    fn test_inherited_sets_differ() {
        let p = profile(&[("blockquote", &[("text-align", "center"), ("color", "#222")])]);

        let mut baseline = parse_html("<blockquote><p>a</p></blockquote>");
        ApplyEngine::extracted().apply_styles(&p, &mut baseline);
        assert_eq!(baseline.nodes_by_tag("p")[0].effective_style("text-align"), None);

        let mut extended = parse_html("<blockquote><p>a</p></blockquote>");
        ApplyEngine::catalog().apply_styles(&p, &mut extended);
        assert_eq!(extended.nodes_by_tag("p")[0].effective_style("text-align"), Some("center"));
    }

    #[test]
    fn test_apply_twice_is_idempotent() {
        let p = profile(&[
            ("h1", &[("color", "#2c3e50"), ("font-size", "2.5em")]),
            ("blockquote", &[("borderLeft", "4px solid #3498db"), ("color", "#5a6a7a")]),
            ("p", &[("line-height", "1.8")]),
        ]);
        let html = "<h1>T</h1><blockquote><p>q <em>e</em></p></blockquote><p>x</p>";
        let engine = ApplyEngine::catalog();

        let mut once = parse_html(html);
        let first = engine.apply(Some(&p), &mut once);

        let mut twice = parse_html(html);
        engine.apply(Some(&p), &mut twice);
        let second = engine.apply(Some(&p), &mut twice);

        assert_eq!(first, second);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_profile_is_not_mutated() {
        let p = profile(&[("p", &[("color", "red")])]);
        let before = p.clone();
        let mut tree = parse_html("<p>x</p>");
        apply(Some(&p), &mut tree);
        assert_eq!(p, before);
    }

    #[test]
    fn test_hand_built_tree_matches_by_position() {
        let mut p = StyleProfile::new();
        p.push("h2", StyleRecord::new().with_style("color", "red"));
        p.push("h2", StyleRecord::new().with_style("color", "blue"));

        let mut tree = ContentNode::fragment()
            .with_child(ContentNode::element("h2").with_child(ContentNode::text("a")))
            .with_child(ContentNode::element("h2").with_child(ContentNode::text("b")));
        let html = ApplyEngine::extracted().apply(Some(&p), &mut tree);

        assert_eq!(
            html,
            r#"<h2 style="color: red">a</h2><h2 style="color: blue">b</h2>"#
        );
    }
}
