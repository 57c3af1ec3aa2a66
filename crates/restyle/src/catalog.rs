//! Built-in template catalog
//!
//! Each template is authored as a table of tag to declarations and exposed as
//! a [`StyleProfile`] with one record per tag.

use once_cell::sync::Lazy;
use restyle_core::StyleProfile;

type StyleTable = &'static [(&'static str, &'static [(&'static str, &'static str)])];

const SYSTEM_SANS: &str = r#"-apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif"#;

/// A named template shipped with the crate
#[derive(Debug, Clone)]
pub struct BuiltinTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    profile: StyleProfile,
}

impl BuiltinTemplate {
    fn build(id: &'static str, name: &'static str, description: &'static str, styles: StyleTable) -> Self {
        let profile = StyleProfile::from_literal(styles.iter().map(|(tag, pairs)| (*tag, pairs.iter().copied())));
        Self {
            id,
            name,
            description,
            profile,
        }
    }

    /// The template's styles as a profile
    pub fn profile(&self) -> &StyleProfile {
        &self.profile
    }
}

static CATALOG: Lazy<Vec<BuiltinTemplate>> = Lazy::new(|| {
    vec![
        BuiltinTemplate::build("modern", "Modern", "Clean and elegant contemporary style", MODERN),
        BuiltinTemplate::build("classic", "Academic", "Professional academic paper layout", CLASSIC),
        BuiltinTemplate::build("tech", "Technical", "Professional technical documentation", TECH),
        BuiltinTemplate::build("blog", "Blog", "Light and lively blog style", BLOG),
        BuiltinTemplate::build("minimal", "Minimal", "Minimal style focused on content", MINIMAL),
    ]
});

/// Every built-in template, in presentation order
pub fn builtin_templates() -> &'static [BuiltinTemplate] {
    &CATALOG
}

/// Look up a built-in template by id
pub fn find(id: &str) -> Option<&'static BuiltinTemplate> {
    CATALOG.iter().find(|t| t.id == id)
}

const MODERN: StyleTable = &[
    (
        "h1",
        &[
            ("font-size", "2.5em"),
            ("color", "#2c3e50"),
            ("font-weight", "600"),
            ("margin-bottom", "1em"),
            ("line-height", "1.2"),
            ("letter-spacing", "-0.02em"),
        ],
    ),
    (
        "h2",
        &[
            ("font-size", "2em"),
            ("color", "#34495e"),
            ("font-weight", "500"),
            ("margin-top", "1.5em"),
            ("margin-bottom", "0.8em"),
            ("line-height", "1.3"),
        ],
    ),
    (
        "h3",
        &[
            ("font-size", "1.5em"),
            ("color", "#445566"),
            ("font-weight", "500"),
            ("margin-top", "1.2em"),
            ("margin-bottom", "0.6em"),
        ],
    ),
    (
        "h4",
        &[
            ("font-size", "1.25em"),
            ("color", "#556677"),
            ("font-weight", "500"),
            ("margin-top", "1em"),
            ("margin-bottom", "0.5em"),
        ],
    ),
    (
        "p",
        &[
            ("font-size", "1.1em"),
            ("line-height", "1.8"),
            ("color", "#3a4145"),
            ("margin-bottom", "1.2em"),
            ("letter-spacing", "0.01em"),
        ],
    ),
    (
        "ul",
        &[
            ("margin-left", "1.5em"),
            ("margin-bottom", "1.2em"),
            ("line-height", "1.6"),
            ("color", "#3a4145"),
        ],
    ),
    (
        "ol",
        &[
            ("margin-left", "1.5em"),
            ("margin-bottom", "1.2em"),
            ("line-height", "1.6"),
            ("color", "#3a4145"),
        ],
    ),
    ("li", &[("margin-bottom", "0.5em"), ("font-size", "1.1em")]),
    (
        "blockquote",
        &[
            ("border-left", "4px solid #3498db"),
            ("padding-left", "1.2em"),
            ("margin-left", "0"),
            ("margin-right", "0"),
            ("margin-bottom", "1.2em"),
            ("color", "#5a6a7a"),
            ("font-style", "italic"),
        ],
    ),
    (
        "code",
        &[
            ("background-color", "#f8f9fa"),
            ("padding", "0.2em 0.4em"),
            ("border-radius", "3px"),
            ("font-size", "0.9em"),
            ("color", "#e83e8c"),
            ("font-family", "monospace"),
        ],
    ),
    ("strong", &[("font-weight", "600"), ("color", "#2c3e50")]),
    ("em", &[("font-style", "italic"), ("color", "#34495e")]),
];

const CLASSIC: StyleTable = &[
    (
        "h1",
        &[
            ("font-size", "2em"),
            ("color", "#1a1a1a"),
            ("font-weight", "600"),
            ("font-family", SYSTEM_SANS),
            ("margin-bottom", "1em"),
            ("margin-top", "1.5em"),
            ("line-height", "1.3"),
            ("letter-spacing", "-0.02em"),
        ],
    ),
    (
        "h2",
        &[
            ("font-size", "1.5em"),
            ("color", "#2a2a2a"),
            ("font-weight", "600"),
            ("font-family", SYSTEM_SANS),
            ("margin-top", "2em"),
            ("margin-bottom", "1em"),
            ("line-height", "1.4"),
            ("letter-spacing", "-0.01em"),
            ("border-bottom", "1px solid #eaecef"),
            ("padding-bottom", "0.3em"),
        ],
    ),
    (
        "h3",
        &[
            ("font-size", "1.25em"),
            ("color", "#333"),
            ("font-weight", "600"),
            ("font-family", SYSTEM_SANS),
            ("margin-top", "1.5em"),
            ("margin-bottom", "0.8em"),
            ("line-height", "1.4"),
        ],
    ),
    (
        "p",
        &[
            ("font-size", "16px"),
            ("line-height", "1.8"),
            ("color", "#24292e"),
            ("margin-bottom", "1.2em"),
            ("font-family", SYSTEM_SANS),
            ("text-align", "justify"),
            ("hyphens", "auto"),
        ],
    ),
    (
        "blockquote",
        &[
            ("margin", "1.2em 0"),
            ("padding", "0.5em 1em"),
            ("border-left", "4px solid #dfe2e5"),
            ("background-color", "#f8f9fa"),
            ("color", "#454d5d"),
            ("font-size", "16px"),
            ("line-height", "1.7"),
            ("font-style", "normal"),
        ],
    ),
    (
        "ul",
        &[
            ("margin-bottom", "1.2em"),
            ("padding-left", "1.5em"),
            ("color", "#24292e"),
            ("line-height", "1.8"),
            ("list-style-type", "disc"),
        ],
    ),
    (
        "ol",
        &[
            ("margin-bottom", "1.2em"),
            ("padding-left", "1.5em"),
            ("color", "#24292e"),
            ("line-height", "1.8"),
        ],
    ),
    (
        "li",
        &[("margin-bottom", "0.4em"), ("font-size", "16px"), ("line-height", "1.8")],
    ),
    (
        "code",
        &[
            ("font-family", r#"SFMono-Regular, Consolas, "Liberation Mono", Menlo, monospace"#),
            ("background-color", "#f6f8fa"),
            ("padding", "0.2em 0.4em"),
            ("font-size", "85%"),
            ("border-radius", "3px"),
            ("color", "#24292e"),
        ],
    ),
    ("strong", &[("font-weight", "600"), ("color", "#24292e")]),
    ("em", &[("font-style", "italic"), ("color", "#24292e")]),
    (
        "a",
        &[
            ("color", "#0366d6"),
            ("text-decoration", "none"),
            ("border-bottom", "1px solid #0366d6"),
            ("padding-bottom", "1px"),
        ],
    ),
];

const TECH: StyleTable = &[
    (
        "h1",
        &[
            ("font-size", "2.2em"),
            ("color", "#0a192f"),
            ("font-weight", "700"),
            ("font-family", "system-ui, -apple-system, sans-serif"),
            ("margin-bottom", "1em"),
            ("padding-bottom", "0.3em"),
            ("border-bottom", "1px solid #eaecef"),
        ],
    ),
    (
        "h2",
        &[
            ("font-size", "1.8em"),
            ("color", "#1a365d"),
            ("font-weight", "600"),
            ("margin-top", "2em"),
            ("margin-bottom", "1em"),
            ("padding-bottom", "0.3em"),
            ("border-bottom", "1px solid #eaecef"),
        ],
    ),
    (
        "h3",
        &[
            ("font-size", "1.4em"),
            ("color", "#2d3748"),
            ("font-weight", "600"),
            ("margin-top", "1.5em"),
            ("margin-bottom", "0.8em"),
        ],
    ),
    (
        "p",
        &[
            ("font-size", "1em"),
            ("line-height", "1.7"),
            ("color", "#2d3748"),
            ("margin-bottom", "1em"),
            ("font-family", "system-ui, -apple-system, sans-serif"),
        ],
    ),
    (
        "code",
        &[
            ("background-color", "#f6f8fa"),
            ("padding", "0.2em 0.4em"),
            ("border-radius", "3px"),
            ("font-size", "0.9em"),
            ("font-family", "SFMono-Regular, Consolas, Menlo, monospace"),
            ("color", "#476582"),
        ],
    ),
    (
        "pre",
        &[
            ("background-color", "#f6f8fa"),
            ("padding", "1em"),
            ("border-radius", "6px"),
            ("overflow", "auto"),
            ("font-size", "0.9em"),
            ("line-height", "1.5"),
            ("border", "1px solid #eaecef"),
        ],
    ),
    (
        "blockquote",
        &[
            ("border-left", "4px solid #4299e1"),
            ("margin-left", "0"),
            ("padding-left", "1em"),
            ("color", "#4a5568"),
            ("background-color", "#ebf8ff"),
        ],
    ),
    (
        "ul",
        &[
            ("padding-left", "2em"),
            ("margin-bottom", "1em"),
            ("line-height", "1.7"),
            ("color", "#2d3748"),
        ],
    ),
    (
        "ol",
        &[
            ("padding-left", "2em"),
            ("margin-bottom", "1em"),
            ("line-height", "1.7"),
            ("color", "#2d3748"),
        ],
    ),
    ("li", &[("margin-bottom", "0.5em")]),
    ("strong", &[("font-weight", "600"), ("color", "#1a365d")]),
    ("em", &[("color", "#2d3748"), ("font-style", "italic")]),
];

const BLOG: StyleTable = &[
    (
        "h1",
        &[
            ("font-size", "2.6em"),
            ("color", "#ff6b6b"),
            ("font-weight", "700"),
            ("margin-bottom", "1em"),
            ("text-align", "center"),
            ("line-height", "1.2"),
            ("font-family", "'Segoe UI', system-ui, sans-serif"),
        ],
    ),
    (
        "h2",
        &[
            ("font-size", "2em"),
            ("color", "#20c997"),
            ("font-weight", "600"),
            ("margin-top", "1.8em"),
            ("margin-bottom", "0.8em"),
            ("line-height", "1.3"),
        ],
    ),
    (
        "h3",
        &[
            ("font-size", "1.5em"),
            ("color", "#339af0"),
            ("font-weight", "600"),
            ("margin-top", "1.5em"),
            ("margin-bottom", "0.6em"),
        ],
    ),
    (
        "p",
        &[
            ("font-size", "1.1em"),
            ("line-height", "1.8"),
            ("color", "#495057"),
            ("margin-bottom", "1.2em"),
            ("letter-spacing", "0.01em"),
        ],
    ),
    (
        "blockquote",
        &[
            ("border-left", "4px solid #ffd43b"),
            ("background-color", "#fff9db"),
            ("padding", "1em 1.2em"),
            ("margin-bottom", "1.5em"),
            ("border-radius", "0 4px 4px 0"),
            ("color", "#666"),
        ],
    ),
    (
        "ul",
        &[
            ("margin-left", "1.5em"),
            ("margin-bottom", "1.5em"),
            ("color", "#495057"),
            ("line-height", "1.7"),
        ],
    ),
    (
        "ol",
        &[
            ("margin-left", "1.5em"),
            ("margin-bottom", "1.5em"),
            ("color", "#495057"),
            ("line-height", "1.7"),
        ],
    ),
    ("li", &[("margin-bottom", "0.5em"), ("font-size", "1.1em")]),
    (
        "code",
        &[
            ("background-color", "#f8f9fa"),
            ("color", "#e64980"),
            ("padding", "0.2em 0.4em"),
            ("border-radius", "3px"),
            ("font-size", "0.9em"),
            ("font-family", "Consolas, monospace"),
        ],
    ),
    ("strong", &[("font-weight", "700"), ("color", "#ff6b6b")]),
    ("em", &[("font-style", "italic"), ("color", "#20c997")]),
];

const MINIMAL: StyleTable = &[
    (
        "h1",
        &[
            ("font-size", "2.4em"),
            ("color", "#000"),
            ("font-weight", "800"),
            ("margin-bottom", "1.5em"),
            ("letter-spacing", "-0.03em"),
            ("line-height", "1.2"),
        ],
    ),
    (
        "h2",
        &[
            ("font-size", "1.8em"),
            ("color", "#222"),
            ("font-weight", "700"),
            ("margin-top", "2em"),
            ("margin-bottom", "1em"),
            ("letter-spacing", "-0.02em"),
        ],
    ),
    (
        "h3",
        &[
            ("font-size", "1.4em"),
            ("color", "#333"),
            ("font-weight", "600"),
            ("margin-top", "1.5em"),
            ("margin-bottom", "0.8em"),
        ],
    ),
    (
        "p",
        &[
            ("font-size", "1.1em"),
            ("line-height", "1.8"),
            ("color", "#444"),
            ("margin-bottom", "1.5em"),
            ("letter-spacing", "0.01em"),
        ],
    ),
    (
        "blockquote",
        &[
            ("border-left", "2px solid #000"),
            ("padding-left", "1.5em"),
            ("margin-left", "0"),
            ("margin-right", "0"),
            ("margin-bottom", "1.5em"),
            ("font-style", "italic"),
            ("color", "#666"),
        ],
    ),
    (
        "ul",
        &[
            ("margin-left", "1.2em"),
            ("margin-bottom", "1.5em"),
            ("color", "#444"),
            ("line-height", "1.8"),
        ],
    ),
    (
        "ol",
        &[
            ("margin-left", "1.2em"),
            ("margin-bottom", "1.5em"),
            ("color", "#444"),
            ("line-height", "1.8"),
        ],
    ),
    ("li", &[("margin-bottom", "0.5em"), ("font-size", "1.1em")]),
    (
        "code",
        &[
            ("background-color", "#f5f5f5"),
            ("padding", "0.2em 0.4em"),
            ("border-radius", "2px"),
            ("font-size", "0.9em"),
            ("color", "#333"),
            ("font-family", "monospace"),
        ],
    ),
    ("strong", &[("font-weight", "700"), ("color", "#000")]),
    ("em", &[("font-style", "italic"), ("color", "#666")]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use restyle_core::properties::is_known_property;
    use restyle_core::{decompose_shorthand, is_shorthand};

    #[test]
    fn test_catalog_ids() {
        let ids: Vec<&str> = builtin_templates().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["modern", "classic", "tech", "blog", "minimal"]);
        assert!(find("tech").is_some());
        assert!(find("brutalist").is_none());
    }

    #[test]
    fn test_one_record_per_tag() {
        for template in builtin_templates() {
            for (tag, records) in template.profile().iter() {
                assert_eq!(records.len(), 1, "{}: {}", template.id, tag);
            }
        }
    }

    #[test]
    fn test_every_declaration_applies_cleanly() {
        for template in builtin_templates() {
            for (tag, records) in template.profile().iter() {
                for (property, value) in &records[0].styles {
                    assert!(is_known_property(property), "{}: {} {}", template.id, tag, property);
                    if is_shorthand(property) {
                        assert!(decompose_shorthand(property, value).is_ok(), "{}: {} {}", template.id, tag, property);
                    }
                }
            }
        }
    }

    #[test]
    fn test_modern_blockquote() {
        let modern = find("modern").unwrap();
        let quote = modern.profile().record_for("blockquote", 3).unwrap();
        assert_eq!(quote.style("border-left"), Some("4px solid #3498db"));
        assert_eq!(quote.style("font-style"), Some("italic"));
    }
}
