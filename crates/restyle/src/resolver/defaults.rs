//! User-agent defaults, initial values and CSS inheritance.

/// Properties every computed style carries, as longhands
pub(crate) const TRACKED_PROPERTIES: &[&str] = &[
    "color",
    "background-color",
    "font-size",
    "line-height",
    "font-weight",
    "font-family",
    "font-style",
    "text-align",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "border-radius",
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
    "text-decoration",
    "letter-spacing",
    "text-indent",
    "list-style-type",
    "display",
];

/// Properties CSS passes from parent to child
const INHERITED_PROPERTIES: &[&str] = &[
    "color",
    "font-size",
    "font-family",
    "font-weight",
    "font-style",
    "font-variant",
    "line-height",
    "text-align",
    "text-indent",
    "text-transform",
    "letter-spacing",
    "word-spacing",
    "white-space",
    "list-style-type",
    "list-style-position",
    "hyphens",
];

pub(crate) fn is_inherited(property: &str) -> bool {
    INHERITED_PROPERTIES.contains(&property)
}

/// Initial value of a tracked property. Lengths are already in pixels.
pub(crate) fn initial_value(property: &str) -> Option<&'static str> {
    let value = match property {
        "color" => "rgb(0, 0, 0)",
        "background-color" => "rgba(0, 0, 0, 0)",
        "font-size" => "16px",
        "font-weight" => "400",
        "font-family" => "serif",
        "font-style" | "line-height" | "letter-spacing" => "normal",
        "text-align" => "start",
        "text-indent" | "word-spacing" | "border-radius" => "0px",
        "text-decoration" => "none",
        "list-style-type" => "disc",
        "display" => "inline",
        p if p.starts_with("margin-") || p.starts_with("padding-") => "0px",
        p if p.starts_with("border-") && p.ends_with("-width") => "3px",
        p if p.starts_with("border-") && p.ends_with("-style") => "none",
        p if p.starts_with("border-") && p.ends_with("-color") => "currentcolor",
        _ => return None,
    };
    Some(value)
}

/// Default style sheet of a browser, reduced to the elements templates use
pub(crate) fn user_agent_declarations(tag: &str) -> &'static [(&'static str, &'static str)] {
    match tag {
        "p" => &[("display", "block"), ("margin", "1em 0")],
        "h1" => &[
            ("display", "block"),
            ("font-size", "2em"),
            ("font-weight", "bold"),
            ("margin", "0.67em 0"),
        ],
        "h2" => &[
            ("display", "block"),
            ("font-size", "1.5em"),
            ("font-weight", "bold"),
            ("margin", "0.83em 0"),
        ],
        "h3" => &[
            ("display", "block"),
            ("font-size", "1.17em"),
            ("font-weight", "bold"),
            ("margin", "1em 0"),
        ],
        "h4" => &[
            ("display", "block"),
            ("font-weight", "bold"),
            ("margin", "1.33em 0"),
        ],
        "h5" => &[
            ("display", "block"),
            ("font-size", "0.83em"),
            ("font-weight", "bold"),
            ("margin", "1.67em 0"),
        ],
        "h6" => &[
            ("display", "block"),
            ("font-size", "0.67em"),
            ("font-weight", "bold"),
            ("margin", "2.33em 0"),
        ],
        "ul" | "menu" => &[
            ("display", "block"),
            ("list-style-type", "disc"),
            ("margin", "1em 0"),
            ("padding-left", "40px"),
        ],
        "ol" => &[
            ("display", "block"),
            ("list-style-type", "decimal"),
            ("margin", "1em 0"),
            ("padding-left", "40px"),
        ],
        "li" => &[("display", "list-item")],
        "blockquote" => &[("display", "block"), ("margin", "1em 40px")],
        "pre" => &[
            ("display", "block"),
            ("font-family", "monospace"),
            ("white-space", "pre"),
            ("margin", "1em 0"),
        ],
        "code" | "kbd" | "samp" | "tt" => &[("font-family", "monospace")],
        "strong" | "b" => &[("font-weight", "bold")],
        "em" | "i" | "cite" | "var" => &[("font-style", "italic")],
        "a" => &[("color", "rgb(0, 0, 238)"), ("text-decoration", "underline")],
        "hr" => &[
            ("display", "block"),
            ("margin", "0.5em auto"),
            ("border-style", "inset"),
            ("border-width", "1px"),
        ],
        "html" | "body" | "div" | "section" | "article" | "header" | "footer" | "main"
        | "nav" | "aside" | "figure" | "figcaption" => &[("display", "block")],
        "table" => &[("display", "table")],
        "head" | "style" | "script" | "title" | "meta" | "link" | "template" => {
            &[("display", "none")]
        }
        _ => &[],
    }
}
