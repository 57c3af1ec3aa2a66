//! Parsing and serialization of CSS declaration blocks (`k: v; k: v`).

use lightningcss::declaration::DeclarationBlock;
use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{ParserOptions, StyleAttribute};

use crate::properties::to_kebab_case;

/// One `property: value` pair from a declaration block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new(property: &str, value: &str) -> Self {
        Self {
            property: to_kebab_case(property),
            value: value.trim().to_string(),
            important: false,
        }
    }
}

/// Parse the body of a `style` attribute.
///
/// Invalid entries are skipped. Normal declarations come first, then the
/// `!important` ones, each group in source order.
pub fn parse_declarations(text: &str) -> Vec<Declaration> {
    let options = ParserOptions {
        error_recovery: true,
        ..ParserOptions::default()
    };
    match StyleAttribute::parse(text, options) {
        Ok(attribute) => declarations_from_block(&attribute.declarations),
        Err(_) => Vec::new(),
    }
}

/// Flatten a parsed declaration block into owned declarations
pub fn declarations_from_block(block: &DeclarationBlock) -> Vec<Declaration> {
    let normal = block.declarations.iter().map(|p| (p, false));
    let important = block.important_declarations.iter().map(|p| (p, true));

    normal
        .chain(important)
        .filter_map(|(property, important)| {
            let value = property
                .value_to_css_string(PrinterOptions::default())
                .ok()?;
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            Some(Declaration {
                property: property.property_id().name().to_ascii_lowercase(),
                value: value.to_string(),
                important,
            })
        })
        .collect()
}

/// Serialize pairs as `style` attribute text
pub fn serialize_declarations<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(property, value)| format!("{}: {}", property, value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Split a value into whitespace separated tokens, keeping `rgb(1, 2, 3)` whole
pub(crate) fn split_value_tokens(value: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
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
                    tokens.push(&value[s..i]);
                }
            }
            _ => {
                start.get_or_insert(i);
            }
        }
    }
    if let Some(s) = start {
        tokens.push(&value[s..]);
    }
    tokens
}
