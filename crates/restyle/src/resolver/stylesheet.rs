//! Author style sheets collected from a template's `<style>` blocks.

use lightningcss::printer::PrinterOptions;
use lightningcss::rules::CssRule;
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use lightningcss::traits::ToCss;
use restyle_core::{declarations_from_block, Declaration};
use scraper::{ElementRef, Selector};

/// One selector of a rule with its declarations
#[derive(Debug)]
pub(crate) struct StyleRule {
    pub selector: Selector,
    pub specificity: u32,
    /// Source order across all sheets of the template
    pub order: usize,
    pub declarations: Vec<Declaration>,
}

/// The rules of every `<style>` block of a template, in source order
#[derive(Debug, Default)]
pub(crate) struct Stylesheet {
    rules: Vec<StyleRule>,
}

impl Stylesheet {
    /// Append the rules of one `<style>` block.
    ///
    /// At-rules are skipped whole, as are nested rules. Selectors scraper
    /// cannot match drop out with a warning.
    pub fn add_source(&mut self, css: &str) {
        let options = ParserOptions {
            error_recovery: true,
            ..ParserOptions::default()
        };
        let sheet = match StyleSheet::parse(css, options) {
            Ok(sheet) => sheet,
            Err(err) => {
                tracing::warn!(error = %err, "Skipping unparseable style sheet");
                return;
            }
        };

        for rule in &sheet.rules.0 {
            let CssRule::Style(style) = rule else {
                continue;
            };
            let declarations = declarations_from_block(&style.declarations);

            for lightning_selector in style.selectors.0.iter() {
                let text = match lightning_selector.to_css_string(PrinterOptions::default()) {
                    Ok(text) => text,
                    Err(err) => {
                        tracing::warn!(error = %err, "Skipping unprintable selector");
                        continue;
                    }
                };
                match Selector::parse(&text) {
                    Ok(selector) => {
                        let order = self.rules.len();
                        self.rules.push(StyleRule {
                            selector,
                            specificity: lightning_selector.specificity(),
                            order,
                            declarations: declarations.clone(),
                        });
                    }
                    Err(err) => {
                        tracing::warn!(selector = %text, error = ?err, "Skipping unsupported selector");
                    }
                };
            }
        }
    }

    /// Rules whose selector matches the element
    pub fn matching<'a>(&'a self, element: &'a ElementRef<'a>) -> impl Iterator<Item = &'a StyleRule> + 'a {
        self.rules
            .iter()
            .filter(move |rule| rule.selector.matches(element))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}
