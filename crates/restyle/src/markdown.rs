//! Markdown to HTML rendering.
//!
//! The rendered HTML is parsed into a [`ContentNode`] tree, which is what the
//! application engine styles.

use comrak::{markdown_to_html, ComrakOptions};

use crate::html::parse_html;
use crate::node::ContentNode;

/// Options for the markdown renderer
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Pass raw HTML in the document through instead of escaping it
    pub raw_html: bool,

    /// Turn bare URLs and `www.` addresses into links
    pub linkify: bool,

    /// Curly quotes, dashes and ellipses
    pub smart_punctuation: bool,

    /// Render single newlines as `<br>`
    pub hard_breaks: bool,

    /// GFM tables
    pub tables: bool,

    /// `~~strikethrough~~`
    pub strikethrough: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            raw_html: true,
            linkify: true,
            smart_punctuation: true,
            hard_breaks: true,
            tables: true,
            strikethrough: true,
        }
    }
}

/// Converts markdown into HTML and content trees
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: MarkdownOptions,
}

impl MarkdownRenderer {
    /// Create a renderer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom options
    pub fn with_options(options: MarkdownOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MarkdownOptions {
        &self.options
    }

    /// Render markdown to an HTML string
    pub fn render_html(&self, markdown: &str) -> String {
        markdown_to_html(markdown, &self.comrak_options())
    }

    /// Render markdown to a fresh content tree
    pub fn render_tree(&self, markdown: &str) -> ContentNode {
        parse_html(&self.render_html(markdown))
    }

    fn comrak_options(&self) -> ComrakOptions<'static> {
        let mut options = ComrakOptions::default();
        options.extension.table = self.options.tables;
        options.extension.strikethrough = self.options.strikethrough;
        options.extension.autolink = self.options.linkify;
        options.parse.smart = self.options.smart_punctuation;
        options.render.hardbreaks = self.options.hard_breaks;
        options.render.unsafe_ = self.options.raw_html;
        options.render.escape = !self.options.raw_html;
        options
    }
}
