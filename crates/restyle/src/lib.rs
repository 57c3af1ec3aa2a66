//! # restyle
//!
//! Render markdown with the typography of an HTML template.
//!
//! A template is any HTML document used purely as a style reference. Its
//! look is captured as a [`StyleProfile`]: for every watched tag, one style
//! record per occurrence in document order. The profile is then applied to
//! freshly rendered markdown so that the n-th heading of the content looks
//! like the n-th heading of the template.
//!
//! ## Design
//!
//! - **Pluggable measurement**: styles are read through a [`StyleResolver`].
//!   The bundled [`CascadeResolver`] runs a CSS cascade over the template's
//!   own style sheets, so no browser is needed.
//! - **Bounded waits**: extraction gives the resolver a fixed time budget and
//!   reports [`ExtractionError::Timeout`] past it.
//! - **Two-pass application**: explicit styles first, inheritance second.
//!
//! ## Example (built-in template)
//!
//! ```rust
//! use restyle::{PreviewService, TemplateSource};
//!
//! let service = PreviewService::new();
//! let html = service.render("# Title", &TemplateSource::builtin("modern"));
//! assert!(html.contains("color: #2c3e50"));
//! ```
//!
//! ## Example (template markup)
//!
//! ```rust
//! use restyle::{ApplyEngine, Extractor, MarkdownRenderer};
//!
//! let profile = Extractor::new()
//!     .extract("<style>h1 { color: #c0392b }</style><h1>Sample</h1>")
//!     .unwrap();
//!
//! let mut tree = MarkdownRenderer::new().render_tree("# Hello");
//! let html = ApplyEngine::extracted().apply(Some(&profile), &mut tree);
//! assert!(html.contains("color: rgb(192, 57, 43)"));
//! ```

use std::time::Duration;

pub mod apply;
pub mod catalog;
pub mod extract;
pub mod html;
pub mod markdown;
pub mod node;
pub mod notify;
pub mod resolver;
mod service;
mod utilities;

pub use apply::{apply, ApplyEngine, ApplyOptions, ApplyReport};
pub use catalog::{builtin_templates, BuiltinTemplate};
pub use extract::{extract, ExtractOptions, Extractor, DEFAULT_WATCHED_TAGS};
pub use html::parse_html;
pub use markdown::{MarkdownOptions, MarkdownRenderer};
pub use node::{ContentNode, NodeType};
pub use notify::{Notifier, DEFAULT_NOTICE_DURATION};
pub use resolver::{CascadeResolver, ResolveError, ResolvedElement, ResolverOptions, StyleResolver};
pub use restyle_core::{InheritedSet, PropertyError, StyleProfile, StyleRecord};
pub use service::{PassTicket, PreviewService, PreviewSession, TemplateSource};
pub use utilities::*;

/// Error type for style extraction
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("rendering surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("style measurement timed out after {0:?}")]
    Timeout(Duration),
}

pub type Result<T> = std::result::Result<T, ExtractionError>;
