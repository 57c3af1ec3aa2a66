//! Style profile extraction from template markup.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use restyle_core::properties::{is_color_property, is_no_effect_default, MEASURED_PROPERTIES};
use restyle_core::{StyleProfile, StyleRecord};

use crate::resolver::{CascadeResolver, ResolvedElement, ResolverOptions, StyleResolver};
use crate::{ExtractionError, Result};

/// Tags measured by default
pub const DEFAULT_WATCHED_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "blockquote", "code", "strong",
    "em", "a",
];

/// Options for the extractor
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Tags to measure; each gets a profile entry, possibly empty
    pub watched_tags: Vec<String>,

    /// Properties read from every occurrence, in record order
    pub properties: Vec<String>,

    /// Bound on the wait for the resolver.
    ///
    /// Only the wait is bounded. A resolver still running at the deadline is
    /// left on its detached worker thread until `resolve` returns, and its
    /// answer is then discarded.
    pub timeout: Duration,

    /// Options handed to the resolver
    pub resolver: ResolverOptions,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            watched_tags: DEFAULT_WATCHED_TAGS.iter().map(|t| t.to_string()).collect(),
            properties: MEASURED_PROPERTIES.iter().map(|p| p.to_string()).collect(),
            timeout: Duration::from_secs(2),
            resolver: ResolverOptions::default(),
        }
    }
}

impl ExtractOptions {
    /// Add a tag to the watched set
    pub fn watch(mut self, tag: &str) -> Self {
        let tag = tag.to_lowercase();
        if !self.watched_tags.contains(&tag) {
            self.watched_tags.push(tag);
        }
        self
    }
}

/// Measures a template and builds its [`StyleProfile`]
#[derive(Clone)]
pub struct Extractor {
    resolver: Arc<dyn StyleResolver>,
    options: ExtractOptions,
}

impl Extractor {
    /// Create an extractor backed by the [`CascadeResolver`]
    pub fn new() -> Self {
        Self::with_options(ExtractOptions::default())
    }

    /// Create an extractor with custom options
    pub fn with_options(options: ExtractOptions) -> Self {
        Self {
            resolver: Arc::new(CascadeResolver::new()),
            options,
        }
    }

    /// Create an extractor backed by another resolver
    pub fn with_resolver(resolver: Arc<dyn StyleResolver>, options: ExtractOptions) -> Self {
        Self { resolver, options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Render the template, measure every watched tag and build the profile.
    ///
    /// Fails when the resolver cannot render or does not answer within the
    /// configured timeout; callers then fall back to unstyled content.
    ///
    /// A timed-out resolver is not cancelled: its worker thread keeps running
    /// detached until `resolve` returns. Resolvers that can hang should
    /// enforce their own limit.
    pub fn extract(&self, markup: &str) -> Result<StyleProfile> {
        let elements = self.measure(markup)?;
        let profile = self.build_profile(&elements);
        tracing::debug!(
            tags = profile.tags().count(),
            records = profile.record_count(),
            "Extracted style profile"
        );
        Ok(profile)
    }

    /// Run the resolver on a worker and wait for its answer, bounded.
    ///
    /// The worker is never joined. A late answer is dropped with the channel.
    fn measure(&self, markup: &str) -> Result<Vec<ResolvedElement>> {
        let (tx, rx) = mpsc::channel();
        let resolver = Arc::clone(&self.resolver);
        let options = self.options.resolver.clone();
        let markup = markup.to_string();

        thread::Builder::new()
            .name("restyle-measure".to_string())
            .spawn(move || {
                let _ = tx.send(resolver.resolve(&markup, &options));
            })
            .map_err(|e| ExtractionError::SurfaceUnavailable(e.to_string()))?;

        match rx.recv_timeout(self.options.timeout) {
            Ok(Ok(elements)) => Ok(elements),
            Ok(Err(err)) => Err(ExtractionError::SurfaceUnavailable(err.to_string())),
            Err(RecvTimeoutError::Timeout) => Err(ExtractionError::Timeout(self.options.timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(ExtractionError::SurfaceUnavailable(
                "resolver stopped without an answer".to_string(),
            )),
        }
    }

    fn build_profile(&self, elements: &[ResolvedElement]) -> StyleProfile {
        let mut profile = StyleProfile::new();
        for tag in &self.options.watched_tags {
            profile.insert(tag, Vec::new());
        }

        for element in elements {
            if !self.options.watched_tags.contains(&element.tag) {
                continue;
            }

            let mut record = StyleRecord::new().with_inline_style(&element.inline_style);
            for class_name in &element.class_names {
                record = record.with_class(class_name);
            }
            for property in &self.options.properties {
                let Some(value) = element.value(property) else {
                    continue;
                };
                if is_color_property(property) || !is_no_effect_default(&value) {
                    record.styles.insert(property.clone(), value);
                }
            }

            profile.push(&element.tag, record);
        }
        profile
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Extract a profile with default options
pub fn extract(markup: &str) -> Result<StyleProfile> {
    Extractor::new().extract(markup)
}
