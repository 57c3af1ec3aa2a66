//! PreviewService and PreviewSession - the entry points for styled previews.

use restyle_core::StyleProfile;

use crate::apply::ApplyEngine;
use crate::catalog;
use crate::extract::Extractor;
use crate::markdown::MarkdownRenderer;
use crate::notify::Notifier;
use crate::Result;

/// Where a preview takes its styles from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// Unstyled preview
    #[default]
    None,
    /// Template markup to measure
    Markup(String),
    /// Id of a built-in template
    Builtin(String),
}

impl TemplateSource {
    pub fn markup(markup: &str) -> Self {
        Self::Markup(markup.to_string())
    }

    pub fn builtin(id: &str) -> Self {
        Self::Builtin(id.to_string())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Renders markdown and styles it after a template
#[derive(Debug, Clone)]
pub struct PreviewService {
    renderer: MarkdownRenderer,
    extractor: Extractor,
    extracted: ApplyEngine,
    builtin: ApplyEngine,
}

impl Default for PreviewService {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewService {
    pub fn new() -> Self {
        Self::with_parts(MarkdownRenderer::new(), Extractor::new())
    }

    /// Build a service from a configured renderer and extractor
    pub fn with_parts(renderer: MarkdownRenderer, extractor: Extractor) -> Self {
        Self {
            renderer,
            extractor,
            extracted: ApplyEngine::extracted(),
            builtin: ApplyEngine::catalog(),
        }
    }

    pub fn renderer(&self) -> &MarkdownRenderer {
        &self.renderer
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Render markdown styled after `template`.
    ///
    /// Any failure to obtain a profile yields the plain rendered HTML.
    pub fn render(&self, markdown: &str, template: &TemplateSource) -> String {
        match template {
            TemplateSource::None => self.renderer.render_html(markdown),
            TemplateSource::Markup(markup) => match self.extractor.extract(markup) {
                Ok(profile) => self.render_extracted(markdown, &profile),
                Err(err) => {
                    tracing::error!(error = %err, "Style extraction failed, rendering unstyled");
                    self.renderer.render_html(markdown)
                }
            },
            TemplateSource::Builtin(id) => match catalog::find(id) {
                Some(builtin) => self.render_builtin(markdown, builtin.profile()),
                None => {
                    tracing::warn!(template = %id, "Unknown built-in template, rendering unstyled");
                    self.renderer.render_html(markdown)
                }
            },
        }
    }

    /// Measure template markup
    pub fn extract(&self, markup: &str) -> Result<StyleProfile> {
        self.extractor.extract(markup)
    }

    /// Render with a profile measured from template markup
    pub fn render_extracted(&self, markdown: &str, profile: &StyleProfile) -> String {
        let mut tree = self.renderer.render_tree(markdown);
        self.extracted.apply(Some(profile), &mut tree)
    }

    /// Render with a built-in profile
    pub fn render_builtin(&self, markdown: &str, profile: &StyleProfile) -> String {
        let mut tree = self.renderer.render_tree(markdown);
        self.builtin.apply(Some(profile), &mut tree)
    }
}

/// Identifies one preview pass; only the newest pass may commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassTicket {
    generation: u64,
}

impl PassTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Editing state for one document: content, chosen template and the last
/// committed preview
#[derive(Debug, Default)]
pub struct PreviewSession {
    service: PreviewService,
    content: String,
    template: TemplateSource,
    preview: String,
    /// Profile measured from the current markup template
    profile: Option<StyleProfile>,
    generation: u64,
    notifier: Notifier,
}

impl PreviewSession {
    pub fn new(service: PreviewService) -> Self {
        Self {
            service,
            ..Default::default()
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    pub fn template(&self) -> &TemplateSource {
        &self.template
    }

    /// Switch templates. A profile measured for the previous template is
    /// discarded.
    pub fn set_template(&mut self, template: TemplateSource) {
        if template != self.template {
            self.profile = None;
            self.template = template;
        }
    }

    /// The last committed preview
    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    /// Start a pass, superseding every earlier one
    pub fn begin_pass(&mut self) -> PassTicket {
        self.generation += 1;
        PassTicket {
            generation: self.generation,
        }
    }

    /// Store `html` as the preview if `ticket` is still the newest pass
    pub fn commit(&mut self, ticket: PassTicket, html: String) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Dropping stale preview"
            );
            return false;
        }
        self.preview = html;
        true
    }

    /// Render the current content with the current template
    pub fn render(&mut self) -> String {
        match &self.template {
            TemplateSource::Markup(markup) => {
                if self.profile.is_none() {
                    match self.service.extract(markup) {
                        Ok(profile) => self.profile = Some(profile),
                        Err(err) => {
                            tracing::error!(error = %err, "Style extraction failed, rendering unstyled");
                            self.notifier
                                .notify("Template styles unavailable", std::time::Instant::now());
                            return self.service.renderer().render_html(&self.content);
                        }
                    }
                }
                match &self.profile {
                    Some(profile) => self.service.render_extracted(&self.content, profile),
                    None => self.service.renderer().render_html(&self.content),
                }
            }
            template => self.service.render(&self.content, template),
        }
    }

    /// Run a full pass and commit it
    pub fn refresh(&mut self) -> &str {
        let ticket = self.begin_pass();
        let html = self.render();
        self.commit(ticket, html);
        &self.preview
    }
}
