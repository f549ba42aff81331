//! Per-file extraction pipeline
//!
//! Parser → association resolution → renderer, for a single script.

use anyhow::Result;
use tracing::{debug, span, Level};

use super::associations::ClassMatcher;
use super::database::ClassDescriptor;
use super::parser::GdScriptParser;
use super::renderer::PlantUmlRenderer;
use crate::core::{Parser, RenderConfig, Renderer};

/// Turns one script's text into PlantUML markup
///
/// The matcher is the frozen known-class set of the whole project; it is
/// only borrowed, so one matcher serves every file of a scan.
pub struct ClassExtractor<'a> {
    file_name: String,
    source: &'a str,
    matcher: &'a ClassMatcher,
    parser: GdScriptParser,
    renderer: PlantUmlRenderer,
}

impl<'a> ClassExtractor<'a> {
    pub fn new(file_name: impl Into<String>, source: &'a str, matcher: &'a ClassMatcher) -> Self {
        Self::with_config(file_name, source, matcher, RenderConfig::default())
    }

    pub fn with_config(
        file_name: impl Into<String>,
        source: &'a str,
        matcher: &'a ClassMatcher,
        config: RenderConfig,
    ) -> Self {
        let file_name = file_name.into();
        Self {
            renderer: PlantUmlRenderer::with_config(file_name.clone(), config),
            file_name,
            source,
            matcher,
            parser: GdScriptParser::new(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Parse the script and resolve its associations
    pub fn extract(&self) -> Result<ClassDescriptor> {
        let mut descriptor = ClassDescriptor::new();
        self.parser.parse(self.source, &mut descriptor)?;
        descriptor.resolve_associations(self.matcher);
        debug!(
            file = %self.file_name,
            associations = descriptor.associations().len(),
            "Resolved associations"
        );
        Ok(descriptor)
    }

    /// Parse, resolve and render in one go
    pub fn process(&self) -> Result<String> {
        let extract_span = span!(Level::INFO, "extract_class", file = %self.file_name);
        let _enter = extract_span.enter();

        let descriptor = self.extract()?;
        self.renderer.render(&descriptor)
    }

    /// Name the script's class is rendered under
    pub fn class_name(&self, descriptor: &ClassDescriptor) -> String {
        self.renderer.class_name(descriptor)
    }
}
