//! Core renderer trait for diagram output
//!
//! This trait defines the interface for rendering parsed data into a
//! diagram markup format.

use anyhow::Result;

/// Core trait for diagram renderers
///
/// # Example
/// ```
/// use godot2puml::core::Renderer;
/// use godot2puml::plugins::gdscript::{ClassDescriptor, PlantUmlRenderer};
///
/// let descriptor = ClassDescriptor::new();
/// let renderer = PlantUmlRenderer::new("empty.gd");
/// let output = renderer.render(&descriptor).unwrap();
/// assert!(output.starts_with("@startuml"));
/// ```
pub trait Renderer<D>: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render the parsed data into the output format
    fn render(&self, source: &D) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the version of this renderer
    fn version(&self) -> &'static str;

    /// Get the supported output format
    fn format(&self) -> &'static str;
}
