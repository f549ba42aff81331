//! Core parser trait for source text
//!
//! This trait defines the interface for turning raw source text into a
//! structured target that a renderer can consume.

use anyhow::Result;

/// Core trait for source parsers
///
/// A parser fills the target it is handed; anything the parser does not
/// recognize is left untouched in the target.
///
/// # Example
/// ```
/// use godot2puml::core::Parser;
/// use godot2puml::plugins::gdscript::{ClassDescriptor, GdScriptParser};
///
/// let parser = GdScriptParser::new();
/// let mut descriptor = ClassDescriptor::new();
/// parser.parse("class_name Player\nextends Node3D", &mut descriptor).unwrap();
/// assert_eq!(descriptor.declared_name(), Some("Player"));
/// ```
pub trait Parser<D>: Send + Sync {
    /// Parse source text into the provided target
    fn parse(&self, input: &str, target: &mut D) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Check if the input contains anything this parser recognizes
    fn can_parse(&self, input: &str) -> bool;
}
