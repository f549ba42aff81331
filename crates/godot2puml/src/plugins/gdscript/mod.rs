//! GDScript plugin
//!
//! Implements class extraction from Godot scripts and PlantUML rendering.

mod associations;
mod database;
mod detector;
mod extractor;
mod parser;
mod renderer;

pub use associations::{ClassMatcher, KnownClasses};
pub use database::{ClassDescriptor, Method, Parameter, Property, Signal};
pub use detector::GdScriptDetector;
pub use extractor::ClassExtractor;
pub use parser::GdScriptParser;
pub use renderer::{sanitize_identifier, PlantUmlRenderer, END_UML, START_UML};
