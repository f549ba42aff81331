//! godot2puml - Generate PlantUML class diagrams from Godot projects
//!
//! Scans GDScript files for class metadata (inheritance, properties,
//! methods, signals) and renders each script as a PlantUML class diagram.
//! Member types that mention other classes of the project become
//! associations.
//!
//! # Quick Start
//!
//! ```rust
//! use godot2puml::{render_script, KnownClasses};
//!
//! let known: KnownClasses = ["Weapon"].into_iter().collect();
//! let uml = render_script("player.gd", "class_name Player\nvar gun: Weapon", &known).unwrap();
//! assert!(uml.contains("Player --> Weapon : 1"));
//! ```
//!
//! # Whole projects
//!
//! ```no_run
//! use godot2puml::process_project;
//!
//! let report = process_project("my_game", "uml").unwrap();
//! println!("{}", report.merged_path().display());
//! ```

pub mod core;
pub mod plugins;
pub mod project;

pub use crate::core::*;
pub use plugins::gdscript::{ClassDescriptor, KnownClasses};
pub use project::{ProjectReport, ProjectScanner};

use std::path::PathBuf;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Detector, Parser, ProjectConfig, ProjectError, RenderConfig, Renderer, ScanStage,
    };
    pub use crate::plugins::gdscript::{
        ClassDescriptor, ClassExtractor, ClassMatcher, GdScriptDetector, GdScriptParser,
        KnownClasses, Method, Parameter, PlantUmlRenderer, Property, Signal,
    };
    pub use crate::project::{ProjectReport, ProjectScanner};
}

/// Render one script as PlantUML
///
/// `file_name` only matters for scripts without `class_name`, where it
/// becomes the synthetic class name.
///
/// # Example
/// ```rust
/// use godot2puml::{render_script, KnownClasses};
///
/// let uml = render_script("hud.gd", "extends Control", &KnownClasses::new()).unwrap();
/// assert!(uml.contains("class __GD__hud_gd {"));
/// ```
pub fn render_script(file_name: &str, source: &str, known: &KnownClasses) -> anyhow::Result<String> {
    use crate::plugins::gdscript::ClassExtractor;

    let matcher = known.matcher();
    ClassExtractor::new(file_name, source, &matcher).process()
}

/// Parse one script without resolving associations
///
/// # Example
/// ```rust
/// use godot2puml::parse_script;
///
/// let descriptor = parse_script("extends Node\nfunc jump(height: float) -> void:").unwrap();
/// assert_eq!(descriptor.parent_class(), Some("Node"));
/// assert_eq!(descriptor.methods()[0].name, "jump");
/// ```
pub fn parse_script(source: &str) -> anyhow::Result<ClassDescriptor> {
    use crate::core::Parser as _;
    use crate::plugins::gdscript::GdScriptParser;

    let mut descriptor = ClassDescriptor::new();
    GdScriptParser::new().parse(source, &mut descriptor)?;
    Ok(descriptor)
}

/// Scan a whole project with default settings
///
/// Writes one diagram per script into `output_dir` plus the merged
/// `godot_project.puml`.
pub fn process_project(
    project_dir: impl Into<PathBuf>,
    output_dir: impl Into<PathBuf>,
) -> Result<ProjectReport, ProjectError> {
    ProjectScanner::new(project_dir, output_dir).run()
}
