//! Core detector trait for source file identification
//!
//! Detectors decide which files in a project tree belong to a language
//! plugin. The project scanner consults one detector in both passes.

use std::path::Path;

/// Core trait for source file detectors
///
/// # Example
/// ```
/// use godot2puml::core::Detector;
/// use godot2puml::plugins::gdscript::GdScriptDetector;
/// use std::path::Path;
///
/// let detector = GdScriptDetector::new();
/// assert!(detector.detect(Path::new("scenes/player.gd")));
/// assert!(!detector.detect(Path::new("scenes/player.tscn")));
/// ```
pub trait Detector: Send + Sync {
    /// Check whether the path is a source file of this language
    fn detect(&self, path: &Path) -> bool;

    /// Get the language name
    fn language(&self) -> &'static str;

    /// Get the file extensions this detector accepts (without the dot)
    fn extensions(&self) -> Vec<&str>;
}
