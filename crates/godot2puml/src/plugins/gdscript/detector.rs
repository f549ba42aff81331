//! GDScript file detector
//!
//! Identifies script files by extension.

use std::path::Path;

use crate::core::Detector;

/// Detector for GDScript source files
pub struct GdScriptDetector {
    extension: String,
}

impl GdScriptDetector {
    pub fn new() -> Self {
        Self::with_extension("gd")
    }

    /// Detector for a custom extension (without the dot)
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}

impl Default for GdScriptDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for GdScriptDetector {
    fn detect(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }

    fn language(&self) -> &'static str {
        "gdscript"
    }

    fn extensions(&self) -> Vec<&str> {
        vec![self.extension.as_str()]
    }
}
