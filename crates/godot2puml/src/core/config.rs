//! Configuration for project scans and diagram rendering
//!
//! The defaults reproduce the PlantUML output expected by downstream
//! renderers byte for byte; change them only when targeting another layout.

/// Settings that control how a project directory is scanned and written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Extension of source files to process (without the dot)
    pub source_extension: String,
    /// Extension of generated diagram files (without the dot)
    pub output_extension: String,
    /// File name of the merged document inside the output directory
    pub merged_file_name: String,
    /// Rendering options passed to every extractor
    pub render: RenderConfig,
}

impl ProjectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_extension(mut self, ext: impl Into<String>) -> Self {
        self.source_extension = ext.into();
        self
    }

    pub fn with_output_extension(mut self, ext: impl Into<String>) -> Self {
        self.output_extension = ext.into();
        self
    }

    pub fn with_merged_file_name(mut self, name: impl Into<String>) -> Self {
        self.merged_file_name = name.into();
        self
    }

    pub fn with_render_config(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source_extension: "gd".to_string(),
            output_extension: "puml".to_string(),
            merged_file_name: "godot_project.puml".to_string(),
            render: RenderConfig::default(),
        }
    }
}

/// PlantUML rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Prefix for names generated from file names
    pub synthetic_prefix: String,
    /// Return type that is left out of method lines
    pub void_type: String,
    /// Background colour of namespace packages
    pub package_color: String,
    /// Indentation of member lines inside a class block
    pub member_indent: String,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_synthetic_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.synthetic_prefix = prefix.into();
        self
    }

    pub fn with_package_color(mut self, color: impl Into<String>) -> Self {
        self.package_color = color.into();
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            synthetic_prefix: "__GD__".to_string(),
            void_type: "void".to_string(),
            package_color: "#DDDDDD".to_string(),
            member_indent: "  ".to_string(),
        }
    }
}
