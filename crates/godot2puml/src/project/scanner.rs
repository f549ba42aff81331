//! Two-pass project scanner
//!
//! Pass one harvests every `class_name` in the project. Pass two renders each
//! script against that frozen set and writes one diagram per script. A final
//! merge writes a document that `!include`s every generated diagram.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, span, Level};
use walkdir::WalkDir;

use super::report::ProjectReport;
use crate::core::{Detector, ProjectConfig, ProjectError, ProjectResult, ScanStage};
use crate::plugins::gdscript::{
    ClassExtractor, ClassMatcher, GdScriptDetector, GdScriptParser, KnownClasses, END_UML,
    START_UML,
};

/// Read a file as UTF-8, attributing failures to the given stage
fn read_source(path: &Path, stage: ScanStage) -> ProjectResult<String> {
    let bytes = fs::read(path).map_err(|e| ProjectError::read_error(stage, path, e))?;
    String::from_utf8(bytes).map_err(|e| ProjectError::decode_error(stage, path, e))
}

/// Scans a Godot project directory and writes PlantUML diagrams
pub struct ProjectScanner {
    project_dir: PathBuf,
    output_dir: PathBuf,
    config: ProjectConfig,
    detector: GdScriptDetector,
}

impl ProjectScanner {
    pub fn new(project_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self::with_config(project_dir, output_dir, ProjectConfig::default())
    }

    pub fn with_config(
        project_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        config: ProjectConfig,
    ) -> Self {
        let detector = GdScriptDetector::with_extension(config.source_extension.clone());
        Self {
            project_dir: project_dir.into(),
            output_dir: output_dir.into(),
            config,
            detector,
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the merged document
    pub fn merged_path(&self) -> PathBuf {
        self.output_dir.join(&self.config.merged_file_name)
    }

    /// Fail early when the project directory is missing or not a directory
    pub fn validate(&self) -> ProjectResult<()> {
        let metadata = fs::metadata(&self.project_dir)
            .map_err(|e| ProjectError::project_dir_error(&self.project_dir, e))?;
        if !metadata.is_dir() {
            return Err(ProjectError::NotADirectory {
                path: self.project_dir.clone(),
            });
        }
        Ok(())
    }

    /// Every source file under the project directory, sorted by path
    ///
    /// Links to files are followed; links to directories are not descended.
    fn source_files(&self, stage: ScanStage) -> ProjectResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.project_dir).sort_by_file_name() {
            let entry = entry.map_err(|source| ProjectError::Walk { stage, source })?;
            if entry.path().is_file() && self.detector.detect(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    /// Pass one: collect every declared class name in the project
    pub fn collect_class_names(&self) -> ProjectResult<KnownClasses> {
        let collect_span = span!(Level::INFO, "collect_class_names", project = %self.project_dir.display());
        let _enter = collect_span.enter();

        self.validate()?;

        let mut known = KnownClasses::new();
        for path in self.source_files(ScanStage::CollectClassNames)? {
            info!("Gathering class names from {}...", path.display());
            let source = read_source(&path, ScanStage::CollectClassNames)?;
            known.extend(GdScriptParser::declared_class_names(&source));
        }

        let names: Vec<_> = known.iter().collect();
        info!(count = known.len(), "Gathered class names: {:?}", names);
        Ok(known)
    }

    /// Output path for a script: its stem with the diagram extension
    fn output_path_for(&self, script: &Path) -> PathBuf {
        let stem = script.file_stem().unwrap_or_default();
        let mut file_name = stem.to_os_string();
        file_name.push(".");
        file_name.push(&self.config.output_extension);
        self.output_dir.join(file_name)
    }

    /// Pass two: render every script and write its diagram
    ///
    /// Returns the paths written, in traversal order.
    pub fn process_files(&self, known: &KnownClasses) -> ProjectResult<Vec<PathBuf>> {
        let process_span = span!(Level::INFO, "process_project", project = %self.project_dir.display());
        let _enter = process_span.enter();

        fs::create_dir_all(&self.output_dir).map_err(|source| ProjectError::CreateOutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let matcher = known.matcher();
        let mut generated = Vec::new();
        for path in self.source_files(ScanStage::ProcessFiles)? {
            info!("Processing {}...", path.display());
            let source = read_source(&path, ScanStage::ProcessFiles)?;
            let uml = self.render_script(&path, &source, &matcher)?;

            let uml_path = self.output_path_for(&path);
            fs::write(&uml_path, uml).map_err(|e| ProjectError::write_error(&uml_path, e))?;
            info!(
                "Generated PlantUML for {} at {}",
                path.display(),
                uml_path.display()
            );
            generated.push(uml_path);
        }

        Ok(generated)
    }

    fn render_script(
        &self,
        path: &Path,
        source: &str,
        matcher: &ClassMatcher,
    ) -> ProjectResult<String> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extractor =
            ClassExtractor::with_config(file_name, source, matcher, self.config.render.clone());

        extractor
            .process()
            .map_err(|e| ProjectError::extract_error(path, e))
    }

    /// Build the merged document from the diagrams in the output directory
    ///
    /// The merged file itself is never listed, so re-running a scan over an
    /// existing output directory produces the same document.
    pub fn merge_content(&self) -> ProjectResult<String> {
        let list_error = |source| ProjectError::ListOutputDir {
            path: self.output_dir.clone(),
            source,
        };

        let mut includes = Vec::new();
        for entry in fs::read_dir(&self.output_dir).map_err(list_error)? {
            let path = entry.map_err(list_error)?.path();
            let is_diagram = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == self.config.output_extension);
            let is_merged = path.file_name().and_then(|name| name.to_str())
                == Some(self.config.merged_file_name.as_str());

            if path.is_file() && is_diagram && !is_merged {
                includes.push(path);
            }
        }
        includes.sort();

        let mut lines = vec![START_UML.to_string()];
        lines.extend(includes.iter().map(|p| format!("!include {}", p.display())));
        lines.push(END_UML.to_string());
        Ok(lines.join("\n"))
    }

    /// Write the merged document and return its path
    pub fn merge(&self) -> ProjectResult<PathBuf> {
        let merge_span = span!(Level::INFO, "merge", output = %self.output_dir.display());
        let _enter = merge_span.enter();

        let merged_path = self.merged_path();
        let content = self.merge_content()?;
        debug!(lines = content.lines().count(), "Built merged document");

        fs::write(&merged_path, content).map_err(|e| ProjectError::write_error(&merged_path, e))?;
        info!("Merged PlantUML saved to {}", merged_path.display());
        Ok(merged_path)
    }

    /// Run both passes and the merge
    pub fn run(&self) -> ProjectResult<ProjectReport> {
        let known = self.collect_class_names()?;
        let generated = self.process_files(&known)?;
        let merged = self.merge()?;
        Ok(ProjectReport::new(known, generated, merged))
    }
}
