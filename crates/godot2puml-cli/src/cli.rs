//! Command-line interface for the godot2puml utility
//!
//! Scans a Godot project and writes PlantUML class diagrams.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use godot2puml::core::logging::{init_logging, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use godot2puml::{ProjectConfig, ProjectReport, ProjectScanner};

/// godot2puml - Generate PlantUML class diagrams from a Godot project
#[derive(Parser)]
#[command(name = "godot2puml")]
#[command(about = "Generate pUML class diagrams from a Godot project.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Path to the Godot project directory
    pub godot_project_directory: PathBuf,

    /// Path to the .puml files directory
    pub output_directory: PathBuf,

    /// File name of the merged diagram inside the output directory
    #[arg(long, default_value = "godot_project.puml")]
    pub merged_name: String,

    /// Print a JSON summary instead of the completion message
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Main CLI application
pub struct Godot2PumlApp {
    config: ProjectConfig,
}

impl Godot2PumlApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_config(ProjectConfig::default())
    }

    pub fn with_config(config: ProjectConfig) -> Self {
        Self { config }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());

        let log_format_str = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level_str), Some(&log_format_str)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("godot2puml v{}", env!("CARGO_PKG_VERSION"));
        }

        self.config = self.config.clone().with_merged_file_name(cli.merged_name);
        debug!(config = ?self.config, "Resolved project configuration");

        let report = self.generate(cli.godot_project_directory, cli.output_directory)?;

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!(
                "UML generation complete at {}",
                report.merged_path().display()
            );
        }

        if cli.verbose {
            eprintln!(
                "Generated {} diagrams for {} known classes",
                report.generated().len(),
                report.known_classes().len()
            );
        }
        Ok(())
    }

    /// Scan the project and write every diagram
    pub fn generate(&self, project_dir: PathBuf, output_dir: PathBuf) -> Result<ProjectReport> {
        let scanner = ProjectScanner::with_config(&project_dir, output_dir, self.config.clone());
        scanner
            .run()
            .with_context(|| format!("Failed to process project '{}'", project_dir.display()))
    }

    /// Get the active project configuration
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }
}

impl Default for Godot2PumlApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing_positional_arguments() {
        let args = vec!["godot2puml", "game", "uml"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.godot_project_directory, PathBuf::from("game"));
        assert_eq!(cli.output_directory, PathBuf::from("uml"));
        assert_eq!(cli.merged_name, "godot_project.puml");
        assert!(!cli.json);
        assert!(!cli.verbose);
        assert_eq!(cli.log_level, LogLevel::Info);
        assert_eq!(cli.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_cli_requires_both_directories() {
        assert!(Cli::try_parse_from(vec!["godot2puml"]).is_err());
        assert!(Cli::try_parse_from(vec!["godot2puml", "game"]).is_err());
    }

    #[test]
    fn test_cli_parsing_options() {
        let args = vec![
            "godot2puml",
            "--verbose",
            "--json",
            "--merged-name",
            "all.puml",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "game",
            "uml",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(cli.verbose);
        assert!(cli.json);
        assert_eq!(cli.merged_name, "all.puml");
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_log_option_strings() {
        assert_eq!(LogLevel::Warn.as_str(), "warn");
        assert_eq!(LogFormat::Pretty.as_str(), "pretty");
    }

    #[test]
    fn test_app_default_config() {
        let app = Godot2PumlApp::default();
        assert_eq!(app.config(), &ProjectConfig::default());
    }

    #[test]
    fn test_generate_writes_diagrams() {
        let project = tempdir().unwrap();
        let out = tempdir().unwrap();
        fs::write(project.path().join("door.gd"), "class_name Door\nsignal opened\n").unwrap();

        let app = Godot2PumlApp::new();
        let report = app
            .generate(project.path().to_path_buf(), out.path().to_path_buf())
            .unwrap();

        assert_eq!(report.generated().len(), 1);
        let door = fs::read_to_string(out.path().join("door.puml")).unwrap();
        assert!(door.contains("  +opened() <<signal>>"));
    }

    #[test]
    fn test_generate_missing_project() {
        let out = tempdir().unwrap();
        let app = Godot2PumlApp::new();
        let err = app
            .generate(out.path().join("missing"), out.path().join("uml"))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Project directory not found"));
    }
}
