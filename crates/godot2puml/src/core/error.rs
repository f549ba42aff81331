//! Core error types for project processing

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Pipeline stage an input error was raised in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStage {
    /// Pass one: harvesting `class_name` declarations
    CollectClassNames,
    /// Pass two: extracting and rendering each script
    ProcessFiles,
}

impl fmt::Display for ScanStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanStage::CollectClassNames => "class name collection",
            ScanStage::ProcessFiles => "file processing",
        };
        f.write_str(name)
    }
}

/// Errors raised while scanning a project and writing its diagrams
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Project directory not found: {}", path.display())]
    ProjectDirNotFound { path: PathBuf },

    #[error("Cannot access project directory '{}': {source}", path.display())]
    ProjectDirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to walk directory during {stage}: {source}")]
    Walk {
        stage: ScanStage,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read '{}' during {stage}: {source}", path.display())]
    Read {
        stage: ScanStage,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{}' is not valid UTF-8 (during {stage})", path.display())]
    Decode {
        stage: ScanStage,
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to extract class from '{}': {source}", path.display())]
    Extract {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to create output directory '{}': {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list output directory '{}': {source}", path.display())]
    ListOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProjectError {
    /// Create a read error for the given stage and file
    pub fn read_error(stage: ScanStage, path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            stage,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a decode error for the given stage and file
    pub fn decode_error(
        stage: ScanStage,
        path: &Path,
        source: std::string::FromUtf8Error,
    ) -> Self {
        Self::Decode {
            stage,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Classify a failure to stat the project directory
    pub fn project_dir_error(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::ProjectDirNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::ProjectDirUnreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Create an extraction error for the given script
    pub fn extract_error(path: &Path, source: anyhow::Error) -> Self {
        Self::Extract {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a write error for the given file
    pub fn write_error(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The stage an input error belongs to, if any
    pub fn stage(&self) -> Option<ScanStage> {
        match self {
            Self::Walk { stage, .. } | Self::Read { stage, .. } | Self::Decode { stage, .. } => {
                Some(*stage)
            }
            _ => None,
        }
    }
}

pub type ProjectResult<T> = std::result::Result<T, ProjectError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_project_dir_not_found() {
        let error = ProjectError::ProjectDirNotFound {
            path: PathBuf::from("/nowhere/game"),
        };
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Project directory not found"));
        assert!(error_msg.contains("/nowhere/game"));
        assert_eq!(error.stage(), None);
    }

    #[test]
    fn test_read_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = ProjectError::read_error(
            ScanStage::ProcessFiles,
            Path::new("player.gd"),
            io_err,
        );
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("player.gd"));
        assert!(error_msg.contains("file processing"));
        assert!(error_msg.contains("denied"));
        assert_eq!(error.stage(), Some(ScanStage::ProcessFiles));
    }

    #[test]
    fn test_decode_error() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let error = ProjectError::decode_error(
            ScanStage::CollectClassNames,
            Path::new("broken.gd"),
            utf8_err,
        );
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("not valid UTF-8"));
        assert!(error_msg.contains("class name collection"));
        assert_eq!(error.stage(), Some(ScanStage::CollectClassNames));
    }

    #[test]
    fn test_project_dir_error_classification() {
        let path = Path::new("game");

        let missing = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            ProjectError::project_dir_error(path, missing),
            ProjectError::ProjectDirNotFound { .. }
        ));

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = ProjectError::project_dir_error(path, denied);
        assert!(matches!(error, ProjectError::ProjectDirUnreadable { .. }));
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Cannot access project directory 'game'"));
        assert!(error_msg.contains("denied"));
    }

    #[test]
    fn test_extract_error() {
        let error = ProjectError::extract_error(
            Path::new("actors/player.gd"),
            anyhow::anyhow!("renderer failed"),
        );
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Failed to extract class from 'actors/player.gd'"));
        assert!(error_msg.contains("renderer failed"));
        assert_eq!(error.stage(), None);
    }

    #[test]
    fn test_write_error() {
        let io_err = io::Error::new(io::ErrorKind::Other, "disk full");
        let error = ProjectError::write_error(Path::new("out/player.puml"), io_err);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Failed to write"));
        assert!(error_msg.contains("disk full"));
    }
}
