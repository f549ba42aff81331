//! Summary of a completed project scan

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::plugins::gdscript::KnownClasses;

/// What a scan found and wrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectReport {
    known_classes: KnownClasses,
    generated: Vec<PathBuf>,
    merged: PathBuf,
}

impl ProjectReport {
    pub fn new(known_classes: KnownClasses, generated: Vec<PathBuf>, merged: PathBuf) -> Self {
        Self {
            known_classes,
            generated,
            merged,
        }
    }

    pub fn known_classes(&self) -> &KnownClasses {
        &self.known_classes
    }

    /// Per-script diagrams, in traversal order
    pub fn generated(&self) -> &[PathBuf] {
        &self.generated
    }

    pub fn merged_path(&self) -> &Path {
        &self.merged
    }
}
