//! Project-level processing
//!
//! Walks a Godot project, renders every script and merges the results.

mod report;
mod scanner;

pub use report::ProjectReport;
pub use scanner::ProjectScanner;
