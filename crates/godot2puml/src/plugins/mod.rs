//! Plugin implementations for script languages
//!
//! Each plugin implements the core traits for one source language.

pub mod gdscript;

pub use gdscript::*;
