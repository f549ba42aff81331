//! Core abstractions for script processing
//!
//! This module defines the traits every language plugin implements, together
//! with the shared error, configuration and logging pieces.

mod config;
mod detector;
mod error;
pub mod logging;
mod parser;
mod renderer;

pub use config::*;
pub use detector::*;
pub use error::*;
pub use logging::*;
pub use parser::*;
pub use renderer::*;
