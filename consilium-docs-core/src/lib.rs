// Consilium Docs Core Library
//
// Lints the phase documents under docs/consilium against the docs conventions.
// Documents are treated as raw text: every rule is a regex search, never a
// YAML parse.

pub mod config;
pub mod discovery;
pub mod error;
pub mod processor;
pub mod report;
pub mod rules;
pub mod types;

// Re-export main types and functions for easy use
pub use config::ValidatorConfig;
pub use error::{Result, ValidateError};
pub use processor::DocsValidator;
pub use report::{render_json, render_text};
pub use types::*;
