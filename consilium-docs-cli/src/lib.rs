// All validation logic is in consilium-docs-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod args;
pub mod logging;
pub mod root;

use anyhow::{Context, Result};
use consilium_docs_core::report::{render_json, render_text};
use consilium_docs_core::{DocsValidator, ValidationReport, ValidatorConfig};
use tracing::info;

// Re-export core types for convenience
pub use consilium_docs_core::*;

pub use args::{Args, OutputFormat};

/// Exit code for faults that stop the run before a report exists
pub const FATAL_EXIT_CODE: u8 = 2;

/// Run one validation pass and render the report for `args.format`.
pub fn run(args: &Args) -> Result<(ValidationReport, String)> {
    let root = root::resolve_root(args.root.as_deref())?;
    info!("Repository root: {}", root.display());

    let config = match &args.config {
        Some(path) => {
            let config = ValidatorConfig::load_from_file(path)
                .with_context(|| format!("Loading config from {}", path.display()))?;
            info!("Loaded config from {}", path.display());
            config
        }
        None => ValidatorConfig::default(),
    };

    let validator = DocsValidator::new(&root, &config)?;
    let report = validator
        .validate()
        .with_context(|| format!("Validating {}", validator.docs_dir().display()))?;

    let rendered = match args.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => format!("{}\n", render_json(&report)?),
    };
    Ok((report, rendered))
}
