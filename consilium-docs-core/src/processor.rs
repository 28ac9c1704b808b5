use crate::config::ValidatorConfig;
use crate::discovery::PhaseFileFinder;
use crate::error::Result;
use crate::rules::RuleEngine;
use crate::types::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One full pass over the phase documents of a repository.
///
/// Files are processed in name order and every rule runs on every file; a
/// violation never stops the pass. Only I/O failures abort it.
pub struct DocsValidator {
    docs_dir: PathBuf,
    finder: PhaseFileFinder,
    rule_engine: RuleEngine,
}

impl DocsValidator {
    /// `root` is the repository root; the docs directory is resolved below it.
    pub fn new(root: &Path, config: &ValidatorConfig) -> Result<Self> {
        Ok(Self {
            docs_dir: config.docs_dir_under(root),
            finder: PhaseFileFinder::new(&config.file_pattern)?,
            rule_engine: RuleEngine::new(config)?,
        })
    }

    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    pub fn validate(&self) -> Result<ValidationReport> {
        info!(
            "Validating {} in {} with rules {:?}",
            self.finder.pattern(),
            self.docs_dir.display(),
            self.rule_engine.rule_names()
        );

        let files = self.finder.discover(&self.docs_dir)?;
        debug!("Discovered {} phase document(s)", files.len());

        let mut report = ValidationReport::default();
        for path in &files {
            let doc = PhaseDocument::read(path)?;
            debug!("Checking {} ({} bytes)", doc.path.display(), doc.text.len());
            self.rule_engine.apply(&doc, &mut report.violations);
            report.files_checked.push(doc.file_name);
        }

        info!(
            "Checked {} file(s), found {} violation(s)",
            report.files_checked.len(),
            report.violations.len()
        );
        Ok(report)
    }
}
