// Phase file discovery
//
// Lists the docs directory once (no recursion) and keeps the regular files
// whose names match the phase glob, sorted by file name.

use crate::error::{Result, ValidateError};
use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct PhaseFileFinder {
    pattern: String,
    matcher: GlobMatcher,
}

impl PhaseFileFinder {
    pub fn new(pattern: &str) -> Result<Self> {
        let glob = Glob::new(pattern).map_err(|source| ValidateError::InvalidGlob {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.matcher.is_match(file_name)
    }

    /// Matching regular files directly inside `docs_dir`, ordered by name.
    pub fn discover(&self, docs_dir: &Path) -> Result<Vec<PathBuf>> {
        let unreadable = |source| ValidateError::DocsDirUnreadable {
            path: docs_dir.to_path_buf(),
            source,
        };

        let mut found = Vec::new();
        // A missing docs directory is fatal here, not an empty pass
        for entry in fs::read_dir(docs_dir).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            let file_name = entry.file_name();
            if !self.matches(&file_name.to_string_lossy()) {
                continue;
            }

            // Follows symlinks, same as a plain metadata lookup
            let path = entry.path();
            if !path.is_file() {
                debug!("Skipping non-file entry {}", path.display());
                continue;
            }
            found.push((file_name, path));
        }

        found.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(found.into_iter().map(|(_, path)| path).collect())
    }
}
