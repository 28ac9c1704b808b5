use super::engine::{compile_pattern, DocRule};
use crate::config::PlanPathConfig;
use crate::error::Result;
use crate::types::*;
use regex::Regex;

/// Flags only the one known-bad `phase_plan` value. A missing key or any other
/// malformed form passes.
pub struct PlanPathRule {
    malformed: Regex,
    message: String,
}

impl PlanPathRule {
    pub fn new(config: &PlanPathConfig) -> Result<Self> {
        let pattern = format!(
            r#"phase_plan:\s*"{}""#,
            regex::escape(&config.malformed_path)
        );
        let malformed = compile_pattern(RuleKind::PlanPath, &pattern, false)?;

        let message = format!(
            "phase_plan points to {}; should be {}",
            leading_traversal(&config.malformed_path),
            config.required_path
        );

        Ok(Self { malformed, message })
    }
}

/// The `../` prefix of a relative path, or the whole path when it has none.
fn leading_traversal(path: &str) -> &str {
    let mut end = 0;
    while path[end..].starts_with("../") {
        end += 3;
    }
    if end == 0 {
        path
    } else {
        &path[..end]
    }
}

impl DocRule for PlanPathRule {
    fn kind(&self) -> RuleKind {
        RuleKind::PlanPath
    }

    fn check(&self, doc: &PhaseDocument, violations: &mut Vec<Violation>) {
        if self.malformed.is_match(&doc.text) {
            violations.push(Violation::new(&doc.file_name, self.kind(), self.message.clone()));
        }
    }
}
