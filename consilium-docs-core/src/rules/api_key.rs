use super::engine::{compile_pattern, DocRule};
use crate::config::ApiKeyConfig;
use crate::error::Result;
use crate::types::*;
use regex::Regex;

// ApiKeyGuidanceRule - flags length guidance weaker than the minimum.
// One violation per matching pattern, however many times it matches.
pub struct ApiKeyGuidanceRule {
    min_length: usize,
    weak_checks: Vec<(String, Regex)>,
}

impl ApiKeyGuidanceRule {
    pub fn new(config: &ApiKeyConfig) -> Result<Self> {
        let weak_checks = config
            .weak_patterns
            .iter()
            .map(|pattern| {
                compile_pattern(RuleKind::ApiKeyGuidance, pattern, true)
                    .map(|regex| (pattern.clone(), regex))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            min_length: config.min_length,
            weak_checks,
        })
    }
}

impl DocRule for ApiKeyGuidanceRule {
    fn kind(&self) -> RuleKind {
        RuleKind::ApiKeyGuidance
    }

    fn check(&self, doc: &PhaseDocument, violations: &mut Vec<Violation>) {
        for (pattern, regex) in &self.weak_checks {
            if regex.is_match(&doc.text) {
                violations.push(Violation::new(
                    &doc.file_name,
                    self.kind(),
                    format!(
                        "API key min length should be {}+, found check '{}'",
                        self.min_length, pattern
                    ),
                ));
            }
        }
    }
}
