use super::engine::{compile_pattern, DocRule};
use crate::config::CanonicalSpecConfig;
use crate::error::Result;
use crate::types::*;
use regex::Regex;

/// Key anchored at line start, value double-quoted
const CANONICAL_SPEC_LINE: &str = r#"(?m)^canonical_spec_path:\s*"([^"]+)""#;

pub struct CanonicalSpecPathRule {
    line: Regex,
    expected: String,
}

impl CanonicalSpecPathRule {
    pub fn new(config: &CanonicalSpecConfig) -> Result<Self> {
        Ok(Self {
            line: compile_pattern(RuleKind::CanonicalSpecPath, CANONICAL_SPEC_LINE, false)?,
            expected: config.expected_path.clone(),
        })
    }

    /// Value of the first `canonical_spec_path` line, if any.
    pub fn declared_path<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.line
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl DocRule for CanonicalSpecPathRule {
    fn kind(&self) -> RuleKind {
        RuleKind::CanonicalSpecPath
    }

    fn check(&self, doc: &PhaseDocument, violations: &mut Vec<Violation>) {
        match self.declared_path(&doc.text) {
            None => violations.push(Violation::new(
                &doc.file_name,
                self.kind(),
                "missing canonical_spec_path",
            )),
            Some(got) if got != self.expected => violations.push(Violation::new(
                &doc.file_name,
                self.kind(),
                format!(
                    "canonical_spec_path should be '{}', got '{}'",
                    self.expected, got
                ),
            )),
            Some(_) => {}
        }
    }
}
