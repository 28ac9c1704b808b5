use super::engine::{compile_pattern, DocRule};
use crate::config::AuthorityOrderConfig;
use crate::error::Result;
use crate::types::*;
use regex::Regex;

// AuthorityOrderRule - whole-text search for the disallowed authority document.
// There is no attempt to locate the authority_order field itself, so a hit in a
// comment counts too.
pub struct AuthorityOrderRule {
    disallowed: Regex,
    message: String,
}

impl AuthorityOrderRule {
    pub fn new(config: &AuthorityOrderConfig) -> Result<Self> {
        let disallowed = compile_pattern(
            RuleKind::AuthorityOrder,
            &regex::escape(&config.disallowed_reference),
            false,
        )?;

        let message = match config.disallowed_reference.rsplit_once('.') {
            Some((_, extension)) => format!(
                "authority_order references .{}; use {}",
                extension, config.required_reference
            ),
            None => format!(
                "authority_order references {}; use {}",
                config.disallowed_reference, config.required_reference
            ),
        };

        Ok(Self { disallowed, message })
    }
}

impl DocRule for AuthorityOrderRule {
    fn kind(&self) -> RuleKind {
        RuleKind::AuthorityOrder
    }

    fn check(&self, doc: &PhaseDocument, violations: &mut Vec<Violation>) {
        if self.disallowed.is_match(&doc.text) {
            violations.push(Violation::new(&doc.file_name, self.kind(), self.message.clone()));
        }
    }
}
