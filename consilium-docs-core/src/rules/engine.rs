use crate::config::ValidatorConfig;
use crate::error::{Result, ValidateError};
use crate::types::*;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use super::api_key::ApiKeyGuidanceRule;
use super::authority_order::AuthorityOrderRule;
use super::canonical_spec::CanonicalSpecPathRule;
use super::plan_path::PlanPathRule;

/// A stateless check over one document's text.
pub trait DocRule {
    fn kind(&self) -> RuleKind;

    /// Append zero or more violations for `doc`. Never fails.
    fn check(&self, doc: &PhaseDocument, violations: &mut Vec<Violation>);

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }
}

/// Compile a rule's pattern up front so a bad pattern surfaces before any
/// document is read.
pub(crate) fn compile_pattern(rule: RuleKind, pattern: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| ValidateError::InvalidPattern {
            rule,
            pattern: pattern.to_string(),
            source,
        })
}

pub struct RuleEngine {
    rules: Vec<Box<dyn DocRule>>,
}

impl RuleEngine {
    /// Build the enabled rules in pipeline order.
    pub fn new(config: &ValidatorConfig) -> Result<Self> {
        let mut rules: Vec<Box<dyn DocRule>> = Vec::new();

        for rule_config in &config.pipeline.rules {
            let kind: RuleKind = rule_config.name.parse()?;
            if !rule_config.enabled {
                debug!("Skipping disabled rule: {}", kind);
                continue;
            }
            rules.push(Self::build_rule(kind, config)?);
        }

        Ok(Self { rules })
    }

    fn build_rule(kind: RuleKind, config: &ValidatorConfig) -> Result<Box<dyn DocRule>> {
        Ok(match kind {
            RuleKind::CanonicalSpecPath => {
                Box::new(CanonicalSpecPathRule::new(&config.canonical_spec)?)
            }
            RuleKind::AuthorityOrder => Box::new(AuthorityOrderRule::new(&config.authority_order)?),
            RuleKind::PlanPath => Box::new(PlanPathRule::new(&config.plan_path)?),
            RuleKind::ApiKeyGuidance => Box::new(ApiKeyGuidanceRule::new(&config.api_key)?),
        })
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Run every rule over `doc`, appending to `violations` in rule order.
    pub fn apply(&self, doc: &PhaseDocument, violations: &mut Vec<Violation>) {
        for rule in &self.rules {
            let before = violations.len();
            rule.check(doc, violations);
            debug!(
                "{} -> {}: {} violation(s)",
                doc.file_name,
                rule.name(),
                violations.len() - before
            );
        }
    }
}
