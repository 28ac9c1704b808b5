use crate::error::{Result, ValidateError};
use crate::types::RuleKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Docs directory, relative to the repository root
pub const DEFAULT_DOCS_DIR: &str = "docs/consilium";
pub const DEFAULT_FILE_PATTERN: &str = "phase_*_*.yaml";

pub const CANONICAL_SPEC_PATH: &str = "../../consilium-openapi-v1.1.yaml";
pub const DISALLOWED_AUTHORITY_REFERENCE: &str = "00_AI_AGENT_RULES.md";
pub const REQUIRED_AUTHORITY_REFERENCE: &str = "00_AI_AGENT_RULES.yml";
pub const MALFORMED_PLAN_PATH: &str = "../consilium-9_phase_plan.yml";
pub const REQUIRED_PLAN_PATH: &str = "../../consilium-9_phase_plan.yml";
pub const MIN_API_KEY_LENGTH: usize = 32;

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_weak_patterns() -> Vec<String> {
    vec![
        r"len\(api\)\s*>=\s*16".to_string(),
        r"min_length\s*[:=]\s*16".to_string(),
        r"Length\s*>?=\s*16".to_string(),
        r"assert\s+len\([^)]*consilium_api_key[^)]*\)\s*>=\s*16".to_string(),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Directory holding the phase documents, joined onto the repository root
    #[serde(default = "ValidatorConfig::default_docs_dir")]
    pub docs_dir: PathBuf,
    /// Glob matched against file names directly inside `docs_dir`
    #[serde(default = "ValidatorConfig::default_file_pattern")]
    pub file_pattern: String,
    #[serde(default)]
    pub canonical_spec: CanonicalSpecConfig,
    #[serde(default)]
    pub authority_order: AuthorityOrderConfig,
    #[serde(default)]
    pub plan_path: PlanPathConfig,
    #[serde(default)]
    pub api_key: ApiKeyConfig,
    /// Pipeline configuration - defines which rules to run and in what order
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalSpecConfig {
    /// Exact value `canonical_spec_path` must carry
    pub expected_path: String,
}

impl Default for CanonicalSpecConfig {
    fn default() -> Self {
        Self {
            expected_path: CANONICAL_SPEC_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorityOrderConfig {
    /// Reference that must not appear anywhere in a phase document
    pub disallowed_reference: String,
    /// Reference suggested in the violation message
    pub required_reference: String,
}

impl Default for AuthorityOrderConfig {
    fn default() -> Self {
        Self {
            disallowed_reference: DISALLOWED_AUTHORITY_REFERENCE.to_string(),
            required_reference: REQUIRED_AUTHORITY_REFERENCE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanPathConfig {
    /// The known-bad `phase_plan` value; only this exact form is flagged
    pub malformed_path: String,
    pub required_path: String,
}

impl Default for PlanPathConfig {
    fn default() -> Self {
        Self {
            malformed_path: MALFORMED_PLAN_PATH.to_string(),
            required_path: REQUIRED_PLAN_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyConfig {
    /// Minimum credential length quoted in violation messages
    #[serde(default = "ApiKeyConfig::default_min_length")]
    pub min_length: usize,
    /// Case-insensitive regexes describing guidance weaker than `min_length`
    #[serde(default = "default_weak_patterns")]
    pub weak_patterns: Vec<String>,
}

impl ApiKeyConfig {
    fn default_min_length() -> usize {
        MIN_API_KEY_LENGTH
    }
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self {
            min_length: MIN_API_KEY_LENGTH,
            weak_patterns: default_weak_patterns(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// List of rules to run in order
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Name of the rule (see [`RuleKind::as_str`])
    pub name: String,
    /// Whether this rule is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            rules: RuleKind::ALL
                .iter()
                .map(|kind| RuleConfig {
                    name: kind.as_str().to_string(),
                    enabled: true,
                })
                .collect(),
        }
    }
}

impl ValidatorConfig {
    fn default_docs_dir() -> PathBuf {
        PathBuf::from(DEFAULT_DOCS_DIR)
    }

    fn default_file_pattern() -> String {
        DEFAULT_FILE_PATTERN.to_string()
    }

    /// Load config from a YAML file. Missing sections keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ValidateError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ValidateError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Docs directory resolved against a repository root
    pub fn docs_dir_under(&self, root: &Path) -> PathBuf {
        root.join(&self.docs_dir)
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            docs_dir: Self::default_docs_dir(),
            file_pattern: Self::default_file_pattern(),
            canonical_spec: CanonicalSpecConfig::default(),
            authority_order: AuthorityOrderConfig::default(),
            plan_path: PlanPathConfig::default(),
            api_key: ApiKeyConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_pipeline_runs_every_rule_in_fixed_order() {
        let config = ValidatorConfig::default();
        let names: Vec<&str> = config
            .pipeline
            .rules
            .iter()
            .map(|rule| rule.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["canonical_spec_path", "authority_order", "plan_path", "api_key_guidance"]
        );
        assert!(config.pipeline.rules.iter().all(|rule| rule.enabled));
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_missing_sections() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "docs_dir: handbook/phases\npipeline:\n  rules:\n    - name: plan_path\n    - name: api_key_guidance\n      enabled: false\n"
        )
        .unwrap();

        let config = ValidatorConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.docs_dir, PathBuf::from("handbook/phases"));
        assert_eq!(config.file_pattern, DEFAULT_FILE_PATTERN);
        assert_eq!(config.canonical_spec.expected_path, CANONICAL_SPEC_PATH);
        assert_eq!(config.api_key.min_length, 32);
        assert_eq!(config.api_key.weak_patterns.len(), 4);
        assert_eq!(config.pipeline.rules.len(), 2);
        assert!(config.pipeline.rules[0].enabled);
        assert!(!config.pipeline.rules[1].enabled);
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "docs_dir: [unterminated").unwrap();

        let err = ValidatorConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ValidateError::ConfigParse { .. }));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ValidatorConfig::load_from_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ValidateError::ConfigIo { .. }));
    }

    #[test]
    fn docs_dir_is_joined_onto_root() {
        let config = ValidatorConfig::default();
        assert_eq!(
            config.docs_dir_under(Path::new("/repo")),
            PathBuf::from("/repo/docs/consilium")
        );
    }
}
