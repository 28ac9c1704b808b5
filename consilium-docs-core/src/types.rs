use crate::error::{Result, ValidateError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ===== RULES =====

/// The four conventions a phase document is held to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    CanonicalSpecPath,
    AuthorityOrder,
    PlanPath,
    ApiKeyGuidance,
}

impl RuleKind {
    /// Default evaluation order within a single document.
    pub const ALL: [RuleKind; 4] = [
        RuleKind::CanonicalSpecPath,
        RuleKind::AuthorityOrder,
        RuleKind::PlanPath,
        RuleKind::ApiKeyGuidance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::CanonicalSpecPath => "canonical_spec_path",
            RuleKind::AuthorityOrder => "authority_order",
            RuleKind::PlanPath => "plan_path",
            RuleKind::ApiKeyGuidance => "api_key_guidance",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = ValidateError;

    fn from_str(name: &str) -> Result<Self> {
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| ValidateError::UnknownRule(name.to_string()))
    }
}

// ===== DOCUMENTS =====

/// A phase document read once from disk. Line endings are normalized to `\n`
/// on read; the text is not modified afterwards.
#[derive(Debug, Clone)]
pub struct PhaseDocument {
    pub path: PathBuf,
    pub file_name: String,
    pub text: String,
}

impl PhaseDocument {
    pub fn read(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ValidateError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let text = normalize_line_endings(&raw);
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            text,
        })
    }

    /// Build a document that never touched the filesystem (used by tests and
    /// by callers validating text they already hold).
    pub fn from_text(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        let file_name = file_name.into();
        Self {
            path: PathBuf::from(&file_name),
            file_name,
            text: normalize_line_endings(&text.into()),
        }
    }
}

/// `\r\n` and lone `\r` become `\n`, so `(?m)^` sees every line start.
fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

// ===== VIOLATIONS =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub file: String,
    pub rule: RuleKind,
    pub message: String,
}

impl Violation {
    pub fn new(file: impl Into<String>, rule: RuleKind, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            rule,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.message)
    }
}

/// Outcome of one pass over the docs directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// File names in the order they were examined
    pub files_checked: Vec<String>,
    /// Violations in detection order (file order, then rule order)
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// 0 when clean, 1 when any violation was found.
    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }

    pub fn violations_for(&self, rule: RuleKind) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.rule == rule)
    }
}
