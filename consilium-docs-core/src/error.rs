use crate::types::RuleKind;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal faults. Content defects are never raised; they are collected as
/// [`crate::types::Violation`]s instead.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("failed to list docs directory {}", path.display())]
    DocsDirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read phase document {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pattern '{pattern}' for rule {rule}")]
    InvalidPattern {
        rule: RuleKind,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid phase file pattern '{pattern}'")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("failed to read config file {}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unknown rule '{0}' in pipeline config")]
    UnknownRule(String),

    #[error("failed to render JSON report")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ValidateError>;
