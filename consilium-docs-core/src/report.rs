use crate::error::Result;
use crate::types::ValidationReport;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const FAILED_HEADER: &str = "Docs validation FAILED:";
pub const PASSED_LINE: &str = "Docs validation PASSED: all checks OK";

/// Human-readable report, one line per violation.
pub fn render_text(report: &ValidationReport) -> String {
    if report.passed() {
        return format!("{PASSED_LINE}\n");
    }

    let mut out = String::from(FAILED_HEADER);
    out.push('\n');
    for violation in &report.violations {
        out.push_str(" - ");
        out.push_str(&violation.to_string());
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    checked_at: DateTime<Utc>,
    files_checked: &'a [String],
    violations: &'a [crate::types::Violation],
}

pub fn render_json(report: &ValidationReport) -> Result<String> {
    render_json_at(report, Utc::now())
}

pub fn render_json_at(report: &ValidationReport, checked_at: DateTime<Utc>) -> Result<String> {
    let json = JsonReport {
        passed: report.passed(),
        checked_at,
        files_checked: &report.files_checked,
        violations: &report.violations,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
