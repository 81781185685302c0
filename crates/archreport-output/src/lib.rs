//! Output formatters for archreport command results.
//!
//! Provides two output modes:
//! - **JSON** (`--json`): Machine-readable structured output
//! - **Human** (default): Plain text for terminal users

pub mod human;
pub mod json;

use archreport_core::types::{ResultSet, RuleResult};
use archreport_export::exporter::ExportSummary;

pub trait ReportFormatter {
    fn format_report(&self, report: &ResultSet) -> String;
    fn format_rule(&self, result: &RuleResult) -> String;
    fn format_export(&self, summary: &ExportSummary) -> String;
}
