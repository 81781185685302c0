use crate::ReportFormatter;
use archreport_core::types::{ResultSet, RuleResult};
use archreport_export::exporter::ExportSummary;
use serde_json::json;

pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, report: &ResultSet) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }

    fn format_rule(&self, result: &RuleResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }

    fn format_export(&self, summary: &ExportSummary) -> String {
        let status = if summary.outcome.is_replaced() {
            "replaced"
        } else {
            "appended"
        };
        let value = json!({
            "command": "export",
            "rule": summary.rule,
            "violations": summary.violations,
            "status": status,
            "position": summary.outcome.index(),
            "total_rules": summary.total_rules,
            "messages": summary.messages,
        });
        serde_json::to_string_pretty(&value).unwrap_or_default()
    }
}
