use crate::ReportFormatter;
use archreport_core::types::{ResultSet, RuleResult};
use archreport_export::exporter::ExportSummary;

pub struct HumanFormatter;

impl ReportFormatter for HumanFormatter {
    fn format_report(&self, report: &ResultSet) -> String {
        if report.is_empty() {
            return "No rules recorded.\n".to_string();
        }

        let mut out = String::new();
        let width = report.iter().map(|r| r.rule().chars().count()).max().unwrap_or(0);
        for (i, result) in report.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}. {:<width$}  {} violation(s)\n",
                i + 1,
                result.rule(),
                result.len(),
                width = width,
            ));
        }
        out.push_str(&format!(
            "\n{} rule(s), {} violation(s)\n",
            report.len(),
            report.total_violations(),
        ));
        out
    }

    fn format_rule(&self, result: &RuleResult) -> String {
        let mut out = format!("{} ({} violation(s))\n", result.rule(), result.len());
        for v in result.violations() {
            out.push_str(&format!("  {} -> {}\n", v.origin, v.target));
            if !v.description.is_empty() {
                out.push_str(&format!("    {}\n", v.description));
            }
        }
        out
    }

    fn format_export(&self, summary: &ExportSummary) -> String {
        let action = if summary.outcome.is_replaced() {
            "replaced"
        } else {
            "added"
        };
        let mut out = format!(
            "{} rule `{}` at position {} with {} violation(s); report now holds {} rule(s)\n",
            action,
            summary.rule,
            summary.outcome.index() + 1,
            summary.violations,
            summary.total_rules,
        );
        for message in &summary.messages {
            out.push_str(&format!("  {}\n", message));
        }
        out
    }
}
