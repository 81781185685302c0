//! Export of one rule's violations into the persisted report.
//!
//! Every export decodes the existing document (if any), collects a fresh
//! [`RuleResult`] from the evaluation, merges it, and writes the whole
//! document back out. Nothing is cached between calls.

use std::io::{Read, Write};

use archreport_core::codec::{decode_results, encode_results};
use archreport_core::config::ReportConfig;
use archreport_core::error::ReportError;
use archreport_core::merge::MergeOutcome;
use archreport_core::types::{ResultSet, RuleResult, ViolationRecord};

use crate::evaluation::EvaluationResult;
use crate::violation::ViolationKind;

/// What a successful export did to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub rule: String,
    pub violations: usize,
    pub outcome: MergeOutcome,
    pub total_rules: usize,
    pub messages: Vec<String>,
}

/// Writes rule results into a JSON report.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    pretty: bool,
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new().pretty(config.pretty)
    }

    /// Merge the result for `rule` into the document read from `existing`
    /// and write the merged document to `destination`.
    ///
    /// `existing` is consumed in full before anything is written. Empty
    /// input counts as an empty document. Neither stream is closed.
    pub fn export_onto<E, R, W>(
        &self,
        rule: &str,
        result: &E,
        existing: R,
        destination: W,
    ) -> Result<ExportSummary, ReportError>
    where
        E: EvaluationResult + ?Sized,
        R: Read,
        W: Write,
    {
        let existing = decode_results(existing)?;
        tracing::debug!(rule, existing_rules = existing.len(), "decoded existing report");
        self.export_with(rule, result, existing, destination)
    }

    /// Write a fresh document holding only the result for `rule`.
    pub fn export<E, W>(
        &self,
        rule: &str,
        result: &E,
        destination: W,
    ) -> Result<ExportSummary, ReportError>
    where
        E: EvaluationResult + ?Sized,
        W: Write,
    {
        self.export_with(rule, result, ResultSet::new(), destination)
    }

    /// Merge the result for `rule` into an already decoded document.
    pub fn export_with<E, W>(
        &self,
        rule: &str,
        result: &E,
        mut existing: ResultSet,
        destination: W,
    ) -> Result<ExportSummary, ReportError>
    where
        E: EvaluationResult + ?Sized,
        W: Write,
    {
        let collected = collect(rule, result);
        let violations = collected.len();
        let messages = collected.messages().to_vec();

        let outcome = existing.insert_result(collected);
        tracing::debug!(rule, ?outcome, "merged rule result");

        encode_results(&existing, destination, self.pretty)?;
        tracing::info!(
            rule,
            violations,
            total_rules = existing.len(),
            "exported rule result"
        );

        Ok(ExportSummary {
            rule: rule.to_string(),
            violations,
            outcome,
            total_rules: existing.len(),
            messages,
        })
    }
}

/// Build the result for `rule` from every violation `result` reports:
/// call violations first, then field accesses, each in delivery order.
pub fn collect<E>(rule: &str, result: &E) -> RuleResult
where
    E: EvaluationResult + ?Sized,
{
    let mut rule_result = RuleResult::new(rule);

    result.handle_calls(&mut |batch, message| {
        absorb(&mut rule_result, ViolationKind::Call, batch, message);
    });
    result.handle_field_accesses(&mut |batch, message| {
        absorb(&mut rule_result, ViolationKind::FieldAccess, batch, message);
    });

    rule_result
}

fn absorb<'a, T>(rule_result: &mut RuleResult, kind: ViolationKind, batch: &'a [T], message: &str)
where
    ViolationRecord: From<&'a T>,
{
    tracing::debug!(
        rule = rule_result.rule(),
        %kind,
        count = batch.len(),
        "collecting violation batch"
    );
    if !message.is_empty() {
        rule_result.record_message(message);
    }
    for violation in batch {
        rule_result.add_violation(ViolationRecord::from(violation));
    }
}
