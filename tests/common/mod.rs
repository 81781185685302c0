#![allow(dead_code)]
//! Shared builders for archreport integration tests.
//!
//! Import from any integration test file with:
//!   `#[path = "common/mod.rs"] mod common;`

use archreport_core::codec::decode_results;
use archreport_core::types::ResultSet;
use archreport_export::evaluation::RecordedEvaluation;
use archreport_export::exporter::Exporter;
use archreport_export::violation::{CallViolation, FieldAccessViolation};

pub fn call(origin: &str, target: &str) -> CallViolation {
    CallViolation {
        origin: origin.to_string(),
        target: target.to_string(),
        description: Some(format!("Method <{}> calls method <{}>", origin, target)),
    }
}

pub fn access(origin: &str, target: &str) -> FieldAccessViolation {
    FieldAccessViolation {
        origin: origin.to_string(),
        target: target.to_string(),
        description: Some(format!("Method <{}> gets field <{}>", origin, target)),
    }
}

/// An evaluation with one call batch holding a call to each target.
pub fn calls_to(targets: &[&str]) -> RecordedEvaluation {
    let calls = targets
        .iter()
        .map(|t| call("com.app.service.OrderService.place()", t))
        .collect();
    RecordedEvaluation::new().with_calls("Rule was violated", calls)
}

/// Export `evaluation` for `rule` onto `existing` and return the written bytes.
pub fn export_onto(rule: &str, evaluation: &RecordedEvaluation, existing: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    Exporter::new()
        .export_onto(rule, evaluation, existing, &mut out)
        .expect("export failed");
    out
}

/// Build a document holding `rules` in order, each with one call violation.
pub fn document_with_rules(rules: &[&str]) -> Vec<u8> {
    let mut doc = Vec::new();
    for rule in rules {
        let target = format!("{}.target()", rule);
        doc = export_onto(rule, &calls_to(&[&target]), &doc);
    }
    doc
}

pub fn decode(bytes: &[u8]) -> ResultSet {
    decode_results(bytes).expect("decode failed")
}

pub fn targets(set: &ResultSet, rule: &str) -> Vec<String> {
    set.get(rule)
        .map(|r| r.violations().iter().map(|v| v.target.clone()).collect())
        .unwrap_or_default()
}
