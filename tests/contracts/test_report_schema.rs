/// Contract tests for the persisted report document.
///
/// These tests verify that documents written by the exporter match
/// tests/schemas/report.schema.json.
use archreport_export::evaluation::RecordedEvaluation;

use crate::common::*;

fn validate_against_schema(json_value: &serde_json::Value, schema_str: &str) {
    let schema: serde_json::Value = serde_json::from_str(schema_str).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("Failed to compile JSON schema");
    let errors: Vec<_> = validator.iter_errors(json_value).collect();
    if !errors.is_empty() {
        let msgs: Vec<String> = errors
            .iter()
            .map(|e| format!("  - {} (at {})", e, e.instance_path))
            .collect();
        panic!("JSON schema validation failed:\n{}", msgs.join("\n"));
    }
}

const SCHEMA: &str = include_str!("../schemas/report.schema.json");

#[test]
fn empty_rule_document_matches_schema() {
    let out = export_onto("R", &RecordedEvaluation::new(), b"");
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    validate_against_schema(&value, SCHEMA);
}

#[test]
fn mixed_violation_document_matches_schema() {
    let eval = RecordedEvaluation::new()
        .with_calls("calls", vec![call("A.run()", "B.work()")])
        .with_field_accesses("accesses", vec![access("A.run()", "B.state")]);
    let out = export_onto("R2", &eval, &document_with_rules(&["R1"]));
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    validate_against_schema(&value, SCHEMA);
}

#[test]
fn bookkeeping_fields_not_exported() {
    let eval = RecordedEvaluation::new().with_calls("diagnostic", vec![call("A", "B")]);
    let out = export_onto("R", &eval, b"");
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let entry = value[0].as_object().unwrap();
    let mut keys: Vec<&str> = entry.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["rule", "violations"]);

    let violation = value[0]["violations"][0].as_object().unwrap();
    let mut keys: Vec<&str> = violation.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["description", "origin", "target"]);
}

#[test]
#[should_panic(expected = "JSON schema validation failed")]
fn schema_rejects_empty_rule_name() {
    let value = serde_json::json!([{ "rule": "", "violations": [] }]);
    validate_against_schema(&value, SCHEMA);
}
