// Tests for collecting call and field-access violations into one rule result.
use archreport_export::evaluation::RecordedEvaluation;
use archreport_export::exporter::collect;

use crate::common::*;

#[test]
/// One call and one field access give two records, call first.
fn test_two_pass_aggregation() {
    let eval = RecordedEvaluation::new()
        .with_field_accesses("accesses", vec![access("A.run()", "B.state")])
        .with_calls("calls", vec![call("A.run()", "B.work()")]);

    let doc = decode(&export_onto("R", &eval, b""));
    let result = doc.get("R").unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result.violations()[0].target, "B.work()");
    assert_eq!(
        result.violations()[0].description,
        "Method <A.run()> calls method <B.work()>"
    );
    assert_eq!(result.violations()[1].target, "B.state");
    assert_eq!(
        result.violations()[1].description,
        "Method <A.run()> gets field <B.state>"
    );
}

#[test]
/// Batches of the same category keep delivery order across batches.
fn test_multiple_batches_interleave_in_delivery_order() {
    let eval = RecordedEvaluation::new()
        .with_calls("first", vec![call("A", "c1"), call("A", "c2")])
        .with_calls("second", vec![call("A", "c3")])
        .with_field_accesses("third", vec![access("A", "f1")])
        .with_field_accesses("fourth", vec![access("A", "f2")]);

    let result = collect("R", &eval);
    let order: Vec<&str> = result.violations().iter().map(|v| v.target.as_str()).collect();
    assert_eq!(order, vec!["c1", "c2", "c3", "f1", "f2"]);
    assert_eq!(result.messages(), ["first", "second", "third", "fourth"]);
}

#[test]
/// Identical violations are kept as separate records.
fn test_duplicates_kept() {
    let eval = RecordedEvaluation::new().with_calls("", vec![call("A", "B"), call("A", "B")]);
    assert_eq!(collect("R", &eval).len(), 2);
}

#[test]
/// A missing description is written as an empty string.
fn test_missing_description_written_empty() {
    let mut v = call("A.run()", "B.work()");
    v.description = None;
    let eval = RecordedEvaluation::new().with_calls("", vec![v]);

    let out = export_onto("R", &eval, b"");
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json[0]["violations"][0]["description"], "");
}
