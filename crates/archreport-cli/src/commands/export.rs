use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use archreport_core::codec::decode_results;
use archreport_core::types::ResultSet;
use archreport_export::evaluation::RecordedEvaluation;
use archreport_export::exporter::Exporter;
use archreport_output::ReportFormatter;

/// Run `archreport export`: merge one rule's evaluation into the report.
pub fn run(
    formatter: &dyn ReportFormatter,
    rule: String,
    input: PathBuf,
    report: Option<PathBuf>,
    fresh: bool,
) -> i32 {
    if rule.is_empty() {
        eprintln!("archreport export: rule name must not be empty");
        return 2;
    }

    let (root, config) = match super::load_project("export") {
        Ok(p) => p,
        Err(code) => return code,
    };
    let report_path = super::resolve_report(report, &root, &config);

    let evaluation = match RecordedEvaluation::load(&input) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("archreport export: {}", e);
            return 2;
        }
    };

    // Decode before the report file is truncated.
    let existing = if fresh || !report_path.exists() {
        ResultSet::new()
    } else {
        let file = match fs::File::open(&report_path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!(
                    "archreport export: failed to open {}: {}",
                    report_path.display(),
                    e
                );
                return 2;
            }
        };
        match decode_results(BufReader::new(file)) {
            Ok(set) => set,
            Err(e) => {
                eprintln!("archreport export: {}: {}", report_path.display(), e);
                return 2;
            }
        }
    };

    if let Some(parent) = report_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!(
                "archreport export: failed to create {}: {}",
                parent.display(),
                e
            );
            return 2;
        }
    }
    let file = match fs::File::create(&report_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!(
                "archreport export: failed to open {}: {}",
                report_path.display(),
                e
            );
            return 2;
        }
    };

    let exporter = Exporter::from_config(&config);
    let writer = BufWriter::new(file);
    match exporter.export_with(&rule, &evaluation, existing, writer) {
        Ok(summary) => {
            print!("{}", formatter.format_export(&summary));
            0
        }
        Err(e) => {
            eprintln!("archreport export: {}: {}", report_path.display(), e);
            2
        }
    }
}
