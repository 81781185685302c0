use std::fs;
use std::io::BufReader;
use std::path::PathBuf;

use archreport_core::codec::decode_results;
use archreport_core::types::ResultSet;
use archreport_output::ReportFormatter;

/// Run `archreport show`: print the report or one rule of it.
pub fn run(formatter: &dyn ReportFormatter, report: Option<PathBuf>, rule: Option<String>) -> i32 {
    let (root, config) = match super::load_project("show") {
        Ok(p) => p,
        Err(code) => return code,
    };
    let report_path = super::resolve_report(report, &root, &config);

    // A report that was never written is an empty report.
    let results = if report_path.exists() {
        let decoded = fs::File::open(&report_path)
            .map_err(Into::into)
            .and_then(|f| decode_results(BufReader::new(f)));
        match decoded {
            Ok(set) => set,
            Err(e) => {
                eprintln!("archreport show: {}: {}", report_path.display(), e);
                return 2;
            }
        }
    } else {
        tracing::debug!(path = %report_path.display(), "no report yet");
        ResultSet::new()
    };

    match rule {
        Some(name) => match results.get(&name) {
            Some(result) => {
                print!("{}", formatter.format_rule(result));
                0
            }
            None => {
                eprintln!("archreport show: rule not found: {}", name);
                1
            }
        },
        None => {
            print!("{}", formatter.format_report(&results));
            0
        }
    }
}
