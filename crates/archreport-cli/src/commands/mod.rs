pub mod export;
pub mod init;
pub mod show;

use std::path::{Path, PathBuf};

use archreport_core::config::{ReportConfig, CONFIG_DIR};

/// Project root and its loaded configuration.
pub(crate) fn load_project(cmd: &str) -> Result<(PathBuf, ReportConfig), i32> {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("archreport {}: failed to get current directory: {}", cmd, e);
            return Err(2);
        }
    };
    let config = ReportConfig::load(&cwd.join(CONFIG_DIR));
    Ok((cwd, config))
}

/// The report path from `--report`, or the configured one.
pub(crate) fn resolve_report(
    explicit: Option<PathBuf>,
    root: &Path,
    config: &ReportConfig,
) -> PathBuf {
    match explicit {
        Some(p) if p.is_absolute() => p,
        Some(p) => root.join(p),
        None => config.report_path(root),
    }
}
