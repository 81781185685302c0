use archreport_core::config::{ReportConfig, CONFIG_DIR, CONFIG_FILE};

/// Run `archreport init`: write the default configuration.
pub fn run() -> i32 {
    let (root, _) = match super::load_project("init") {
        Ok(p) => p,
        Err(code) => return code,
    };

    let config_dir = root.join(CONFIG_DIR);
    if config_dir.join(CONFIG_FILE).exists() {
        println!("archreport already initialized ({}/{})", CONFIG_DIR, CONFIG_FILE);
        return 0;
    }

    let config = ReportConfig::default();
    if let Err(e) = config.save(&config_dir) {
        eprintln!("archreport init: failed to write config: {}", e);
        return 2;
    }

    tracing::debug!(report_file = %config.report_file, "wrote default config");
    println!("Initialized {}/{}", CONFIG_DIR, CONFIG_FILE);
    0
}
