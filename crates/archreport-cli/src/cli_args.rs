use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "archreport",
    version,
    about = "Accumulate architecture rule violations into one JSON report"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log merge and export details to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Write a default .archreport/archreport.json
    Init,

    /// Merge one rule's evaluation into the report
    Export {
        /// Rule name; an existing entry with exactly this name is replaced
        #[arg(long)]
        rule: String,
        /// Recorded evaluation (JSON) holding the rule's violations
        #[arg(long)]
        input: PathBuf,
        /// Report file (default: from config)
        #[arg(long, env = "ARCHREPORT_REPORT")]
        report: Option<PathBuf>,
        /// Ignore any existing report contents
        #[arg(long)]
        fresh: bool,
    },

    /// Print the report
    Show {
        /// Report file (default: from config)
        #[arg(long, env = "ARCHREPORT_REPORT")]
        report: Option<PathBuf>,
        /// Only show violations of this rule
        #[arg(long)]
        rule: Option<String>,
    },
}
