//! archreport CLI: accumulate architecture rule violations into one JSON report.
//!
//! This binary provides the `archreport` command with subcommands for
//! initialization, exporting a rule's violations, and showing the report.
//! See `archreport --help` for usage.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let formatter: Box<dyn archreport_output::ReportFormatter> = if cli.json {
        Box::new(archreport_output::json::JsonFormatter)
    } else {
        Box::new(archreport_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Export {
            rule,
            input,
            report,
            fresh,
        } => commands::export::run(&*formatter, rule, input, report, fresh),
        Commands::Show { report, rule } => commands::show::run(&*formatter, report, rule),
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
