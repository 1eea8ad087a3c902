//! ragmap CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use ragmap_cli::{Args, report::reports};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting ragmap");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = ragmap_cli::run(&args) {
        let reporter = miette::GraphicalReportHandler::new();

        // One rendered block per catalog problem
        for report in reports(&err) {
            let mut writer = String::new();
            reporter
                .render_report(&mut writer, &report)
                .expect("Writing to String buffer is infallible");

            error!("{writer}");
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
