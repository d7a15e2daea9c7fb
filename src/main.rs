// src/main.rs
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use customer_importer::{
    app,
    cli::Args,
    config::{self, ImportConfig, OutputTarget},
    logging,
};

fn main() -> ExitCode {
    let args = Args::parse();

    let outcome = match config::build_config(&args) {
        Ok(Some(config)) => run(&config),
        Ok(None) => {
            println!("{}", Args::command().render_usage());
            return ExitCode::SUCCESS;
        }
        Err(err) => Err(err.into()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ImportConfig) -> Result<()> {
    logging::init(config.verbosity)?;

    let summary = app::run(config)?;
    tracing::info!(
        candidates = summary.candidates,
        valid = summary.valid_emails,
        domains = summary.distinct_domains(),
        "import finished"
    );

    match &config.output {
        OutputTarget::File(path) if !config.quiet => {
            println!("Processing completed. Results written to {}", path.display());
        }
        _ => {}
    }
    Ok(())
}
