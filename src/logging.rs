// src/logging.rs
use customer_importer_shared_kernel::{PresentationError, PresentationResult};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Maps `-v` repetitions to a level. Warnings are always shown.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber, writing to stderr so report output on stdout stays clean.
pub fn init(verbosity: u8) -> PresentationResult<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level_for(verbosity))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| PresentationError::LoggingSetup(err.to_string()))
}
