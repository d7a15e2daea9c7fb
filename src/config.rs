// src/config.rs
use std::path::{Path, PathBuf};

use customer_importer_domain::{RecordLayout, ReportOrder};
use customer_importer_shared_kernel::{DomainError, PresentationError, Result};

use crate::cli::Args;

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" { Self::Stdout } else { Self::File(path.to_path_buf()) }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout)
    }
}

/// Fully validated settings for one import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    pub input: PathBuf,
    pub output: OutputTarget,
    pub layout: RecordLayout,
    pub order: ReportOrder,
    pub quiet: bool,
    pub verbosity: u8,
}

impl ImportConfig {
    /// Config with the default layout and alphabetical order.
    pub fn new(input: impl Into<PathBuf>, output: OutputTarget) -> Self {
        Self {
            input: input.into(),
            output,
            layout: RecordLayout::default(),
            order: ReportOrder::default(),
            quiet: false,
            verbosity: 0,
        }
    }
}

fn build_layout(args: &Args) -> Result<RecordLayout> {
    RecordLayout::new(args.delimiter.0, args.column).map_err(|err| match err {
        DomainError::InvalidLayout { reason } => PresentationError::InvalidValue {
            flag: "--delimiter".to_string(),
            value: format!("{:?}", args.delimiter.0),
            reason,
        }
        .into(),
        other => other.into(),
    })
}

/// Convert parsed CLI arguments into an [`ImportConfig`].
///
/// Yields `Ok(None)` when either positional path is absent, in which case the
/// caller prints usage instead of running.
///
/// # Errors
///
/// Returns `Err` when the delimiter cannot be used to split lines.
pub fn build_config(args: &Args) -> Result<Option<ImportConfig>> {
    let (Some(input), Some(output)) = (&args.input, &args.output) else {
        return Ok(None);
    };

    Ok(Some(ImportConfig {
        input: input.clone(),
        output: OutputTarget::from_path(output),
        layout: build_layout(args)?,
        order: args.order.into(),
        quiet: args.quiet,
        verbosity: args.verbose,
    }))
}
