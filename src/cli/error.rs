//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;

use crate::generator::GeneratorError;

/// Errors surfaced by CLI commands
#[derive(Error, Debug)]
pub enum CliError {
    /// Bad command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input file could not be read
    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    /// Standard input could not be read
    #[error("Failed to read stdin: {0}")]
    StdinReadError(String),

    /// Output file could not be written
    #[error("Failed to write {0}: {1}")]
    FileWriteError(PathBuf, String),

    /// Schema generation failed
    #[error(transparent)]
    Generation(#[from] GeneratorError),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgument(_) => 2,
            CliError::Generation(GeneratorError::Configuration(_)) => 2,
            CliError::FileReadError(..)
            | CliError::StdinReadError(_)
            | CliError::FileWriteError(..) => 3,
            CliError::Generation(_) => 1,
        }
    }
}
