//! Error types for the hosts compactor.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for a compaction run.
///
/// Every variant is terminal: the tool is a single-shot batch transform with
/// no retry path. Display strings double as the lines the `compact` binary
/// prints, so they are phrased for the operator.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The input path did not resolve to a readable file.
    #[error(
        "File not found - supply input and optionally output filenames as arguments or make sure a file named 'hosts' is in this folder."
    )]
    InputNotFound(PathBuf),

    /// The input was read fine but yielded no blockable hostnames.
    #[error("No valid entries found in the input file.")]
    NoValidEntries,

    /// Creating or writing the output file failed.
    #[error("Can't write to file {}: {source}.", .path.display())]
    OutputWrite {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Residual I/O failure while reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;
