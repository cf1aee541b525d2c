//! Error types emitted by the `cityrank` CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use cityrank_core::{ConfigError, PreferenceError, RankingError};
use cityrank_data::CsvSourceError;
use thiserror::Error;

/// Errors emitted by the `cityrank` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the option.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Importance weights failed validation.
    #[error("invalid ranking configuration: {0}")]
    InvalidWeights(#[from] ConfigError),
    /// The city table could not be loaded.
    #[error("failed to load city table from {path:?}: {source}")]
    LoadTable {
        /// CSV file that was read.
        path: Utf8PathBuf,
        /// Underlying loader failure.
        #[source]
        source: CsvSourceError,
    },
    /// Amenity selections did not match the table's catalog.
    #[error(transparent)]
    Preference(#[from] PreferenceError),
    /// Ranking the table failed.
    #[error("ranking failed: {0}")]
    Ranking(#[from] RankingError),
    /// Serialising the rankings failed.
    #[error("failed to serialise rankings: {0}")]
    SerialiseRankings(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Installing the terminal logger failed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] log::SetLoggerError),
}
