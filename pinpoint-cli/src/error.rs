//! Error types emitted by the Pinpoint CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use pinpoint_data::RoundFileError;
use thiserror::Error;

/// Errors emitted by the Pinpoint CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// An option holds a value outside its accepted set.
    #[error("invalid {field} (set --{field} or {env}): {reason}")]
    InvalidArgument {
        /// Offending option.
        field: &'static str,
        /// Environment variable that can also supply it.
        env: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The round could not be loaded.
    #[error(transparent)]
    Round(#[from] RoundFileError),
    /// Reading commands or writing output failed.
    #[error("terminal IO failed: {0}")]
    Terminal(#[source] std::io::Error),
}
