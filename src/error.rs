use std::path::PathBuf;
use thiserror::Error;

/// Describes errors in the construction of a [`Sink`](crate::Sink)
/// or in the installation of the `log` facade.
///
/// Per-call logging methods never return errors; write failures are reported
/// to stderr and swallowed.
#[derive(Debug, Error)]
pub enum SvcLogError {
    /// The configured output target is not one of `console`, `file`, `both`.
    #[error("unsupported output type: {0}")]
    UnsupportedOutput(String),

    /// The configured format is not one of `text`, `json`.
    #[error("unknown log format: {0}")]
    UnknownFormat(String),

    /// The configured severity is not one of the known level names.
    #[error("unknown severity level: {0}")]
    UnknownSeverity(String),

    /// A file-backed output target was configured without a file path.
    #[error("file path is required for file output")]
    FilePathRequired,

    /// The log file cannot be opened.
    #[error("failed to open log file {}", .path.display())]
    Io {
        /// The configured file path.
        path: PathBuf,
        /// The underlying open failure.
        #[source]
        source: std::io::Error,
    },

    /// Installing the `log` facade failed because a global logger
    /// was already set.
    #[error(transparent)]
    Log(#[from] log::SetLoggerError),
}
