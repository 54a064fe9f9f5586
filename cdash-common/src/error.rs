//! Common error types for the catalog dashboard

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for dashboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. Any of these halts rendering of the dashboard.
#[derive(Error, Debug)]
pub enum Error {
    /// The catalog file does not exist at the configured path
    #[error("Data source not found: '{}'", .path.display())]
    DataSourceNotFound { path: PathBuf },

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error that prevents reading the file at all (e.g. bad header)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// File name of the missing data source, for user-facing messages
    pub fn missing_file_name(&self) -> Option<String> {
        match self {
            Error::DataSourceNotFound { path } => Some(
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
            ),
            _ => None,
        }
    }
}

/// Reason a row was dropped during cleaning.
///
/// Recovered locally: the row is skipped and counted, never surfaced to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedRow {
    #[error("row could not be decoded: {0}")]
    Undecodable(String),

    #[error("missing date_added")]
    MissingDate,

    #[error("unparseable date_added '{0}'")]
    UnparseableDate(String),

    #[error("missing rating")]
    MissingRating,

    #[error("missing duration")]
    MissingDuration,
}
