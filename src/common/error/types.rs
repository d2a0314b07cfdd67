//! Unified error types for export operations.
use thiserror::Error;

/// Main error type for export operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error raised while writing to the output stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A filename was requested for a task without a name
    #[error("export task has no name")]
    MissingTaskName,

    /// A document factory, document, or sheet implementation failed
    #[error("document sink error: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A sheet was given a name the sink cannot represent
    #[error("invalid sheet name: {0:?}")]
    InvalidSheetName(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wraps a failure raised by a sink collaborator.
    ///
    /// The source error is carried as-is; no retry or translation happens on
    /// the way to the caller.
    pub fn sink<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Sink(Box::new(err))
    }
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, Error>;
