//! Error types shared between client and server.
//!
//! The `QuoteError` enum is the single failure taxonomy for every hop of the
//! quote chain. Both binaries classify outbound HTTP failures the same way, and
//! the server adds the storage conditions. Every message renders on one line.
use std::io;
use std::sync::PoisonError;
use std::time::Duration;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The outbound request could not be built (invalid URL and the like).
    #[error("failed to prepare the request: {0}")]
    Prepare(String),

    /// The deadline guarding the operation elapsed before it completed.
    #[error("deadline of {}ms exceeded while performing the request", .0.as_millis())]
    Timeout(Duration),

    /// Any other transport failure (connection refused, reset, TLS...).
    #[error("failed to perform the request: {0}")]
    Request(String),

    /// The peer answered with something other than `200 OK`.
    #[error("request failed, invalid HTTP status: {0}")]
    InvalidStatus(u16),

    /// The response body could not be read to the end.
    #[error("failed to read the response body: {0}")]
    Read(String),

    /// The response body is not the expected JSON shape.
    #[error("failed to decode the response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The quote store rejected the insert.
    #[error("failed to record the quote: {0}")]
    Storage(String),

    /// The quote store did not finish the insert in time.
    #[error("deadline of {}ms exceeded while recording the quote", .0.as_millis())]
    StorageTimeout(Duration),

    /// I/O error originating from sockets or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

impl QuoteError {
    /// Returns `true` for either deadline condition.
    pub fn is_timeout(&self) -> bool {
        matches!(self, QuoteError::Timeout(_) | QuoteError::StorageTimeout(_))
    }
}

impl<T> From<PoisonError<T>> for QuoteError {
    fn from(err: PoisonError<T>) -> Self {
        QuoteError::MutexLock(err.to_string())
    }
}
