//! Error types for the parsing entry points.
//!
//! Arithmetic in this crate never fails with an error: degenerate inputs
//! produce NaN or a fixed sentinel value. Only text parsing returns
//! [`Result`].

use thiserror::Error;

/// Errors raised while parsing time units or timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The name does not match any [`TimeUnit`](crate::time::TimeUnit).
    #[error("unknown time unit: {0:?}")]
    UnknownTimeUnit(String),

    /// The input is not an RFC 3339 timestamp.
    #[error("invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp {
        /// Text that failed to parse.
        input: String,
        /// Parser message.
        reason: String,
    },
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
