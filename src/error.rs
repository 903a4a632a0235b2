//! Error types for influxdb-line.

use thiserror::Error;

/// Error type for line protocol parsing and casting.
#[derive(Error, Debug)]
pub enum Error {
    /// Line has no measurement token, or its section structure is invalid.
    #[error("Malformed line: {0}")]
    MalformedLine(String),

    /// Field value token matches no casting rule and is not a valid number.
    #[error("Cannot cast field value: '{0}'")]
    MalformedCast(String),

    /// Trailing numeric section does not fit an unsigned 64-bit nanosecond
    /// timestamp.
    #[error("Malformed timestamp '{value}': {source}")]
    MalformedTimestamp {
        /// The raw timestamp token.
        value: String,
        /// Underlying integer parse failure.
        source: std::num::ParseIntError,
    },
}

/// Result type alias for influxdb-line operations.
pub type Result<T> = std::result::Result<T, Error>;
