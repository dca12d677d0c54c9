//! Error types for epgday-core.
//!
//! Grouping itself never fails: a broadcast time that cannot be parsed puts
//! its record into the undated bucket. These errors surface only from the
//! fallible building blocks (configuration, policy names and explicit
//! parsing).

use thiserror::Error;

/// The main error type for epgday operations.
#[derive(Debug, Error)]
pub enum EpgDayError {
    /// Invalid timezone name provided.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Unknown display locale.
    #[error("Invalid locale: '{0}' (expected 'ru' or 'en')")]
    InvalidLocale(String),

    /// Unknown actionable-day policy.
    #[error("Invalid policy: '{0}' (expected 'first_bucket' or 'skip_elapsed_today')")]
    InvalidPolicy(String),

    /// Error parsing a broadcast timestamp.
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type alias for epgday operations.
pub type Result<T> = std::result::Result<T, EpgDayError>;
