//! Error types for the domain layer.
//!
//! The phase arithmetic itself is infallible; these errors only come from
//! parsing user-supplied text into domain values.

use thiserror::Error;

/// Errors raised while turning text into domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Date text was not a valid `YYYY-MM-DD` calendar date
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Locale tag is not one we have strings for
    #[error("Unknown locale '{0}', expected one of: da, en")]
    UnknownLocale(String),
}
