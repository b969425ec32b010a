//! Domain validation errors for competitor records.
//!
//! These errors are returned by `try_new` constructors and by the
//! coercion step that turns semi-structured model output into records.
//!
//! # Examples
//!
//! ```
//! use market_intel::domain::{CompetitorRecord, DomainError, GeographicFocus};
//!
//! let result = CompetitorRecord::try_new("   ", GeographicFocus::Local);
//! assert!(matches!(result, Err(DomainError::EmptyOrganizationName)));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Every competitor needs a display name.
    #[error("organization name cannot be empty")]
    EmptyOrganizationName,

    /// A required field was absent from a raw record.
    #[error("missing required field: {field}")]
    MissingField {
        /// Wire name of the missing field.
        field: &'static str,
    },

    /// A field held a JSON value of the wrong type.
    #[error("invalid type for {field}: {value}")]
    InvalidType {
        /// Wire name of the offending field.
        field: &'static str,
        /// The raw value, rendered as JSON.
        value: String,
    },

    /// A count field held something other than a non-negative integer.
    #[error("invalid count for {field}: {value}")]
    InvalidCount {
        /// Wire name of the offending field.
        field: &'static str,
        /// The raw value, rendered as JSON.
        value: String,
    },

    /// A price field held a negative amount the active policy rejects.
    #[error("negative price for {field}: {value}")]
    NegativePrice {
        /// Wire name of the offending field.
        field: &'static str,
        /// The raw amount.
        value: String,
    },
}
