//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// Form validation failures. Display text is shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("⚠️ Please fill in all fields before assessing your risk.")]
    MissingFields,

    #[error("⚠️ {field} must be a number.")]
    NotANumber { field: &'static str },

    #[error("⚠️ All numeric values must be positive numbers.")]
    NonPositive,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] FormError),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Report export failed: {0}")]
    Report(String),

    #[error("Record store error: {0}")]
    Store(String),

    #[error("Terminal UI error: {0}")]
    Ui(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
