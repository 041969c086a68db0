// crates/phonebook-core/src/error.rs
use thiserror::Error;

/// Field-level failures raised while building a [`Record`](crate::Record)
/// or [`Address`](crate::Address). Always recoverable: the caller is
/// expected to ask for the value again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid phone number '{0}': expected 10 digits or (ddd)-ddd-dddd")]
    InvalidPhoneNumber(String),

    #[error("invalid state '{0}': expected a US state name or 2-letter code")]
    InvalidState(String),

    #[error("invalid zip code '{0}': expected exactly 5 digits")]
    InvalidZipCode(String),

    #[error("{0} name must not be empty")]
    EmptyName(&'static str),

    #[error("{0} name '{1}' must be a single word")]
    MultiWordName(&'static str, String),
}

/// Errors raised by the phone book and its persistence layer.
#[derive(Debug, Error)]
pub enum PhoneBookError {
    #[error("cannot delete entries from an empty phone book")]
    EmptyCollection,

    #[error("no such entry in this phone book: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T, E = PhoneBookError> = std::result::Result<T, E>;
