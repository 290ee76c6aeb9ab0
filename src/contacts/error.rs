use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Please enter a valid number.")]
    InvalidNumber(String),

    #[error("Invalid contact number.")]
    ContactNotFound(i64),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Malformed header: expected Name,Email,Phone, found {0}")]
    MalformedHeader(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input closed")]
    Interrupted,
}

impl ContactsError {
    /// Errors the user can fix by retrying from the menu. Everything else is a
    /// fault that ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ContactsError::Validation(_)
                | ContactsError::InvalidNumber(_)
                | ContactsError::ContactNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ContactsError>;
