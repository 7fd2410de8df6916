use std::collections::BTreeMap;
use thiserror::Error;

/// Field name -> first failing validation message.
pub type FieldErrors = BTreeMap<String, String>;

/// Failures raised by a [`Storage`](crate::infrastructure::storage::Storage) implementation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// Unique index on `users.email` rejected the write
    #[error("Unique constraint failed on users.email: {0}")]
    EmailTaken(String),

    /// Backend could not serve the call
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum PostboardError {
    /// One or more request fields failed their rules
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// User with given uuid not found
    #[error("User {0} not found")]
    UserNotFound(String),

    /// Email is already registered to a user
    #[error("Email {0} already exists")]
    EmailAlreadyExists(String),

    /// Catch-all for storage and other unexpected failures
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PostboardError {
    pub fn field(field: &str, message: &str) -> Self {
        PostboardError::Validation(FieldErrors::from([(field.to_string(), message.to_string())]))
    }
}

impl From<StorageError> for PostboardError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::EmailTaken(email) => PostboardError::EmailAlreadyExists(email),
            err @ StorageError::Unavailable(_) => PostboardError::UnexpectedError(err.to_string()),
        }
    }
}
