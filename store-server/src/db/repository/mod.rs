//! Repository layer: plain async functions over `&SqlitePool`.
//!
//! Handlers own the HTTP envelope; everything in here speaks
//! [`RepoError`] and leaves status-code mapping to `utils::error`.

use thiserror::Error;

pub mod customer;
pub mod feedback;
pub mod order;
pub mod product;
pub mod store;
pub mod user;

/// Repository error
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

pub type RepoResult<T> = Result<T, RepoError>;
