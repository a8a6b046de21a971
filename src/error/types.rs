// src/error/types.rs
use crate::domain::{Atom, Category};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    /// A loader matched zero rows in its category's table.
    #[error("No {category} found for atom {id}")]
    NotFound { category: Category, id: Atom },

    /// Guess lookup exhausted every category.
    #[error("Could not find any entity corresponding to atom {0}")]
    EntityNotFound(Atom),

    #[error("Unrecognized entity type: {0}")]
    UnrecognizedCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// True for both the per-category and the aggregate not-found errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. } | AppError::EntityNotFound(_))
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
