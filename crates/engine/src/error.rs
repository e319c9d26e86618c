//! The module contains the error the engine can throw.
//!
//! [`KeyNotFound`] covers both a missing resource and a resource owned by a
//! different caller: the two conditions are indistinguishable from the
//! outside.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid parent: {0}")]
    InvalidParent(String),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Duplicate identifier: {0}")]
    DuplicateId(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::InvalidParent(a), Self::InvalidParent(b)) => a == b,
            (Self::CategoryNotFound(a), Self::CategoryNotFound(b)) => a == b,
            (Self::DuplicateId(a), Self::DuplicateId(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
