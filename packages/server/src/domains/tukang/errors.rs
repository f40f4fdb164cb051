use thiserror::Error;

use crate::domains::tukang::validation::ValidationErrors;
use crate::kernel::StorageError;

/// Failures of the tukang activities, independent of transport
#[derive(Error, Debug)]
pub enum TukangError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Tukang not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type TukangResult<T> = Result<T, TukangError>;
