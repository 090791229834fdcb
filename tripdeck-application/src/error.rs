use std::io;

use thiserror::Error;

use tripdeck_core::repositories::Error as RepoError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] tripdeck_core::usecases::Error),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(err.into())
    }
}
