use crate::infrastructure::storage::StoreError;
use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("retrieving preset: {0}")]
    PresetNotFound(#[source] StoreError),
    #[error("{0}")]
    NotFound(#[source] StoreError),
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl AppError {
    /// Missing records become `NotFound`, anything else is a backend fault.
    pub fn lookup(err: StoreError) -> Self {
        if err.is_not_found() {
            AppError::NotFound(err)
        } else {
            AppError::Storage(err)
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::PresetNotFound(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Backend details are never included.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Storage(_) => "internal storage error".to_string(),
            other => other.to_string(),
        }
    }
}
