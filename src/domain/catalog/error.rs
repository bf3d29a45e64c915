use axum::http::StatusCode;

use crate::domain::envelope::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("item not found")]
    NotFound,
    #[error("invalid input: {0}")]
    Invalid(String),
}

impl From<CatalogServiceError> for ApiError {
    fn from(err: CatalogServiceError) -> Self {
        let status = match err {
            CatalogServiceError::NotFound => StatusCode::NOT_FOUND,
            CatalogServiceError::Invalid(_) => StatusCode::BAD_REQUEST,
        };
        ApiError::new(i64::from(status.as_u16()), err.to_string())
    }
}
