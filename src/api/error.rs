use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

/// Client-facing failures. Each one is terminal for its request and is raised
/// before the store is touched.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("ID could not be converted to an integer")]
    InvalidId(String),

    #[error("No post found with specified ID")]
    NotFound(#[from] StoreError),

    #[error("invalid request body")]
    InvalidBody(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidId(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidId(raw) => tracing::warn!("Rejected post id {:?}", raw),
            Self::NotFound(e) => tracing::warn!("Lookup failed: {}", e),
            Self::InvalidBody(e) => tracing::warn!("Malformed request body: {}", e),
        }
        (self.status(), self.to_string()).into_response()
    }
}
