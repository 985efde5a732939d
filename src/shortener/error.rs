use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShortenerError {
    #[error("{0}")]
    Validation(String),
    #[error("URL not found")]
    NotFound,
    #[error("no free short code after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },
    #[error("storage failure: {0:#}")]
    Store(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ShortenerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ShortenerError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ShortenerError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ShortenerError::AllocationExhausted { .. } | ShortenerError::Store(_) => {
                tracing::error!(error = %self, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
