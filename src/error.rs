use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Every failure the API can hit. They all surface to the client the same
/// way: a bare 500 with no structured body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid JSON body: {0}")]
    JsonBody(#[from] JsonRejection),

    #[error("Invalid path parameter: {0}")]
    PathParam(#[from] PathRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => tracing::error!("Database error: {}", e),
            AppError::Pool(e) => tracing::error!("Pool error: {}", e),
            AppError::Json(e) => tracing::error!("JSON error: {}", e),
            AppError::JsonBody(e) => tracing::error!("Rejected request body: {}", e),
            AppError::PathParam(e) => tracing::error!("Rejected path parameter: {}", e),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
