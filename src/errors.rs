use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("slot ini sudah terbooking")]
    SlotTaken,

    #[error("tidak dapat memproses teks booking")]
    UnparseableBooking,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::SlotTaken => StatusCode::CONFLICT,
            AppError::UnparseableBooking => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
