use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        match self {
            AppError::InvalidInput(msg) => {
                tracing::warn!(error = %msg, "Rejected invalid input");
                error_resp(StatusCode::BAD_REQUEST, code, &msg)
            }
            AppError::DuplicateEmail => error_resp(
                StatusCode::BAD_REQUEST,
                code,
                "Email already exists in the waitlist",
            ),
            AppError::NotFound => error_resp(
                StatusCode::BAD_REQUEST,
                code,
                "Invalid email or verification code",
            ),
            err @ AppError::EmailDelivery(_) => {
                tracing::error!(error = ?err, "Request failed");
                error_resp(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    code,
                    "Failed to send verification email. Please try again.",
                )
            }
            err @ AppError::Database(_) => {
                tracing::error!(error = ?err, "Request failed");
                error_resp(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    code,
                    "A database error occurred. Please try again.",
                )
            }
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: &str) -> Response {
    let body = serde_json::json!({
        "success": false,
        "error": message,
        "code": code.as_str(),
    });
    (status, Json(body)).into_response()
}
