use std::sync::Arc;

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::{app_state::AppState, json::JsonPayload},
    app_error::AppResult,
    use_cases::waitlist::{VerifyOutcome, WaitlistUseCases},
};

// Missing fields deserialize to None and are rejected by the use cases.
#[derive(Deserialize)]
struct JoinPayload {
    name: Option<String>,
    email: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerifyPayload {
    email: Option<String>,
    verification_code: Option<String>,
}

#[derive(Serialize)]
struct MessageResponse {
    success: bool,
    message: &'static str,
}

impl MessageResponse {
    fn ok(message: &'static str) -> Json<Self> {
        Json(Self {
            success: true,
            message,
        })
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/waitlist", post(join))
        .route("/verify", post(verify))
}

/// POST /api/waitlist
async fn join(
    State(waitlist): State<Arc<WaitlistUseCases>>,
    JsonPayload(payload): JsonPayload<JoinPayload>,
) -> AppResult<impl IntoResponse> {
    waitlist
        .join(
            payload.name.as_deref().unwrap_or_default(),
            payload.email.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        MessageResponse::ok("Successfully joined the waitlist. Please check your email to verify."),
    ))
}

/// POST /api/verify
async fn verify(
    State(waitlist): State<Arc<WaitlistUseCases>>,
    JsonPayload(payload): JsonPayload<VerifyPayload>,
) -> AppResult<impl IntoResponse> {
    let outcome = waitlist
        .verify(
            payload.email.as_deref().unwrap_or_default(),
            payload.verification_code.as_deref().unwrap_or_default(),
        )
        .await?;

    let message = match outcome {
        VerifyOutcome::Verified => "Email successfully verified",
        VerifyOutcome::AlreadyVerified => "Email already verified",
    };
    Ok((StatusCode::OK, MessageResponse::ok(message)))
}
