use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{
        StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    response::IntoResponse,
};

use crate::{
    error::AppError,
    message::{RecognizeRequest, RecognizeResponse},
    services::recognizer,
    state::SharedState,
};

pub async fn recognize_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<RecognizeResponse>, AppError> {
    // Checked before the body so a misconfigured server never looks like a client mistake.
    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or(AppError::MissingApiKey)?;

    let payload: RecognizeRequest = serde_json::from_slice(&body).map_err(AppError::InvalidBody)?;

    let image = payload.image().ok_or(AppError::MissingImage)?;

    let text = recognizer::recognize(&state.vision, api_key, image).await?;

    Ok(Json(RecognizeResponse { success: true, text }))
}

pub async fn preflight_handler() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}
