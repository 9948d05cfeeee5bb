use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::relay::relay,
    state::SharedState,
};

/// `POST /chat`. Relay outcomes, errors included, are always 200.
pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    let response = relay(&state.client, &state.relay, request).await;
    Ok(Json(response))
}
