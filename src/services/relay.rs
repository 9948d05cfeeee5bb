use reqwest::Client;
use tracing::{debug, error};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::message::{ChatRequest, ChatResponse};
use crate::services::sim_client::fetch_answer;

/// Turn one chat request into one answer-service call and back.
///
/// Never fails: every problem becomes a `ChatResponse::Error`.
pub async fn relay(client: &Client, config: &RelayConfig, request: ChatRequest) -> ChatResponse {
    debug!(message = ?request.message, "Received message");

    let message = match request.message {
        Some(m) if !m.is_empty() => m,
        _ => {
            error!("No message provided in the request");
            return RelayError::MissingMessage.into();
        }
    };

    match fetch_answer(client, config, &message).await {
        Ok(answer) => ChatResponse::Reply(answer),
        Err(err) => err.into(),
    }
}
