use axum::{body::Bytes, extract::State, http::StatusCode};
use tracing::{debug, error, warn};

use dolista_types::telegram::Update;

use crate::commands;
use crate::state::{AppState, Context};

/// POST /webhook — entry point for Telegram updates.
///
/// Always answers 200; failures are only logged.
pub async fn handle_update(State(state): State<AppState>, body: Bytes) -> StatusCode {
    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!("Failed to decode request body: {}", e);
            return StatusCode::OK;
        }
    };

    let config = match state.config.load() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return StatusCode::OK;
        }
    };

    let Some(command) = commands::route(update.text()) else {
        debug!("Update {} carries no command", update.update_id);
        return StatusCode::OK;
    };

    debug!("Update {}: {:?} for chat {}", update.update_id, command, update.chat_id());

    let ctx = Context {
        chat_id: update.chat_id(),
        text: update.message.text,
        config,
    };
    command.run(&state, &ctx).await;

    StatusCode::OK
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
