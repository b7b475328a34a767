use tokio::task;
use tracing::{error, info};

use crate::notifier::notify;
use crate::state::{AppState, Context};

/// Text to store for an append command: every token after the trigger,
/// rejoined with single spaces. `None` when nothing follows the trigger.
pub fn entry_text(command: &str) -> Option<String> {
    let rest: Vec<&str> = command.split_whitespace().skip(1).collect();
    if rest.is_empty() {
        return None;
    }
    Some(rest.join(" "))
}

pub async fn handle_append(state: &AppState, ctx: &Context) {
    let replies = &ctx.config.replies;

    let Some(text) = entry_text(&ctx.text) else {
        notify(state, ctx, &replies.missing_entry).await;
        return;
    };

    let db = state.db.clone();
    let project_id = ctx.config.service_account.project_id.clone();
    let chat_id = ctx.chat_id;
    let entry = text.clone();

    let result = task::spawn_blocking(move || {
        let session = db.open(&project_id)?;
        session.create_entry(chat_id, &entry)
    })
    .await;

    match result {
        Ok(Ok(id)) => {
            info!("Entry {} added to chat {}", id, chat_id);
            let confirmation = format!("{}{}", replies.append_confirmed, text);
            notify(state, ctx, &confirmation).await;
        }
        Ok(Err(e)) => {
            error!("Failed to add entry to chat {}: {:#}", chat_id, e);
            notify(state, ctx, &replies.append_failed).await;
        }
        Err(e) => {
            error!("spawn_blocking join error: {}", e);
            notify(state, ctx, &replies.append_failed).await;
        }
    }
}
