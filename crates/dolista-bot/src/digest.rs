use anyhow::Result;
use tokio::task;
use tracing::{debug, error, warn};

use dolista_db::Session;
use dolista_types::config::Replies;
use dolista_types::models::Entry;

use crate::notifier::notify;
use crate::state::{AppState, Context};

/// Entries this old or older are removed the next time a digest sees them.
pub const ENTRY_TTL: chrono::TimeDelta = chrono::TimeDelta::hours(24);

pub async fn handle_digest(state: &AppState, ctx: &Context) {
    let db = state.db.clone();
    let project_id = ctx.config.service_account.project_id.clone();
    let replies = ctx.config.replies.clone();
    let chat_id = ctx.chat_id;

    // The session is opened and dropped inside the blocking task
    let result = task::spawn_blocking(move || {
        let session = db.open(&project_id)?;
        build_digest(&session, chat_id, &replies)
    })
    .await;

    let digest = match result {
        Ok(Ok(digest)) => digest,
        Ok(Err(e)) => {
            error!("Failed to build digest for chat {}: {:#}", chat_id, e);
            return;
        }
        Err(e) => {
            error!("spawn_blocking join error: {}", e);
            return;
        }
    };

    notify(state, ctx, &digest).await;
}

/// Query the chat's entries, delete the expired ones and render the rest
/// oldest first.
pub fn build_digest(session: &Session, chat_id: i64, replies: &Replies) -> Result<String> {
    let entries = session.entries_for_chat(chat_id)?;

    let mut live = Vec::with_capacity(entries.len());
    for entry in entries {
        if !is_expired(&entry) {
            live.push(entry);
            continue;
        }

        match session.delete_entry(&entry.id) {
            Ok(()) => debug!("Expired entry {} removed from chat {}", entry.id, chat_id),
            Err(e) => warn!("Failed to delete expired entry {}: {:#}", entry.id, e),
        }
    }

    // Stable: entries created at the same instant keep store order
    live.sort_by_key(|entry| entry.created_at);

    Ok(render_digest(&live, replies))
}

pub fn is_expired(entry: &Entry) -> bool {
    entry.age() >= ENTRY_TTL
}

pub fn render_digest(entries: &[Entry], replies: &Replies) -> String {
    let lines: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "[{} {}] {}",
                replies.age_label,
                format_elapsed(entry.age()),
                entry.text
            )
        })
        .collect();

    format!("{}{}", replies.digest_header, lines.join("\n"))
}

/// `45min`, `1h30min`. Minutes are floored; negative ages read as `0min`.
pub fn format_elapsed(age: chrono::TimeDelta) -> String {
    let minutes = age.num_minutes().max(0);
    if minutes < 60 {
        return format!("{}min", minutes);
    }
    format!("{}h{}min", minutes / 60, minutes % 60)
}
