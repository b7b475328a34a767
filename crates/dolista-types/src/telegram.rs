use serde::Deserialize;

// -- Inbound webhook payload --

/// Update delivered by Telegram every time a user interacts with the bot.
/// Only the fields the bot reads are modelled; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub update_id: i64,
    /// Absent for non-message updates (edits, callbacks, ...).
    #[serde(default)]
    pub message: Message,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub chat: Chat,
}

/// The conversation a message belongs to. `id` is the partition key for
/// stored summary entries.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Chat {
    pub id: i64,
}

impl Update {
    pub fn chat_id(&self) -> i64 {
        self.message.chat.id
    }

    pub fn text(&self) -> &str {
        &self.message.text
    }
}
