/// Database row types. These map directly to SQLite rows and stay distinct
/// from the dolista-types models to keep the DB layer independent.

pub struct EntryRow {
    pub id: String,
    /// NULL for legacy rows written before entries were scoped to a chat.
    pub chat_id: Option<i64>,
    pub message: String,
    pub created_at: String,
}
