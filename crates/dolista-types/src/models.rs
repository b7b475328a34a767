use chrono::{DateTime, TimeDelta, Utc};

/// A summary entry as observed by a store query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Store reference, used for deletion.
    pub id: String,
    pub chat_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Server time of the query that returned this entry. Not stored.
    pub read_at: DateTime<Utc>,
}

impl Entry {
    /// Time elapsed between creation and the read that observed the entry.
    pub fn age(&self) -> TimeDelta {
        self.read_at - self.created_at
    }
}
