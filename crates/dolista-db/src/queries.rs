use crate::Session;
use crate::models::EntryRow;
use anyhow::{Result, anyhow};
use chrono::{DateTime, SecondsFormat, Utc};
use dolista_types::models::Entry;
use uuid::Uuid;

impl Session {
    // -- Summary entries --

    /// Adds an entry to the summary collection. Returns the new entry's id.
    pub fn create_entry(&self, chat_id: i64, message: &str) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let created_at = format_timestamp(self.clock.now());

        self.conn.execute(
            "INSERT INTO summary (id, chat_id, message, created_at) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![&id, chat_id, message, &created_at],
        )?;

        Ok(id)
    }

    /// All entries whose `chat_id` equals the given one, in store order.
    /// Every returned entry carries the same `read_at`, taken when the query
    /// runs.
    pub fn entries_for_chat(&self, chat_id: i64) -> Result<Vec<Entry>> {
        let read_at = self.clock.now();

        let mut stmt = self.conn.prepare(
            "SELECT id, chat_id, message, created_at
             FROM summary
             WHERE chat_id = ?1
             ORDER BY rowid",
        )?;

        let rows = stmt
            .query_map([chat_id], |row| {
                Ok(EntryRow {
                    id: row.get(0)?,
                    chat_id: row.get(1)?,
                    message: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(|row| row.into_entry(read_at)).collect()
    }

    pub fn delete_entry(&self, id: &str) -> Result<()> {
        self.conn.execute("DELETE FROM summary WHERE id = ?1", [id])?;
        Ok(())
    }

    pub fn entry_exists(&self, id: &str) -> Result<bool> {
        let found: Option<i64> = self
            .conn
            .query_row("SELECT 1 FROM summary WHERE id = ?1", [id], |row| row.get(0))
            .optional()?;
        Ok(found.is_some())
    }

    /// Number of entries across all chats, legacy rows included.
    pub fn count_entries(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM summary", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

impl EntryRow {
    fn into_entry(self, read_at: DateTime<Utc>) -> Result<Entry> {
        let chat_id = self
            .chat_id
            .ok_or_else(|| anyhow!("Entry {} has no chat_id", self.id))?;
        let created_at = parse_timestamp(&self.created_at)
            .map_err(|e| anyhow!("Corrupt created_at '{}' on entry '{}': {}", self.created_at, self.id, e))?;

        Ok(Entry {
            id: self.id,
            chat_id,
            text: self.message,
            created_at,
            read_at,
        })
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    raw.parse::<DateTime<Utc>>().or_else(|_| {
        // Rows written by hand through the sqlite shell use datetime('now'):
        // "YYYY-MM-DD HH:MM:SS" without timezone. Parse as naive UTC.
        chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
