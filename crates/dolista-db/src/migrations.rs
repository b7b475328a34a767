use anyhow::Result;
use rusqlite::Connection;
use tracing::debug;

/// Brings the schema up to date. Runs on every session open, so each step is
/// idempotent and safe against a concurrent session doing the same.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);")?;

    let version: i64 =
        conn.query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |r| r.get(0))?;

    if version < 1 {
        debug!("Store: running migration v1 (summary collection)");
        conn.execute_batch(
            "
            BEGIN IMMEDIATE;

            CREATE TABLE IF NOT EXISTS summary (
                id          TEXT PRIMARY KEY,
                chat_id     INTEGER,
                message     TEXT NOT NULL,
                created_at  TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_summary_chat
                ON summary(chat_id);

            INSERT INTO schema_version (version)
                SELECT 1 WHERE NOT EXISTS (SELECT 1 FROM schema_version WHERE version >= 1);

            COMMIT;
            ",
        )?;
    }

    Ok(())
}
