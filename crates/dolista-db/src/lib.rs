pub mod clock;
pub mod migrations;
pub mod models;
pub mod queries;

use anyhow::{Result, bail};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::clock::Clock;

/// Opens store sessions. One SQLite file per credential project lives under
/// `dir`; nothing is held open between sessions.
#[derive(Clone)]
pub struct Database {
    dir: PathBuf,
    clock: Arc<dyn Clock>,
}

/// A connection acquired for a single request. The connection closes when
/// the session is dropped, on every exit path.
pub struct Session {
    conn: Connection,
    clock: Arc<dyn Clock>,
    project_id: String,
}

impl Database {
    pub fn new(dir: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self { dir: dir.into(), clock }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Database file backing the given project.
    pub fn path_for(&self, project_id: &str) -> PathBuf {
        self.dir.join(format!("{}.db", project_id))
    }

    pub fn open(&self, project_id: &str) -> Result<Session> {
        if !is_valid_project_id(project_id) {
            bail!("Invalid project id: {:?}", project_id);
        }

        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(project_id);
        let conn = Connection::open(&path)?;

        // WAL mode for concurrent readers across requests
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.busy_timeout(Duration::from_secs(5))?;

        migrations::run(&conn)?;

        debug!("Store session opened at {}", path.display());
        Ok(Session {
            conn,
            clock: self.clock.clone(),
            project_id: project_id.to_string(),
        })
    }
}

impl Session {
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!("Store session closed for {}", self.project_id);
    }
}

/// Project ids become file names, so only a conservative charset is allowed.
fn is_valid_project_id(project_id: &str) -> bool {
    !project_id.is_empty()
        && project_id.len() <= 128
        && project_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
