//! Shared fixtures for handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Result, bail};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::TimeZone;
use tempfile::TempDir;

use dolista_db::Database;
use dolista_db::clock::ManualClock;

use crate::config::ConfigSource;
use crate::notifier::Notifier;
use crate::state::{AppState, AppStateInner, Context};

pub const TOKEN: &str = "123:test-token";
pub const PROJECT: &str = "dolista-test";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sent {
    pub token: String,
    pub chat_id: i64,
    pub text: String,
}

/// Records every reply instead of sending it.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|s| s.text).collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_message(&self, token: &str, chat_id: i64, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent {
            token: token.to_string(),
            chat_id,
            text: text.to_string(),
        });
        Ok(())
    }
}

/// Counts send attempts and fails every one of them.
#[derive(Default)]
pub struct FailingNotifier {
    attempts: AtomicUsize,
}

impl FailingNotifier {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send_message(&self, _token: &str, _chat_id: i64, _text: &str) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        bail!("telegram is down")
    }
}

pub struct Harness {
    pub _dir: TempDir,
    pub clock: Arc<ManualClock>,
    /// Set only when the state sends through a recorder.
    pub notifier: Option<Arc<RecordingNotifier>>,
    pub state: AppState,
}

impl Harness {
    pub fn recorder(&self) -> &RecordingNotifier {
        self.notifier
            .as_deref()
            .expect("harness was built with a custom notifier")
    }

    pub fn db(&self) -> &Database {
        &self.state.db
    }
}

pub fn config_json(project_id: &str) -> String {
    format!(
        r#"{{
            "telegramToken": "{TOKEN}",
            "firebaseConfig": {{ "type": "service_account", "project_id": "{project_id}" }}
        }}"#
    )
}

pub fn encode(json: &str) -> String {
    STANDARD.encode(json)
}

pub fn default_config() -> ConfigSource {
    ConfigSource::Inline(encode(&config_json(PROJECT)))
}

pub fn harness() -> Harness {
    let notifier = Arc::new(RecordingNotifier::default());
    let mut harness = harness_with_config(notifier.clone(), default_config());
    harness.notifier = Some(notifier);
    harness
}

/// Harness whose state sends through `notifier`; the caller keeps its own
/// handle to inspect it.
pub fn harness_with(notifier: Arc<dyn Notifier>) -> Harness {
    harness_with_config(notifier, default_config())
}

pub fn harness_with_config(notifier: Arc<dyn Notifier>, config: ConfigSource) -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let clock = Arc::new(ManualClock::new(
        chrono::Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap(),
    ));
    let state = Arc::new(AppStateInner {
        db: Database::new(dir.path(), clock.clone()),
        notifier,
        config,
    });

    Harness {
        _dir: dir,
        clock,
        notifier: None,
        state,
    }
}

pub fn context(harness: &Harness, chat_id: i64, text: &str) -> Context {
    Context {
        chat_id,
        text: text.to_string(),
        config: harness.state.config.load().unwrap(),
    }
}
