use std::sync::Arc;

use dolista_db::Database;
use dolista_types::config::AppConfig;

use crate::config::ConfigSource;
use crate::notifier::Notifier;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub notifier: Arc<dyn Notifier>,
    pub config: ConfigSource,
}

/// Everything a command handler needs to know about the request it serves.
pub struct Context {
    pub chat_id: i64,
    pub text: String,
    pub config: AppConfig,
}
