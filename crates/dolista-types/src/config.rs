use std::fmt;

use serde::Deserialize;

/// Application config carried (base64-encoded) in the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(rename = "telegramToken")]
    pub telegram_token: String,
    #[serde(rename = "firebaseConfig")]
    pub service_account: ServiceAccount,
    #[serde(default)]
    pub replies: Replies,
}

/// Service-account credential for the document store, kept in its native
/// JSON shape.
#[derive(Clone, Deserialize)]
pub struct ServiceAccount {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub project_id: String,
    #[serde(default)]
    pub private_key_id: String,
    #[serde(default)]
    pub private_key: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub auth_uri: String,
    #[serde(default)]
    pub token_uri: String,
    #[serde(default)]
    pub auth_provider_x509_cert_url: String,
    #[serde(default)]
    pub client_x509_cert_url: String,
}

// Keys never end up in logs.
impl fmt::Debug for ServiceAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("kind", &self.kind)
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .finish_non_exhaustive()
    }
}

/// User-facing reply literals. Any subset can be overridden from the config
/// blob's `replies` object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Replies {
    pub hello: String,
    pub safada: String,
    pub digest_header: String,
    pub age_label: String,
    pub missing_entry: String,
    pub append_failed: String,
    pub append_confirmed: String,
}

impl Default for Replies {
    fn default() -> Self {
        Self {
            hello: "hello!".into(),
            safada: "É você!".into(),
            digest_header: "Resumo: \n\n".into(),
            age_label: "Há".into(),
            missing_entry: "Safado! Cadê a mensagem pra adicionar no resumo?".into(),
            append_failed: "Ops! O código do Caio não funcionou :)".into(),
            append_confirmed: "Adicionado ao resumo: ".into(),
        }
    }
}
