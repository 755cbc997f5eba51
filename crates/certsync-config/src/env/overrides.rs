//! Environment variable overrides for config fields.

use crate::schema::CertSyncConfig;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Variables that override config fields.
pub const ENV_OVERRIDES: [&str; 5] = [
    "SSL_PUB_PATH",
    "SSL_PRI_PATH",
    "ALIBABA_CLOUD_ACCESS_KEY_ID",
    "ALIBABA_CLOUD_ACCESS_KEY_SECRET",
    "CERTSYNC_DOMAIN_NAME",
];

/// Snapshot of the variables relevant to certsync.
///
/// Process environment wins over the dotenv file.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// Capture the override variables from the process environment,
    /// falling back to `dotenv` for anything unset.
    pub fn capture(dotenv: HashMap<String, String>) -> Self {
        let mut vars = dotenv;
        for key in ENV_OVERRIDES {
            if let Ok(value) = std::env::var(key) {
                vars.insert(key.to_string(), value);
            }
        }
        Self { vars }
    }

    /// Build a source from explicit pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a non-empty value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Apply environment overrides on top of a file-loaded config.
pub fn apply_env_overrides(config: &mut CertSyncConfig, env: &EnvSource) {
    if let Some(path) = env.get("SSL_PUB_PATH") {
        debug!("public certificate path taken from SSL_PUB_PATH");
        config.cert.public_cert = PathBuf::from(path);
    }
    if let Some(path) = env.get("SSL_PRI_PATH") {
        debug!("private key path taken from SSL_PRI_PATH");
        config.cert.private_key = PathBuf::from(path);
    }
    if let Some(id) = env.get("ALIBABA_CLOUD_ACCESS_KEY_ID") {
        config.cdn.access_key_id = id.to_string();
    }
    if let Some(secret) = env.get("ALIBABA_CLOUD_ACCESS_KEY_SECRET") {
        config.cdn.access_key_secret = secret.to_string();
    }
    if let Some(domain) = env.get("CERTSYNC_DOMAIN_NAME") {
        config.cdn.domain_name = domain.to_string();
    }
}
