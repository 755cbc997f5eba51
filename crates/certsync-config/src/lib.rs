//! certsync configuration system.
//!
//! TOML file, then dotenv and process environment overrides, then
//! validation. The result is built once at startup and handed to the
//! components explicitly.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use certsync_config::{load_config, EnvSource};
//!
//! let env = EnvSource::capture(Default::default());
//! let config = load_config(None, &env).expect("failed to load config");
//! println!("{}", config.cdn.domain_name);
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::{apply_env_overrides, load_dotenv, resolve_dotenv_path, EnvSource};
pub use schema::{CertSyncConfig, CONFIG_SCHEMA_VERSION};

use certsync_common::ConfigError;
use std::path::Path;

/// Load, merge, and validate the config.
///
/// With `path` the file must exist. Without it the platform default is
/// used and created from the template when absent.
pub fn load_config(path: Option<&Path>, env: &EnvSource) -> Result<CertSyncConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    apply_env_overrides(&mut config, env);
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to pretty-printed JSON with the secret redacted.
pub fn config_to_json(config: &CertSyncConfig) -> String {
    let mut redacted = config.clone();
    if !redacted.cdn.access_key_secret.is_empty() {
        redacted.cdn.access_key_secret = "[REDACTED]".to_string();
    }
    serde_json::to_string_pretty(&redacted)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
