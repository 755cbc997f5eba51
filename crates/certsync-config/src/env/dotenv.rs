//! Minimal `.env` reader (KEY=VALUE lines).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Pick the dotenv file: explicit path, then `$DOTENV_PATH`, then `./.env`.
pub fn resolve_dotenv_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match std::env::var_os("DOTENV_PATH") {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(".env"),
    }
}

/// Parse dotenv content. Blank lines and `#` comments are skipped, an
/// optional `export ` prefix is accepted, and surrounding quotes are
/// stripped from values.
pub fn parse_dotenv(content: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            vars.insert(key.to_string(), value.to_string());
        }
    }
    vars
}

/// Read a dotenv file. A missing or unreadable file yields no variables.
pub fn load_dotenv(path: &Path) -> HashMap<String, String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let vars = parse_dotenv(&content);
            info!("loaded {} variables from {}", vars.len(), path.display());
            vars
        }
        Err(e) => {
            debug!("no dotenv file at {}: {e}", path.display());
            HashMap::new()
        }
    }
}
