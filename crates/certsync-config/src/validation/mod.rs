//! Full configuration validation.
//!
//! Runs after env overrides are merged, so missing credentials are caught
//! whichever source they were expected from. All problems are collected
//! into a single `ConfigError`.

mod helpers;


use crate::schema::CertSyncConfig;
use certsync_common::ConfigError;

use helpers::{require_non_empty, validate_range, validate_range_i64};

/// Upper bound for `watch.debounce_ms`.
pub const MAX_DEBOUNCE_MS: i64 = 600_000;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CertSyncConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_cert(&mut errors, config);
    validate_cdn(&mut errors, config);
    validate_range_i64(
        &mut errors,
        "watch.debounce_ms",
        config.watch.debounce_ms,
        0,
        MAX_DEBOUNCE_MS,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_cert(errors: &mut Vec<String>, config: &CertSyncConfig) {
    let cert = &config.cert;
    if cert.public_cert.as_os_str().is_empty() {
        errors.push("cert.public_cert is empty".into());
    }
    if cert.private_key.as_os_str().is_empty() {
        errors.push("cert.private_key is empty".into());
    }
    if !cert.public_cert.as_os_str().is_empty() && cert.public_cert == cert.private_key {
        errors.push("cert.public_cert and cert.private_key point to the same file".into());
    }
}

fn validate_cdn(errors: &mut Vec<String>, config: &CertSyncConfig) {
    let cdn = &config.cdn;
    require_non_empty(errors, "cdn.endpoint", &cdn.endpoint);
    require_non_empty(errors, "cdn.domain_name", &cdn.domain_name);
    require_non_empty(errors, "cdn.cert_name", &cdn.cert_name);
    require_non_empty(errors, "cdn.access_key_id", &cdn.access_key_id);
    require_non_empty(errors, "cdn.access_key_secret", &cdn.access_key_secret);
    if cdn.endpoint.contains("://") {
        errors.push(format!(
            "cdn.endpoint = {} must be a host name without scheme",
            cdn.endpoint
        ));
    }
    validate_range(errors, "cdn.timeout_secs", cdn.timeout_secs, 1, 300);
}
