//! Configuration schema types for certsync.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod cdn;
mod cert;
mod logging;
mod watch;

pub use cdn::*;
pub use cert::*;
pub use logging::*;
pub use watch::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for certsync.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CertSyncConfig {
    pub cert: CertConfig,
    pub cdn: CdnConfig,
    pub watch: WatchConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = CertSyncConfig::default();
        assert_eq!(config.cdn.endpoint, "cdn.aliyuncs.com");
        assert_eq!(config.cdn.cert_name, "acme");
        assert_eq!(config.cdn.cert_type, CertType::Upload);
        assert_eq!(config.cdn.ssl_protocol, SslProtocol::On);
        assert_eq!(config.watch.debounce_ms, 1000);
        assert!(config.watch.sync_on_start);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: CertSyncConfig = toml::from_str(
            r#"
[cdn]
domain_name = "cdn.example.com"
cert_type = "cas"
"#,
        )
        .unwrap();
        assert_eq!(config.cdn.domain_name, "cdn.example.com");
        assert_eq!(config.cdn.cert_type, CertType::Cas);
        assert_eq!(config.cdn.cert_name, "acme");
        assert_eq!(config.watch, WatchConfig::default());
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let result: Result<CertSyncConfig, _> = toml::from_str(
            r#"
[cdn]
ssl_protocol = "maybe"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn cdn_debug_redacts_secret() {
        let mut config = CdnConfig::default();
        config.access_key_secret = "super-secret".into();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn wire_names_of_enums() {
        assert_eq!(CertType::Upload.as_str(), "upload");
        assert_eq!(CertType::Cas.as_str(), "cas");
        assert_eq!(SslProtocol::On.as_str(), "on");
        assert_eq!(SslProtocol::Off.as_str(), "off");
        assert_eq!(LogLevel::Warn.as_str(), "warn");
    }
}
