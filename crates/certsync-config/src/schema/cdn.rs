//! CDN target and credential configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the CDN should source the certificate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CertType {
    /// Certificate body is uploaded with the request.
    #[default]
    Upload,
    /// Certificate is referenced from the certificate service.
    Cas,
}

impl CertType {
    pub fn as_str(self) -> &'static str {
        match self {
            CertType::Upload => "upload",
            CertType::Cas => "cas",
        }
    }
}

/// Whether HTTPS is enabled on the domain after the upload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SslProtocol {
    #[default]
    On,
    Off,
}

impl SslProtocol {
    pub fn as_str(self) -> &'static str {
        match self {
            SslProtocol::On => "on",
            SslProtocol::Off => "off",
        }
    }
}

/// CDN domain and API credentials.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CdnConfig {
    /// API host, without scheme.
    pub endpoint: String,
    /// Accelerated domain whose certificate is replaced.
    pub domain_name: String,
    pub cert_name: String,
    pub cert_type: CertType,
    pub ssl_protocol: SslProtocol,
    pub access_key_id: String,
    pub access_key_secret: String,
    /// Request timeout in seconds (valid range: 1-300).
    pub timeout_secs: u32,
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            endpoint: "cdn.aliyuncs.com".to_string(),
            domain_name: String::new(),
            cert_name: "acme".to_string(),
            cert_type: CertType::Upload,
            ssl_protocol: SslProtocol::On,
            access_key_id: String::new(),
            access_key_secret: String::new(),
            timeout_secs: 30,
        }
    }
}

impl fmt::Debug for CdnConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CdnConfig")
            .field("endpoint", &self.endpoint)
            .field("domain_name", &self.domain_name)
            .field("cert_name", &self.cert_name)
            .field("cert_type", &self.cert_type)
            .field("ssl_protocol", &self.ssl_protocol)
            .field("access_key_id", &self.access_key_id)
            .field("access_key_secret", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
