//! Alibaba Cloud CDN client struct and request building.

use certsync_config::schema::CdnConfig;
use std::time::Duration;

use crate::{CdnError, CertificatePair};

use super::signer::{form_encode, Credentials};

pub const API_VERSION: &str = "2018-05-10";
pub const SET_CERTIFICATE_ACTION: &str = "SetCdnDomainSSLCertificate";
pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Alibaba Cloud CDN API client.
pub struct AliyunCdnClient {
    pub(crate) config: CdnConfig,
    pub(crate) credentials: Credentials,
    pub(crate) base_url: String,
    pub(crate) http: reqwest::Client,
}

impl AliyunCdnClient {
    pub fn new(config: &CdnConfig) -> Result<Self, CdnError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(u64::from(config.timeout_secs)))
            .build()
            .map_err(|e| CdnError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            config: config.clone(),
            credentials: Credentials {
                access_key_id: config.access_key_id.clone(),
                access_key_secret: config.access_key_secret.clone(),
            },
            base_url: format!("https://{}", config.endpoint),
            http,
        })
    }

    /// Send requests to `base_url` (scheme and authority) instead of
    /// `https://{endpoint}`. The signed `host` header keeps the endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub(crate) fn url(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// Form body for `SetCdnDomainSSLCertificate`.
    pub(crate) fn build_request_body(&self, pair: &CertificatePair) -> String {
        form_encode([
            ("DomainName", self.config.domain_name.as_str()),
            ("CertName", self.config.cert_name.as_str()),
            ("CertType", self.config.cert_type.as_str()),
            ("SSLProtocol", self.config.ssl_protocol.as_str()),
            ("SSLPub", pair.public_cert.as_str()),
            ("SSLPri", pair.private_key.as_str()),
        ])
    }
}
