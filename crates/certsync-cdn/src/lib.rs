//! Certificate upload to the CDN.
//!
//! Provides:
//! - [`CertificatePair`]: the PEM texts read from disk
//! - [`CertificateUploader`]: the seam the sync action talks to
//! - [`AliyunCdnClient`]: Alibaba Cloud CDN implementation

pub mod aliyun;
pub mod certificate;

use async_trait::async_trait;
use std::path::PathBuf;

pub use aliyun::AliyunCdnClient;
pub use certificate::CertificatePair;

/// Uploads a certificate pair to a CDN domain.
#[async_trait]
pub trait CertificateUploader: Send + Sync {
    async fn upload(&self, pair: &CertificatePair) -> Result<UploadReceipt, CdnError>;
}

/// Acknowledgement of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub request_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CdnError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("network error: {0}")]
    Network(String),
    #[error("API error (HTTP {status}) {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        /// Diagnosis link returned by the API.
        recommend: Option<String>,
        request_id: Option<String>,
    },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("signing error: {0}")]
    Signing(String),
}

impl CdnError {
    /// Diagnosis link, if the API returned one.
    pub fn recommend(&self) -> Option<&str> {
        match self {
            CdnError::Api { recommend, .. } => recommend.as_deref(),
            _ => None,
        }
    }
}
