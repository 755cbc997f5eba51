//! Certificate file locations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Paths of the PEM files that are watched and uploaded together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CertConfig {
    /// Public certificate chain (overridden by `SSL_PUB_PATH`).
    pub public_cert: PathBuf,
    /// Private key (overridden by `SSL_PRI_PATH`).
    pub private_key: PathBuf,
}

impl Default for CertConfig {
    fn default() -> Self {
        Self {
            public_cert: PathBuf::from("test-certs/example.com.cert.pem"),
            private_key: PathBuf::from("test-certs/example.com.key.pem"),
        }
    }
}

impl CertConfig {
    /// Both paths, public certificate first.
    pub fn paths(&self) -> [PathBuf; 2] {
        [self.public_cert.clone(), self.private_key.clone()]
    }
}
