//! Reading the certificate pair from disk.

use std::fmt;
use std::path::Path;

use crate::CdnError;

/// Public certificate chain and private key, as PEM text.
///
/// The contents are passed through untouched; no parsing or validation.
#[derive(Clone, PartialEq, Eq)]
pub struct CertificatePair {
    pub public_cert: String,
    pub private_key: String,
}

impl fmt::Debug for CertificatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CertificatePair")
            .field("public_cert_len", &self.public_cert.len())
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl CertificatePair {
    /// Read both files concurrently.
    pub async fn read(public_cert: &Path, private_key: &Path) -> Result<Self, CdnError> {
        let (public_cert, private_key) =
            tokio::try_join!(read_text(public_cert), read_text(private_key))?;
        Ok(Self {
            public_cert,
            private_key,
        })
    }
}

async fn read_text(path: &Path) -> Result<String, CdnError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CdnError::Io {
            path: path.to_path_buf(),
            source,
        })
}
