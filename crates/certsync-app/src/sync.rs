//! The sync action: read the certificate pair and upload it.

use certsync_cdn::{CdnError, CertificatePair, CertificateUploader, UploadReceipt};
use certsync_common::DebounceError;
use certsync_config::schema::CertConfig;
use certsync_watch::{Debouncer, FailureObserver, QuietPeriod, WatchEventKind};
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Why a sync was scheduled. Only the latest reason in a burst survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncReason {
    Startup,
    FileChanged { path: PathBuf, kind: WatchEventKind },
}

impl fmt::Display for SyncReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncReason::Startup => f.write_str("startup"),
            SyncReason::FileChanged { path, kind } => write!(f, "{} {kind}", path.display()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Cdn(#[from] CdnError),
}

/// Uploads the configured certificate pair.
pub struct CertSync {
    public_cert: PathBuf,
    private_key: PathBuf,
    uploader: Arc<dyn CertificateUploader>,
}

impl CertSync {
    pub fn new(cert: &CertConfig, uploader: Arc<dyn CertificateUploader>) -> Self {
        Self {
            public_cert: cert.public_cert.clone(),
            private_key: cert.private_key.clone(),
            uploader,
        }
    }

    pub async fn run(&self, reason: SyncReason) -> Result<UploadReceipt, SyncError> {
        info!(%reason, "syncing certificate");
        let pair = CertificatePair::read(&self.public_cert, &self.private_key).await?;
        let receipt = self.uploader.upload(&pair).await?;
        info!(request_id = %receipt.request_id, "certificate uploaded");
        Ok(receipt)
    }
}

/// Logs failed syncs, including the API's diagnosis link when present.
#[derive(Debug, Default)]
pub struct ReportSyncFailure;

impl FailureObserver for ReportSyncFailure {
    fn action_failed(&self, error: &(dyn Error + Send + Sync + 'static)) {
        match error.downcast_ref::<SyncError>() {
            Some(SyncError::Cdn(cdn)) => match cdn.recommend() {
                Some(recommend) => error!(error = %cdn, %recommend, "certificate sync failed"),
                None => error!(error = %cdn, "certificate sync failed"),
            },
            None => error!(error = %error, "certificate sync failed"),
        }
    }
}

/// Wrap `sync` in a debouncer that reports failures through
/// [`ReportSyncFailure`].
pub fn debounced(
    sync: Arc<CertSync>,
    quiet: QuietPeriod,
) -> Result<Debouncer<SyncReason>, DebounceError> {
    Debouncer::with_observer(
        quiet,
        move |reason: SyncReason| {
            let sync = Arc::clone(&sync);
            async move { sync.run(reason).await.map(|_| ()) }
        },
        Arc::new(ReportSyncFailure),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct MemoryUploader {
        uploads: Mutex<Vec<CertificatePair>>,
        fail_with_code: Option<&'static str>,
    }

    #[async_trait]
    impl CertificateUploader for MemoryUploader {
        async fn upload(&self, pair: &CertificatePair) -> Result<UploadReceipt, CdnError> {
            if let Some(code) = self.fail_with_code {
                return Err(CdnError::Api {
                    status: 400,
                    code: code.to_string(),
                    message: "rejected".into(),
                    recommend: None,
                    request_id: None,
                });
            }
            let mut uploads = self.uploads.lock().unwrap();
            uploads.push(pair.clone());
            Ok(UploadReceipt {
                request_id: format!("req-{}", uploads.len()),
            })
        }
    }

    fn cert_files(dir: &tempfile::TempDir) -> CertConfig {
        let cert = CertConfig {
            public_cert: dir.path().join("cert.pem"),
            private_key: dir.path().join("key.pem"),
        };
        std::fs::write(&cert.public_cert, "CERT v1").unwrap();
        std::fs::write(&cert.private_key, "KEY v1").unwrap();
        cert
    }

    #[tokio::test]
    async fn run_uploads_current_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let cert = cert_files(&dir);
        let uploader = Arc::new(MemoryUploader::default());
        let sync = CertSync::new(&cert, uploader.clone());

        let receipt = sync.run(SyncReason::Startup).await.unwrap();
        assert_eq!(receipt.request_id, "req-1");

        let uploads = uploader.uploads.lock().unwrap();
        assert_eq!(uploads[0].public_cert, "CERT v1");
        assert_eq!(uploads[0].private_key, "KEY v1");
    }

    #[tokio::test]
    async fn missing_file_fails_without_upload() {
        let dir = tempfile::tempdir().unwrap();
        let cert = cert_files(&dir);
        std::fs::remove_file(&cert.private_key).unwrap();
        let uploader = Arc::new(MemoryUploader::default());
        let sync = CertSync::new(&cert, uploader.clone());

        let err = sync.run(SyncReason::Startup).await.unwrap_err();
        assert!(matches!(err, SyncError::Cdn(CdnError::Io { .. })));
        assert!(uploader.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn uploader_failure_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        let cert = cert_files(&dir);
        let uploader = Arc::new(MemoryUploader {
            fail_with_code: Some("InvalidSSLPub"),
            ..MemoryUploader::default()
        });
        let sync = CertSync::new(&cert, uploader);

        let err = sync.run(SyncReason::Startup).await.unwrap_err();
        assert!(err.to_string().contains("InvalidSSLPub"));
    }

    #[tokio::test]
    async fn debounced_burst_uploads_latest_contents_once() {
        let dir = tempfile::tempdir().unwrap();
        let cert = cert_files(&dir);
        let uploader = Arc::new(MemoryUploader::default());
        let sync = Arc::new(CertSync::new(&cert, uploader.clone()));
        let debouncer = debounced(sync, QuietPeriod::new(Duration::from_millis(50))).unwrap();

        debouncer.trigger(SyncReason::Startup);
        std::fs::write(&cert.public_cert, "CERT v2").unwrap();
        debouncer.trigger(SyncReason::FileChanged {
            path: cert.public_cert.clone(),
            kind: WatchEventKind::Changed,
        });
        std::fs::write(&cert.private_key, "KEY v2").unwrap();
        debouncer.trigger(SyncReason::FileChanged {
            path: cert.private_key.clone(),
            kind: WatchEventKind::Changed,
        });

        tokio::time::sleep(Duration::from_millis(500)).await;

        let uploads = uploader.uploads.lock().unwrap();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].public_cert, "CERT v2");
        assert_eq!(uploads[0].private_key, "KEY v2");
    }

    #[test]
    fn reason_display() {
        assert_eq!(SyncReason::Startup.to_string(), "startup");
        let reason = SyncReason::FileChanged {
            path: PathBuf::from("/c/key.pem"),
            kind: WatchEventKind::Removed,
        };
        assert_eq!(reason.to_string(), "/c/key.pem removed");
    }

    #[test]
    fn observer_accepts_foreign_errors() {
        let err = std::io::Error::other("not a sync error");
        ReportSyncFailure.action_failed(&err);
    }
}
