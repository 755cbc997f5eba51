//! certsync: watch a TLS certificate and key, upload them to the CDN
//! whenever they change.

mod cli;
mod logging;
mod runner;
mod sync;

use certsync_cdn::AliyunCdnClient;
use certsync_common::CertSyncError;
use certsync_config::{config_to_json, load_config, load_dotenv, resolve_dotenv_path, EnvSource};
use certsync_watch::{CertWatcher, QuietPeriod};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::sync::{CertSync, SyncReason};

/// Capacity of the watcher → event loop channel.
const WATCH_CHANNEL_CAPACITY: usize = 64;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("certsync: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: cli::Args) -> Result<(), CertSyncError> {
    // Environment is read once, here.
    let dotenv_path = resolve_dotenv_path(args.env_file.as_deref());
    let env = EnvSource::capture(load_dotenv(&dotenv_path));
    let config = load_config(args.config.as_deref(), &env)?;

    if args.print_config {
        println!("{}", config_to_json(&config));
        return Ok(());
    }

    logging::init(args.log_level.as_deref(), &config.logging);
    tracing::info!("certsync v{} starting...", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        domain = %config.cdn.domain_name,
        public_cert = %config.cert.public_cert.display(),
        private_key = %config.cert.private_key.display(),
        "config loaded"
    );

    let client = AliyunCdnClient::new(&config.cdn)
        .map_err(|e| CertSyncError::Other(format!("failed to create CDN client: {e}")))?;
    let sync = Arc::new(CertSync::new(&config.cert, Arc::new(client)));

    if args.once {
        sync.run(SyncReason::Startup)
            .await
            .map_err(|e| CertSyncError::Other(format!("certificate sync failed: {e}")))?;
        return Ok(());
    }

    let quiet = QuietPeriod::from_millis(config.watch.debounce_ms)?;
    let debouncer = sync::debounced(sync, quiet)?;

    let watcher = CertWatcher::new(config.cert.paths())?;
    let (tx, rx) = mpsc::channel(WATCH_CHANNEL_CAPACITY);
    let guard = watcher.start(tx)?;

    // Catch up on changes made while we were not running.
    if config.watch.sync_on_start {
        debouncer.trigger(SyncReason::Startup);
    }

    tracing::info!(quiet_period = %quiet, "watching for certificate changes");
    runner::run_until(rx, &debouncer, shutdown_signal()).await;

    drop(guard);
    if debouncer.is_pending() {
        tracing::info!("discarding pending sync on shutdown");
    }
    drop(debouncer);
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
