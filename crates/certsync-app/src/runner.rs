//! Event loop: watch events in, debounced syncs out.

use certsync_watch::{Debouncer, WatchEvent, WatchEventKind};
use std::future::Future;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::sync::SyncReason;

/// Feed watch events into `debouncer` until the channel closes or
/// `shutdown` completes.
///
/// Added and changed files schedule a sync; removals are only logged, a
/// file recreated later arrives as `Added` and syncs then.
pub async fn run_until<S>(
    mut events: mpsc::Receiver<WatchEvent>,
    debouncer: &Debouncer<SyncReason>,
    shutdown: S,
) where
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("shutdown requested");
                break;
            }
            event = events.recv() => match event {
                Some(event) if event.should_sync() => {
                    info!("file {} has been {}", event.path.display(), event.kind);
                    debouncer.trigger(SyncReason::FileChanged {
                        path: event.path,
                        kind: event.kind,
                    });
                }
                Some(WatchEvent { path, kind: WatchEventKind::Removed }) => {
                    info!("file {} has been removed, not syncing", path.display());
                }
                Some(_) => {}
                None => {
                    warn!("watch channel closed");
                    break;
                }
            }
        }
    }
}
