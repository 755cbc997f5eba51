//! Core certificate watcher implementation.

use certsync_common::WatchError;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use super::event::{classify, WatchEvent};

/// Watches a fixed set of files and reports changes to them.
#[derive(Debug, Clone)]
pub struct CertWatcher {
    targets: Vec<PathBuf>,
}

/// Keeps the underlying watcher alive; dropping it stops watching.
pub struct WatchGuard {
    _watcher: RecommendedWatcher,
}

impl CertWatcher {
    /// Create a watcher for the given files.
    ///
    /// Relative paths are resolved against the current directory. Files
    /// that do not exist yet are allowed and picked up once created.
    pub fn new<I, P>(targets: I) -> Result<Self, WatchError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut resolved = Vec::new();
        for target in targets {
            let path = absolutize(target.as_ref())?;
            if !path.exists() {
                warn!(
                    "{} does not exist yet, will watch for creation",
                    path.display()
                );
            }
            if !resolved.contains(&path) {
                resolved.push(path);
            }
        }

        if resolved.is_empty() {
            return Err(WatchError::Init("no files to watch".into()));
        }

        Ok(Self { targets: resolved })
    }

    /// Absolute paths being watched.
    pub fn targets(&self) -> &[PathBuf] {
        &self.targets
    }

    /// Start watching, sending matching events on `tx`.
    ///
    /// Events are sent with `try_send`; when the channel is full the event
    /// is dropped, which is harmless since consumers debounce anyway.
    pub fn start(&self, tx: mpsc::Sender<WatchEvent>) -> Result<WatchGuard, WatchError> {
        let targets = self.targets.clone();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    for (path, kind) in classify(&event) {
                        let Some(target) = targets.iter().find(|t| same_file(&path, t)) else {
                            continue;
                        };
                        debug!("{} {kind}", target.display());
                        let event = WatchEvent {
                            path: target.clone(),
                            kind,
                        };
                        if let Err(mpsc::error::TrySendError::Full(event)) = tx.try_send(event) {
                            warn!("watch channel full, dropping {:?}", event);
                        }
                    }
                }
                Err(e) => {
                    error!("watcher error: {e}");
                }
            },
            notify::Config::default(),
        )
        .map_err(|e| WatchError::Init(format!("failed to create watcher: {e}")))?;

        let dirs: BTreeSet<PathBuf> = self
            .targets
            .iter()
            .filter_map(|t| t.parent().map(Path::to_path_buf))
            .collect();

        for dir in &dirs {
            watcher
                .watch(dir, RecursiveMode::NonRecursive)
                .map_err(|e| WatchError::Path {
                    path: dir.clone(),
                    reason: e.to_string(),
                })?;
            info!("watching {}", dir.display());
        }

        info!(
            "initial scan complete, ready for changes to {} file(s)",
            self.targets.len()
        );
        Ok(WatchGuard { _watcher: watcher })
    }
}

fn absolutize(path: &Path) -> Result<PathBuf, WatchError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| WatchError::Path {
        path: path.to_path_buf(),
        reason: format!("cannot resolve relative path: {e}"),
    })?;
    Ok(cwd.join(path))
}

/// Compare an event path with a target. Backends may report canonical
/// directory paths (e.g. through symlinked temp dirs), so parents are
/// compared canonically when the plain comparison fails.
pub(crate) fn same_file(event_path: &Path, target: &Path) -> bool {
    if event_path == target {
        return true;
    }
    if event_path.file_name() != target.file_name() {
        return false;
    }
    match (event_path.parent(), target.parent()) {
        (Some(a), Some(b)) => match (a.canonicalize(), b.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        },
        _ => false,
    }
}
