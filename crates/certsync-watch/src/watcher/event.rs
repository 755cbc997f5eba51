//! Watch events and their mapping from raw `notify` events.

use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind};
use std::fmt;
use std::path::PathBuf;

/// What happened to a watched file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEventKind {
    /// File appeared (created, or renamed into place).
    Added,
    /// File contents or metadata changed in place.
    Changed,
    /// File was deleted or renamed away.
    Removed,
}

impl fmt::Display for WatchEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WatchEventKind::Added => "added",
            WatchEventKind::Changed => "changed",
            WatchEventKind::Removed => "removed",
        })
    }
}

/// A change to one of the watched files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEvent {
    pub path: PathBuf,
    pub kind: WatchEventKind,
}

impl WatchEvent {
    /// Whether this event should cause an upload.
    pub fn should_sync(&self) -> bool {
        matches!(self.kind, WatchEventKind::Added | WatchEventKind::Changed)
    }
}

/// Split a raw event into per-path kinds. Access and unknown events are
/// dropped.
pub fn classify(event: &Event) -> Vec<(PathBuf, WatchEventKind)> {
    let single = |kind: WatchEventKind| {
        event
            .paths
            .iter()
            .map(|p| (p.clone(), kind))
            .collect::<Vec<_>>()
    };

    match event.kind {
        EventKind::Create(_) => single(WatchEventKind::Added),
        EventKind::Remove(_) => single(WatchEventKind::Removed),
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) => single(WatchEventKind::Added),
        EventKind::Modify(ModifyKind::Name(RenameMode::From)) => single(WatchEventKind::Removed),
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
            // paths are [from, to]
            let mut out = Vec::with_capacity(2);
            if let Some(from) = event.paths.first() {
                out.push((from.clone(), WatchEventKind::Removed));
            }
            if let Some(to) = event.paths.get(1) {
                out.push((to.clone(), WatchEventKind::Added));
            }
            out
        }
        EventKind::Modify(_) => single(WatchEventKind::Changed),
        EventKind::Access(_) | EventKind::Any | EventKind::Other => Vec::new(),
    }
}
