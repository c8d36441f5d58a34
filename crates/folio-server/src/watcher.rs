//! Watching the portfolio data file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use notify::event::{ModifyKind, RenameMode};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Quiet period after the last file event before a change is reported.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Changes to the watched file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// File was written, created or moved into place
    Changed(PathBuf),

    /// File was deleted or moved away
    Removed(PathBuf),
}

/// Watches a single file for changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Watch `file`.
    ///
    /// The parent directory is watched so that editors replacing the file
    /// on save are still seen. Bursts of events are collapsed into the last
    /// one. Returns the watcher and a channel to receive events.
    pub fn new(file: &Path) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let name = file.file_name().map(OsString::from).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("not a file path: {}", file.display()),
            )
        })?;
        let dir = match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(std::io::Error::other)?;

        std::thread::spawn(move || {
            while let Ok(event) = sync_rx.recv() {
                let mut pending = classify_event(&name, &event);

                loop {
                    match sync_rx.recv_timeout(DEBOUNCE) {
                        Ok(event) => {
                            if let Some(e) = classify_event(&name, &event) {
                                pending = Some(e);
                            }
                        }
                        Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                            break
                        }
                    }
                }

                if let Some(e) = pending {
                    if async_tx.blocking_send(e).is_err() {
                        break;
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Classify a notify event affecting the file called `name`.
fn classify_event(name: &OsString, event: &notify::Event) -> Option<WatchEvent> {
    let path = event
        .paths
        .iter()
        .find(|p| p.file_name() == Some(name.as_os_str()))?
        .clone();

    match event.kind {
        EventKind::Remove(_) | EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
            Some(WatchEvent::Removed(path))
        }
        EventKind::Create(_) | EventKind::Modify(_) => Some(WatchEvent::Changed(path)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, RemoveKind};
    use std::fs;
    use tempfile::tempdir;

    fn event(kind: EventKind, path: &str) -> notify::Event {
        notify::Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn classifies_events_for_watched_file() {
        let name = OsString::from("portfolio.yaml");

        let changed = classify_event(
            &name,
            &event(
                EventKind::Modify(ModifyKind::Data(DataChange::Content)),
                "/site/portfolio.yaml",
            ),
        );
        assert_eq!(
            changed,
            Some(WatchEvent::Changed(PathBuf::from("/site/portfolio.yaml")))
        );

        let created = classify_event(
            &name,
            &event(EventKind::Create(CreateKind::File), "/site/portfolio.yaml"),
        );
        assert!(matches!(created, Some(WatchEvent::Changed(_))));

        let removed = classify_event(
            &name,
            &event(EventKind::Remove(RemoveKind::File), "/site/portfolio.yaml"),
        );
        assert!(matches!(removed, Some(WatchEvent::Removed(_))));
    }

    #[test]
    fn ignores_other_files() {
        let name = OsString::from("portfolio.yaml");
        let other = classify_event(
            &name,
            &event(EventKind::Create(CreateKind::File), "/site/avatar.png"),
        );
        assert_eq!(other, None);
    }

    #[tokio::test]
    async fn watches_file_changes() {
        let temp = tempdir().unwrap();
        let data_file = temp.path().join("portfolio.yaml");
        fs::write(&data_file, "personalInfo: {}").unwrap();

        let (watcher, mut rx) = FileWatcher::new(&data_file).unwrap();

        // Give inotify time to set up
        tokio::time::sleep(Duration::from_millis(100)).await;

        fs::write(&data_file, "personalInfo:\n  name: Ada\n").unwrap();

        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await;

        drop(watcher);

        assert!(event.is_ok(), "timeout waiting for file watch event");
        assert!(matches!(event.unwrap(), Some(WatchEvent::Changed(_))));
    }
}
