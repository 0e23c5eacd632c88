//! Config hot-reload with file watching and debouncing.

use std::ffi::OsString;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use thiserror::Error;

use crate::config::store::ConfigStore;
use crate::ui::events::AppEvent;

/// Delay after the last file event before a reload is attempted.
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Errors that can occur during config watching.
#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("Failed to create file watcher: {0}")]
    WatcherInit(#[from] notify::Error),

    #[error("Config path has no parent directory")]
    NoParentDir,
}

/// Watches the config file and reloads the store on change.
///
/// Sends `AppEvent::ConfigReload` after a successful reload and
/// `AppEvent::ConfigError` when the new file is rejected. Dropping the
/// watcher closes the raw event channel, which ends the debounce thread.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    _debounce_handle: thread::JoinHandle<()>,
}

impl ConfigWatcher {
    pub fn start(
        store: ConfigStore,
        event_tx: mpsc::Sender<AppEvent>,
        debounce_ms: u64,
    ) -> Result<Self, WatcherError> {
        let config_path = store.path().to_path_buf();
        let watch_dir = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .ok_or(WatcherError::NoParentDir)?
            .to_path_buf();
        let config_filename = config_path
            .file_name()
            .map(|s| s.to_os_string())
            .unwrap_or_default();

        let (raw_tx, raw_rx) = mpsc::channel();
        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                if let Ok(event) = result {
                    let _ = raw_tx.send(event);
                }
            },
            notify::Config::default(),
        )?;

        // Watch the directory so delete-and-recreate saves are seen.
        watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(dir = %watch_dir.display(), "watching config directory");

        let debounce_handle = thread::spawn(move || {
            debounce_loop(raw_rx, store, event_tx, config_filename, debounce_ms);
        });

        Ok(Self {
            _watcher: watcher,
            _debounce_handle: debounce_handle,
        })
    }
}

fn debounce_loop(
    rx: mpsc::Receiver<Event>,
    store: ConfigStore,
    event_tx: mpsc::Sender<AppEvent>,
    config_filename: OsString,
    debounce_ms: u64,
) {
    let debounce = Duration::from_millis(debounce_ms);
    let mut pending_reload: Option<Instant> = None;

    loop {
        let timeout = if pending_reload.is_some() {
            debounce
        } else {
            Duration::from_secs(60)
        };

        match rx.recv_timeout(timeout) {
            Ok(event) => {
                if is_config_event(&event, &config_filename) {
                    pending_reload = Some(Instant::now());
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                let Some(last) = pending_reload else {
                    continue;
                };
                if last.elapsed() < debounce {
                    continue;
                }
                pending_reload = None;
                let outcome = match store.reload() {
                    Ok(()) => {
                        tracing::info!(path = %store.path().display(), "config reloaded");
                        AppEvent::ConfigReload
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "config reload failed, keeping previous");
                        AppEvent::ConfigError(e.to_string())
                    }
                };
                if event_tx.send(outcome).is_err() {
                    break;
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// Whether a notify event touches the config file.
fn is_config_event(event: &Event, config_filename: &OsString) -> bool {
    let relevant = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    );
    if !relevant {
        return false;
    }
    event
        .paths
        .iter()
        .any(|p| p.file_name().is_some_and(|name| name == config_filename))
}
