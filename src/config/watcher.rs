//! Hot reload of the route file.
//!
//! The watch sits on the file's parent directory and events are filtered by
//! file name. A watch on the file itself is lost once the file is replaced by
//! a rename.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::RouterConfig;
use crate::config::ConfigError;
use crate::routing::SharedRouteTable;

/// Sends a validated [`RouterConfig`] every time the route file changes.
pub struct ConfigWatcher {
    path: PathBuf,
    updates: mpsc::UnboundedSender<RouterConfig>,
}

impl ConfigWatcher {
    /// Returns the watcher and the receiving end of its config channel.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<RouterConfig>) {
        let (updates, rx) = mpsc::unbounded_channel();
        let watcher = Self {
            path: path.to_path_buf(),
            updates,
        };
        (watcher, rx)
    }

    /// Start watching. Reloads run on notify's thread.
    ///
    /// The watch lasts until the returned handle is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let file_name = self
            .path
            .file_name()
            .map(OsStr::to_os_string)
            .ok_or_else(|| notify::Error::generic("route file path has no file name"))?;
        let dir = watched_dir(&self.path);
        tracing::info!(path = ?self.path, dir = ?dir, "Watching route file");

        let Self { path, updates } = self;
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if names_file(&event, &file_name) => {
                    tracing::debug!(kind = ?event.kind, "Route file changed");
                    reload_from_disk(&path, &updates);
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = %e, "Route file watch failed"),
            },
            Config::default(),
        )?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        Ok(watcher)
    }
}

fn watched_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Whether `event` may have changed the contents of `file_name`.
fn names_file(event: &Event, file_name: &OsStr) -> bool {
    (event.kind.is_modify() || event.kind.is_create())
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name))
}

fn reload_from_disk(path: &Path, updates: &mpsc::UnboundedSender<RouterConfig>) {
    match load_config(path) {
        Ok(config) => {
            if updates.send(config).is_err() {
                tracing::debug!(path = ?path, "Route reload dropped, receiver closed");
            }
        }
        Err(e) => tracing::warn!(
            path = ?path,
            error = %e,
            "Route file rejected, keeping current table"
        ),
    }
}

impl SharedRouteTable<String> {
    /// Compile `config` and publish it, returning the new route count.
    ///
    /// On error nothing is published.
    pub fn reload(&self, config: &RouterConfig) -> Result<usize, ConfigError> {
        let table = config.build_table()?;
        let routes = table.len();
        self.replace(table);
        Ok(routes)
    }
}

/// Reload `shared` from every config on `updates` until the sender goes away.
pub async fn apply_updates(
    shared: Arc<SharedRouteTable<String>>,
    mut updates: mpsc::UnboundedReceiver<RouterConfig>,
) {
    while let Some(config) = updates.recv().await {
        if let Err(e) = shared.reload(&config) {
            tracing::error!(error = %e, "Route reload rejected, keeping current table");
        }
    }
}
