//! Connection profile registry and JSON persistence

use std::collections::HashSet;
use std::path::PathBuf;

use keel_core::{KeelError, Result};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::config::SavedConnection;
use crate::naming;
use crate::paths;

#[cfg(test)]
mod tests;

/// Registry of saved connection profiles.
///
/// Mutations are synchronous and in-memory; the storage file is only read
/// or written through the explicit async
/// [`load_from_storage`](Self::load_from_storage) and
/// [`save_to_storage`](Self::save_to_storage) calls, so callers decide when
/// disk IO happens.
pub struct ConnectionStore {
    saved: RwLock<Vec<SavedConnection>>,
    storage_path: Option<PathBuf>,
}

impl ConnectionStore {
    /// An in-memory store with no backing file.
    pub fn new() -> Self {
        Self {
            saved: RwLock::new(Vec::new()),
            storage_path: None,
        }
    }

    pub fn with_storage_path(path: PathBuf) -> Self {
        Self {
            saved: RwLock::new(Vec::new()),
            storage_path: Some(path),
        }
    }

    /// Store backed by the per-user connections file.
    pub fn with_default_storage_path() -> Result<Self> {
        let path =
            paths::connections_file().map_err(|e| KeelError::Configuration(e.to_string()))?;
        Ok(Self::with_storage_path(path))
    }

    pub fn add(&self, connection: SavedConnection) {
        self.saved.write().push(connection);
    }

    /// Replace the stored profile with the same id.
    pub fn update(&self, connection: SavedConnection) -> Result<()> {
        let mut saved = self.saved.write();
        match saved.iter_mut().find(|c| c.id == connection.id) {
            Some(existing) => {
                *existing = connection;
                Ok(())
            }
            None => Err(KeelError::NotFound(format!("connection {}", connection.id))),
        }
    }

    /// Remove a profile, returning it so the caller can clean up its secret.
    pub fn remove(&self, id: Uuid) -> Result<SavedConnection> {
        let mut saved = self.saved.write();
        match saved.iter().position(|c| c.id == id) {
            Some(index) => Ok(saved.remove(index)),
            None => Err(KeelError::NotFound(format!("connection {id}"))),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<SavedConnection> {
        self.saved.read().iter().find(|c| c.id == id).cloned()
    }

    /// All profiles, most recently used first. Profiles never used sort
    /// after the used ones, newest created first.
    pub fn list(&self) -> Vec<SavedConnection> {
        let mut connections = self.saved.read().clone();
        connections.sort_by_key(|c| std::cmp::Reverse((c.last_used_at, c.created_at)));
        connections
    }

    /// Record a successful connect against a profile.
    pub fn touch(&self, id: Uuid) -> Result<()> {
        let mut saved = self.saved.write();
        match saved.iter_mut().find(|c| c.id == id) {
            Some(connection) => {
                connection.mark_used();
                Ok(())
            }
            None => Err(KeelError::NotFound(format!("connection {id}"))),
        }
    }

    /// Names currently in use, as the seen-set for name suggestion.
    pub fn names(&self) -> HashSet<String> {
        self.saved.read().iter().map(|c| c.name.clone()).collect()
    }

    /// Suggest a profile name not colliding with any stored one.
    pub fn suggest_name(&self) -> String {
        naming::suggest_name(&self.names())
    }

    pub fn len(&self) -> usize {
        self.saved.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.read().is_empty()
    }

    /// Load profiles from the storage file, replacing in-memory state.
    ///
    /// A missing file is not an error; the store simply starts empty.
    #[tracing::instrument(skip(self))]
    pub async fn load_from_storage(&self) -> Result<()> {
        tracing::debug!("loading connections from storage");
        if let Some(ref path) = self.storage_path
            && path.exists()
        {
            let contents = tokio::fs::read_to_string(path).await?;
            let connections: Vec<SavedConnection> = serde_json::from_str(&contents)?;

            tracing::info!(count = connections.len(), "connections loaded from storage");
            *self.saved.write() = connections;
        } else {
            tracing::debug!("no storage path configured or file doesn't exist");
        }
        Ok(())
    }

    /// Write all profiles to the storage file. No-op for path-less stores.
    #[tracing::instrument(skip(self))]
    pub async fn save_to_storage(&self) -> Result<()> {
        tracing::debug!("saving connections to storage");
        if let Some(ref path) = self.storage_path {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let connections = self.saved.read().clone();
            let contents = serde_json::to_string_pretty(&connections)?;
            tokio::fs::write(path, contents).await?;

            tracing::info!(count = connections.len(), path = ?path, "connections saved to storage");
        } else {
            tracing::debug!("no storage path configured");
        }
        Ok(())
    }
}

impl Default for ConnectionStore {
    fn default() -> Self {
        Self::new()
    }
}
