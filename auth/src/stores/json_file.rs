//! JSON-file session store.

use crate::error::{AuthError, Result};
use crate::providers::SessionStore;
use crate::state::SessionRecord;
use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Session store backed by a single JSON document on disk.
///
/// Writes go to a temporary sibling file first and are renamed into place,
/// so a reader never observes a half-written record. Reads are lenient: a
/// missing or unparseable file rehydrates as the empty (logged-out) record.
#[derive(Debug, Clone)]
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    /// Create a store persisting to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
}

impl SessionStore for JsonFileSessionStore {
    fn load(&self) -> impl Future<Output = Result<SessionRecord>> + Send {
        let path = self.path.clone();

        async move {
            match tokio::fs::read(&path).await {
                Ok(bytes) => match serde_json::from_slice(&bytes) {
                    Ok(record) => Ok(record),
                    Err(error) => {
                        tracing::warn!(%error, path = %path.display(), "Discarding unreadable session record");
                        Ok(SessionRecord::default())
                    }
                },
                Err(error) if error.kind() == ErrorKind::NotFound => Ok(SessionRecord::default()),
                Err(error) => Err(AuthError::Storage(error.to_string())),
            }
        }
    }

    fn save(&self, record: &SessionRecord) -> impl Future<Output = Result<()>> + Send {
        let path = self.path.clone();
        let staging = self.staging_path();
        let serialized = serde_json::to_vec_pretty(record).map_err(|e| AuthError::Storage(e.to_string()));

        async move {
            let bytes = serialized?;
            tokio::fs::write(&staging, bytes)
                .await
                .map_err(|e| AuthError::Storage(e.to_string()))?;
            tokio::fs::rename(&staging, &path)
                .await
                .map_err(|e| AuthError::Storage(e.to_string()))
        }
    }

    fn clear(&self) -> impl Future<Output = Result<()>> + Send {
        let path = self.path.clone();

        async move {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => Ok(()),
                Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
                Err(error) => Err(AuthError::Storage(error.to_string())),
            }
        }
    }
}
