//! Mock session store.

use crate::error::{AuthError, Result};
use crate::providers::SessionStore;
use crate::state::SessionRecord;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// In-memory session store.
///
/// Clones share the same record, so a test can hand the store to an
/// environment and still inspect what was persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    record: Arc<Mutex<SessionRecord>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> impl Future<Output = Result<SessionRecord>> + Send {
        let record = Arc::clone(&self.record);

        async move {
            record
                .lock()
                .map(|guard| guard.clone())
                .map_err(|_| AuthError::Storage("session record lock poisoned".to_string()))
        }
    }

    fn save(&self, record: &SessionRecord) -> impl Future<Output = Result<()>> + Send {
        let stored = Arc::clone(&self.record);
        let record = record.clone();

        async move {
            let mut guard = stored
                .lock()
                .map_err(|_| AuthError::Storage("session record lock poisoned".to_string()))?;
            *guard = record;
            Ok(())
        }
    }

    fn clear(&self) -> impl Future<Output = Result<()>> + Send {
        let stored = Arc::clone(&self.record);

        async move {
            let mut guard = stored
                .lock()
                .map_err(|_| AuthError::Storage("session record lock poisoned".to_string()))?;
            *guard = SessionRecord::default();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UserInfo;

    #[tokio::test]
    async fn save_load_clear_round_trip() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.load().await.unwrap(), SessionRecord::default());

        let record = SessionRecord::for_user(&UserInfo {
            id: "123456".to_string(),
            email: "user@example.com".to_string(),
            name: "Demo User".to_string(),
            token: "tok".to_string(),
        });

        store.save(&record).await.unwrap();
        assert_eq!(store.load().await.unwrap(), record);

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), SessionRecord::default());
    }

    #[tokio::test]
    async fn clones_share_the_record() {
        let store = InMemorySessionStore::new();
        let observer = store.clone();

        let record = SessionRecord {
            logged_in: true,
            ..SessionRecord::default()
        };
        store.save(&record).await.unwrap();

        assert!(observer.load().await.unwrap().logged_in);
    }
}
