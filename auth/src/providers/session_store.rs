//! Session persistence trait.

use crate::error::Result;
use crate::state::SessionRecord;
use std::future::Future;

/// Local key-value persistence for the session record.
///
/// The record is written as one batch on login and cleared as one batch on
/// logout; readers always observe a complete record or none at all.
pub trait SessionStore: Send + Sync {
    /// Load the persisted record.
    ///
    /// A store with nothing persisted yields the default (logged-out)
    /// record rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`](crate::error::AuthError::Storage) if
    /// the backing storage cannot be read.
    fn load(&self) -> impl Future<Output = Result<SessionRecord>> + Send;

    /// Persist the record, replacing whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`](crate::error::AuthError::Storage) if
    /// the backing storage cannot be written.
    fn save(&self, record: &SessionRecord) -> impl Future<Output = Result<()>> + Send;

    /// Erase the persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`](crate::error::AuthError::Storage) if
    /// the backing storage cannot be written.
    fn clear(&self) -> impl Future<Output = Result<()>> + Send;
}
