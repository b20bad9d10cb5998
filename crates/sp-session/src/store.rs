//! Session store abstraction.

use crate::{Result, SessionId, SessionRecord};

use async_trait::async_trait;

/// Key-value storage for session records.
///
/// Implementations own expiry: a record past its idle deadline must behave
/// exactly like one that was never written. The store is handed to
/// [`crate::IdentitySessions`] explicitly so tests can substitute a fake.
///
/// Concurrent calls for the same id are serialized by the implementation;
/// the contract beyond that is last write wins.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the record for `id`, refreshing its idle deadline.
    /// `None` is a normal outcome, not an error.
    async fn load(&self, id: &SessionId) -> Result<Option<SessionRecord>>;

    /// Replace the record for `id`, (re)arming its idle deadline.
    async fn save(&self, id: &SessionId, record: SessionRecord) -> Result<()>;

    /// Discard the entire record for `id`. Deleting an absent id is fine.
    async fn delete(&self, id: &SessionId) -> Result<()>;
}
