//! In-process session store with a sliding idle timeout.

use crate::{Result, SessionError, SessionId, SessionRecord, SessionStore};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{RwLock, RwLockWriteGuard};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Default idle timeout: 30 minutes of inactivity.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

struct Entry {
    record: SessionRecord,
    deadline: Instant,
}

/// Process-local [`SessionStore`].
///
/// Every load or save re-arms the entry's deadline (sliding expiry). An
/// entry found past its deadline is removed on access, so an expired
/// session is indistinguishable from a cleared one. The map lock
/// serializes overlapping requests for the same session id; last write
/// wins.
pub struct MemoryStore {
    entries: RwLock<HashMap<SessionId, Entry>>,
    idle_timeout: Duration,
}

impl MemoryStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    /// Number of live (non-expired) entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .map(|entries| entries.values().filter(|e| e.deadline > now).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[track_caller]
    fn lock(&self) -> Result<RwLockWriteGuard<'_, HashMap<SessionId, Entry>>> {
        self.entries
            .write()
            .map_err(|_| SessionError::Unavailable {
                message: "session map lock poisoned".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TIMEOUT)
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionRecord>> {
        let now = Instant::now();
        let mut entries = self.lock()?;

        match entries.get_mut(id) {
            None => Ok(None),
            Some(entry) if entry.deadline <= now => {
                entries.remove(id);
                Ok(None)
            }
            Some(entry) => {
                entry.deadline = now + self.idle_timeout;
                Ok(Some(entry.record.clone()))
            }
        }
    }

    async fn save(&self, id: &SessionId, record: SessionRecord) -> Result<()> {
        let deadline = Instant::now() + self.idle_timeout;
        let mut entries = self.lock()?;
        entries.insert(id.clone(), Entry { record, deadline });
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<()> {
        let mut entries = self.lock()?;
        entries.remove(id);
        Ok(())
    }
}
