//! Identity session manager.
//!
//! A thin, typed facade over an untyped [`SessionStore`]: it owns the
//! schema (which keys make up a user identity) while the store owns the
//! bytes and the expiry.

use crate::{Result, SessionId, SessionStore};

use std::sync::Arc;

use sp_core::UserIdentity;

/// Storage key for the user's role.
pub const ROLE_KEY: &str = "userRole";
/// Storage key for the user's id (decimal string form).
pub const USER_ID_KEY: &str = "userId";
/// Storage key for the user's display name.
pub const NAME_KEY: &str = "name";
/// Storage key for the user's email address.
pub const EMAIL_KEY: &str = "email";

/// The identity fields as last stored, each independently absent.
///
/// `id` stays in its raw string form; the integer type is not
/// reconstructed. A record written before this schema existed (or
/// manipulated out-of-band) can legitimately yield a partial snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentitySnapshot {
    pub role: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Sets, reads, and clears the identity fields of a session.
///
/// The store handle is injected so callers (and tests) decide where
/// session state lives.
#[derive(Clone)]
pub struct IdentitySessions {
    store: Arc<dyn SessionStore>,
}

impl IdentitySessions {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Overwrite all four identity fields of `id`'s session.
    ///
    /// Values are stored verbatim (empty strings included); the numeric id
    /// is stored in decimal string form. Keys outside the identity schema
    /// survive. Unconditional success apart from store faults.
    pub async fn set_identity(&self, id: &SessionId, identity: &UserIdentity) -> Result<()> {
        let mut record = self.store.load(id).await?.unwrap_or_default();
        record.insert(ROLE_KEY, identity.role.clone());
        record.insert(USER_ID_KEY, identity.id.to_string());
        record.insert(NAME_KEY, identity.name.clone());
        record.insert(EMAIL_KEY, identity.email.clone());
        self.store.save(id, record).await
    }

    /// Read the identity fields of `id`'s session.
    ///
    /// Absence (fresh session, cleared, expired) is a normal outcome: the
    /// snapshot simply has all fields `None`.
    pub async fn identity(&self, id: &SessionId) -> Result<IdentitySnapshot> {
        let record = match self.store.load(id).await? {
            Some(record) => record,
            None => return Ok(IdentitySnapshot::default()),
        };

        Ok(IdentitySnapshot {
            role: record.get(ROLE_KEY).map(str::to_string),
            id: record.get(USER_ID_KEY).map(str::to_string),
            name: record.get(NAME_KEY).map(str::to_string),
            email: record.get(EMAIL_KEY).map(str::to_string),
        })
    }

    /// Discard `id`'s entire session entry, identity fields and any other
    /// data alike. Callers are expected to redirect to the login view.
    pub async fn clear(&self, id: &SessionId) -> Result<()> {
        self.store.delete(id).await
    }
}
