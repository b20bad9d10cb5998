//! The identity record stored in a server-side session.

use serde::{Deserialize, Serialize};

/// The four pieces of user-identifying data kept in the session store.
///
/// None of the fields carry validation: the role is free-form, the id has
/// no referential constraint, and empty strings are accepted everywhere.
/// The record is written all-or-nothing; partial updates do not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub role: String,
    pub id: i64,
    pub name: String,
    pub email: String,
}
