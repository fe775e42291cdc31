//! The stored record type and its payload.

use serde::{Deserialize, Serialize};

/// Payload of a user record: everything the caller supplies.
///
/// Fields are free-form — the store does not validate them. Defaults kick in
/// for fields a request body leaves out, so a partial JSON object binds
/// cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserData {
    /// Display name.
    pub name: String,
    /// Phone number. An integer on the wire, matching the snapshot format.
    pub phone: i64,
    /// Email address.
    pub email: String,
}

/// One stored user record: a store-assigned id plus the caller's payload.
///
/// Ids are unique and strictly increasing for the process lifetime. A record
/// handed out by the store is a detached copy, never a view into store
/// internals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier. Serialized as `user_id`.
    #[serde(rename = "user_id")]
    pub id: u64,
    /// Caller-supplied payload, flattened into the record object on the wire.
    #[serde(flatten)]
    pub data: UserData,
}
