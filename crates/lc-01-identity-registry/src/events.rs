//! Acknowledgement payloads returned by the Identity Registry.
//!
//! Every mutating operation acknowledges with a payload carrying a fresh
//! receipt identifier; the caller polls read views afterward.

use serde::{Deserialize, Serialize};
use shared_types::Address;
use uuid::Uuid;

/// Acknowledgement for `register_user`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserRegisteredPayload {
    pub receipt: Uuid,
    pub address: Address,
}

/// Acknowledgement for `update_user`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserUpdatedPayload {
    pub receipt: Uuid,
    pub address: Address,
}

/// Acknowledgement for `verify_user`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserVerifiedPayload {
    pub receipt: Uuid,
    pub address: Address,
    /// False when the record was already verified (safe no-op retry).
    pub newly_verified: bool,
}
