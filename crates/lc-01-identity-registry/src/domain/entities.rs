//! # Identity Domain Entities

use serde::{Deserialize, Serialize};
use shared_types::Address;

/// Mutable profile fields of an identity record.
///
/// Kept separate from [`User`] so `update_user` can overwrite the profile
/// without touching the verification flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// An identity record.
///
/// Created on first registration, never deleted. `is_verified` is set only
/// through the administrator-gated `verify_user` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique key, immutable after registration.
    pub address: Address,
    /// Mutable profile fields.
    pub profile: Profile,
    /// Administrator-gated approval, distinct from mere existence.
    pub is_verified: bool,
}

impl User {
    /// Creates an unverified record for a fresh registration.
    pub fn new(address: Address, profile: Profile) -> Self {
        Self {
            address,
            profile,
            is_verified: false,
        }
    }
}
