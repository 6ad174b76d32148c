//! # User Directory
//!
//! The owned identity collection.
//!
//! ## Invariants Enforced
//!
//! - One record per address (checked in `register()` before insertion)
//! - Records are never deleted
//! - `verify()` touches only the verification flag; `update()` touches only
//!   the profile fields

use super::entities::{Profile, User};
use super::errors::IdentityError;
use shared_types::Address;
use std::collections::HashMap;

/// Keyed collection of identity records.
///
/// All precondition checks happen before any mutation, so a failed operation
/// leaves the directory unchanged.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: HashMap<Address, User>,
}

impl UserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of known identity records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if no record exists.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Whether an identity record exists for `address`.
    pub fn is_registered(&self, address: Address) -> bool {
        self.users.contains_key(&address)
    }

    /// Whether `address` holds a verified record.
    pub fn is_verified(&self, address: Address) -> bool {
        self.users
            .get(&address)
            .map(|u| u.is_verified)
            .unwrap_or(false)
    }

    /// Gets the record for `address`.
    pub fn get(&self, address: Address) -> Option<&User> {
        self.users.get(&address)
    }

    /// Registers a fresh, unverified record for `address`.
    ///
    /// # Errors
    /// - `AlreadyRegistered` if the address holds a record
    pub fn register(&mut self, address: Address, profile: Profile) -> Result<(), IdentityError> {
        if self.users.contains_key(&address) {
            return Err(IdentityError::AlreadyRegistered { address });
        }
        self.users.insert(address, User::new(address, profile));
        Ok(())
    }

    /// Overwrites the profile fields of an existing record.
    ///
    /// # Errors
    /// - `NotRegistered` if the address has no record
    pub fn update(&mut self, address: Address, profile: Profile) -> Result<(), IdentityError> {
        let user = self
            .users
            .get_mut(&address)
            .ok_or(IdentityError::NotRegistered { address })?;
        user.profile = profile;
        Ok(())
    }

    /// Marks the record for `address` as verified.
    ///
    /// Returns `true` when the flag flipped, `false` when the record was
    /// already verified (a safe no-op, not an error).
    ///
    /// # Errors
    /// - `NotRegistered` if the address has no record
    pub fn verify(&mut self, address: Address) -> Result<bool, IdentityError> {
        let user = self
            .users
            .get_mut(&address)
            .ok_or(IdentityError::NotRegistered { address })?;
        let flipped = !user.is_verified;
        user.is_verified = true;
        Ok(flipped)
    }
}
