//! # Identity Service
//!
//! Async boundary over the [`UserDirectory`].
//!
//! Each public operation takes the directory's exclusive lock for its whole
//! validate-then-mutate sequence, so operations never interleave mid-effect
//! and a failed precondition commits nothing.

use crate::domain::{IdentityError, Profile, User, UserDirectory};
use crate::events::{UserRegisteredPayload, UserUpdatedPayload, UserVerifiedPayload};

use shared_types::{short_addr, AdminAuthority, Address};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// The Identity Registry service.
pub struct IdentityService {
    authority: Arc<AdminAuthority>,
    directory: RwLock<UserDirectory>,
}

impl IdentityService {
    /// Creates an empty registry under the given administrator authority.
    pub fn new(authority: Arc<AdminAuthority>) -> Self {
        Self {
            authority,
            directory: RwLock::new(UserDirectory::new()),
        }
    }

    /// The registry administrator address.
    pub fn admin(&self) -> Address {
        self.authority.admin()
    }

    /// Registers the caller as a fresh, unverified identity.
    #[instrument(skip(self, profile), fields(caller = %short_addr(&caller)))]
    pub async fn register_user(
        &self,
        caller: Address,
        profile: Profile,
    ) -> Result<UserRegisteredPayload, IdentityError> {
        let mut directory = self.directory.write().await;
        directory.register(caller, profile)?;
        info!("user registered");
        Ok(UserRegisteredPayload {
            receipt: Uuid::new_v4(),
            address: caller,
        })
    }

    /// Overwrites the caller's profile fields; verification flag untouched.
    #[instrument(skip(self, profile), fields(caller = %short_addr(&caller)))]
    pub async fn update_user(
        &self,
        caller: Address,
        profile: Profile,
    ) -> Result<UserUpdatedPayload, IdentityError> {
        let mut directory = self.directory.write().await;
        directory.update(caller, profile)?;
        info!("user profile updated");
        Ok(UserUpdatedPayload {
            receipt: Uuid::new_v4(),
            address: caller,
        })
    }

    /// Marks `address` as verified. Administrator-only.
    ///
    /// Re-verifying an already-verified user is a safe no-op acknowledged
    /// with a fresh receipt.
    #[instrument(skip(self), fields(caller = %short_addr(&caller), target = %short_addr(&address)))]
    pub async fn verify_user(
        &self,
        caller: Address,
        address: Address,
    ) -> Result<UserVerifiedPayload, IdentityError> {
        if !self.authority.is_admin(caller) {
            warn!("verify_user rejected: caller is not the administrator");
            return Err(IdentityError::Unauthorized { caller });
        }

        let mut directory = self.directory.write().await;
        let newly_verified = directory.verify(address)?;
        info!(newly_verified, "user verified");
        Ok(UserVerifiedPayload {
            receipt: Uuid::new_v4(),
            address,
            newly_verified,
        })
    }

    /// Whether an identity record exists for `address`.
    pub async fn is_registered(&self, address: Address) -> bool {
        self.directory.read().await.is_registered(address)
    }

    /// Whether `address` holds a verified record.
    pub async fn is_verified(&self, address: Address) -> bool {
        self.directory.read().await.is_verified(address)
    }

    /// The record for `address`, if any.
    pub async fn user(&self, address: Address) -> Option<User> {
        self.directory.read().await.get(address).cloned()
    }
}
