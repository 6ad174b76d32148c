//! # Administrator Authority
//!
//! The single, authoritative answer to "is this caller the registry
//! administrator?".
//!
//! ## Design Rationale
//!
//! Several operations are administrator-gated (`verify_user`, `verify_land`).
//! Scattering the role comparison across subsystems risks inconsistent policy
//! application, so the check lives in exactly one capability object that is
//! constructed at genesis and handed to each service.

use crate::entities::Address;
use serde::{Deserialize, Serialize};

/// Capability object holding the administrator identity.
///
/// Immutable after genesis: the administrator is the account that initialized
/// the registry, and there is no transfer-of-administration operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAuthority {
    admin: Address,
}

impl AdminAuthority {
    /// Creates the authority for the given administrator address.
    pub fn new(admin: Address) -> Self {
        Self { admin }
    }

    /// The administrator address.
    pub fn admin(&self) -> Address {
        self.admin
    }

    /// Whether `caller` holds the administrator role.
    pub fn is_admin(&self, caller: Address) -> bool {
        self.admin == caller
    }
}
