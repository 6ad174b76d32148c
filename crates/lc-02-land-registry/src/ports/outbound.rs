//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the Land Registry depends on. Adapters implement these traits
//! so the dependency points inward: the registry never names a concrete
//! upstream service.

use async_trait::async_trait;
use shared_types::Address;

/// Interface for consulting the Identity Registry (Subsystem 1).
///
/// `register_land` is gated on the caller being a currently-verified user;
/// this is the only identity fact the Land Registry needs.
#[async_trait]
pub trait IdentityGate: Send + Sync {
    /// Whether `address` holds a verified identity record.
    ///
    /// Unregistered addresses answer `false` — the registry does not
    /// distinguish them from registered-but-unverified ones, matching the
    /// single verification gate at the boundary.
    async fn is_verified_user(&self, address: Address) -> bool;
}
