//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the Auction Engine depends on. Adapters implement these traits
//! so the dependency points inward:
//!
//! - Parcel facts and delisting come from the Land Registry (Subsystem 2)
//! - Settlement conveyance goes through the Marketplace (Subsystem 3), never
//!   the registry's primitive directly

use async_trait::async_trait;
use lc_02_land_registry::LandError;
use shared_types::{Address, LandId};

/// Interface for consulting the Land Registry about a parcel.
#[async_trait]
pub trait ParcelGate: Send + Sync {
    /// Current owner of the parcel, `None` for an unknown id.
    async fn owner_of(&self, id: LandId) -> Option<Address>;

    /// Whether the parcel passed administrator review.
    async fn is_verified_parcel(&self, id: LandId) -> bool;

    /// Removes the parcel from the direct-sale listing for the duration of
    /// an auction.
    async fn delist(&self, id: LandId) -> Result<(), LandError>;
}

/// Interface for settling a finalized auction through the Marketplace.
#[async_trait]
pub trait SettlementGate: Send + Sync {
    /// Conveys the parcel to the winning bidder and clears any listing.
    async fn convey_to_winner(&self, id: LandId, winner: Address) -> Result<(), LandError>;
}
