//! # Marketplace Service
//!
//! Stateless trade facade over the Land Registry. Failure modes are the
//! registry's own (`LandError`); the marketplace adds none.

use lc_02_land_registry::{
    IdentityGate, LandError, LandListedPayload, LandService, LandSoldPayload,
    OwnershipTransferredPayload,
};
use shared_types::{Address, Amount, LandId};
use std::sync::Arc;
use tracing::instrument;

/// The Marketplace service, generic over the registry's identity gate.
pub struct MarketplaceService<G: IdentityGate> {
    land: Arc<LandService<G>>,
}

impl<G: IdentityGate> MarketplaceService<G> {
    pub fn new(land: Arc<LandService<G>>) -> Self {
        Self { land }
    }

    /// Lists a verified parcel for direct sale at a fixed price.
    pub async fn list_for_sale(
        &self,
        caller: Address,
        id: LandId,
        price: Amount,
    ) -> Result<LandListedPayload, LandError> {
        self.land.list_land_for_sale(caller, id, price).await
    }

    /// Buys a listed parcel at its fixed price. Payable.
    pub async fn buy(
        &self,
        caller: Address,
        id: LandId,
        value: Amount,
    ) -> Result<LandSoldPayload, LandError> {
        self.land.buy_land(caller, id, value).await
    }

    /// Settlement conveyance for the auction path: moves the parcel to the
    /// winning bidder and clears any listing. The winner need not be a
    /// verified user (same policy as the gift/transfer path).
    #[instrument(skip(self))]
    pub async fn convey_to_winner(
        &self,
        id: LandId,
        winner: Address,
    ) -> Result<OwnershipTransferredPayload, LandError> {
        self.land.convey(id, winner).await
    }
}
