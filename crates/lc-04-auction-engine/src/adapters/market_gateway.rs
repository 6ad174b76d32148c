//! Adapter translating the `SettlementGate` port onto the Marketplace.

use crate::ports::SettlementGate;
use async_trait::async_trait;
use lc_02_land_registry::{IdentityGate, LandError};
use lc_03_marketplace::MarketplaceService;
use shared_types::{Address, LandId};
use std::sync::Arc;

/// Production adapter over the in-process Marketplace.
pub struct MarketGateway<G: IdentityGate> {
    market: Arc<MarketplaceService<G>>,
}

impl<G: IdentityGate> MarketGateway<G> {
    pub fn new(market: Arc<MarketplaceService<G>>) -> Self {
        Self { market }
    }
}

#[async_trait]
impl<G: IdentityGate> SettlementGate for MarketGateway<G> {
    async fn convey_to_winner(&self, id: LandId, winner: Address) -> Result<(), LandError> {
        self.market.convey_to_winner(id, winner).await.map(|_| ())
    }
}
