//! Adapter translating the `ParcelGate` port onto the Land Registry service.

use crate::ports::ParcelGate;
use async_trait::async_trait;
use lc_02_land_registry::{IdentityGate, LandError, LandService};
use shared_types::{Address, LandId};
use std::sync::Arc;

/// Production adapter over the in-process Land Registry.
pub struct CadastreGateway<G: IdentityGate> {
    land: Arc<LandService<G>>,
}

impl<G: IdentityGate> CadastreGateway<G> {
    pub fn new(land: Arc<LandService<G>>) -> Self {
        Self { land }
    }
}

#[async_trait]
impl<G: IdentityGate> ParcelGate for CadastreGateway<G> {
    async fn owner_of(&self, id: LandId) -> Option<Address> {
        self.land.land(id).await.map(|land| land.owner)
    }

    async fn is_verified_parcel(&self, id: LandId) -> bool {
        self.land
            .land(id)
            .await
            .map(|land| land.is_verified())
            .unwrap_or(false)
    }

    async fn delist(&self, id: LandId) -> Result<(), LandError> {
        self.land.delist(id).await
    }
}
