//! # Land Service
//!
//! Async boundary over the [`Cadastre`], coordinating the identity gate and
//! the native balance book.
//!
//! ## Locking Discipline
//!
//! Operations take the cadastre write lock for their whole
//! validate-then-mutate sequence; `buy_land` additionally takes the balance
//! book write lock, always after the cadastre lock (the workspace-wide order
//! is auctions → lands → balances → users). Every precondition is checked
//! under the guards before the first mutation, so a failure commits nothing.

use crate::domain::{Cadastre, Land, LandError};
use crate::events::{
    LandListedPayload, LandRegisteredPayload, LandReviewedPayload, LandSoldPayload,
    OwnershipTransferredPayload,
};
use crate::ports::IdentityGate;

use shared_types::{short_addr, AdminAuthority, Address, Amount, BalanceBook, LandId};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// The Land Registry service, generic over the identity gate.
pub struct LandService<G: IdentityGate> {
    authority: Arc<AdminAuthority>,
    identity: G,
    cadastre: RwLock<Cadastre>,
    funds: Arc<RwLock<BalanceBook>>,
}

impl<G: IdentityGate> LandService<G> {
    /// Creates an empty registry over the shared balance book.
    pub fn new(authority: Arc<AdminAuthority>, identity: G, funds: Arc<RwLock<BalanceBook>>) -> Self {
        Self {
            authority,
            identity,
            cadastre: RwLock::new(Cadastre::new()),
            funds,
        }
    }

    /// Registers a new parcel owned by the caller.
    ///
    /// The caller must be a currently-verified user; otherwise the operation
    /// fails `NotVerified` and no id is consumed.
    #[instrument(skip(self, location), fields(caller = %short_addr(&caller)))]
    pub async fn register_land(
        &self,
        caller: Address,
        location: String,
        price: Amount,
    ) -> Result<LandRegisteredPayload, LandError> {
        if !self.identity.is_verified_user(caller).await {
            warn!("register_land rejected: caller not a verified user");
            return Err(LandError::NotVerified {
                subject: format!("user {}", short_addr(&caller)),
            });
        }

        let mut cadastre = self.cadastre.write().await;
        let land_id = cadastre.register(caller, location, price);
        info!(land_id, "parcel registered");
        Ok(LandRegisteredPayload {
            receipt: Uuid::new_v4(),
            land_id,
            owner: caller,
        })
    }

    /// Decides the administrator review for a parcel. Administrator-only.
    #[instrument(skip(self), fields(caller = %short_addr(&caller)))]
    pub async fn verify_land(
        &self,
        caller: Address,
        id: LandId,
        approve: bool,
    ) -> Result<LandReviewedPayload, LandError> {
        if !self.authority.is_admin(caller) {
            warn!("verify_land rejected: caller is not the administrator");
            return Err(LandError::Unauthorized {
                caller,
                required: "registry administrator",
            });
        }

        let mut cadastre = self.cadastre.write().await;
        let outcome = cadastre.review(id, approve)?;
        info!(land_id = id, ?outcome, "parcel reviewed");
        Ok(LandReviewedPayload {
            receipt: Uuid::new_v4(),
            land_id: id,
            outcome,
        })
    }

    /// Lists a verified parcel for direct sale at `price`.
    #[instrument(skip(self), fields(caller = %short_addr(&caller)))]
    pub async fn list_land_for_sale(
        &self,
        caller: Address,
        id: LandId,
        price: Amount,
    ) -> Result<LandListedPayload, LandError> {
        let mut cadastre = self.cadastre.write().await;
        cadastre.list_for_sale(caller, id, price)?;
        info!(land_id = id, price, "parcel listed for sale");
        Ok(LandListedPayload {
            receipt: Uuid::new_v4(),
            land_id: id,
            price,
        })
    }

    /// Buys a listed parcel at its fixed price. Payable.
    ///
    /// `value` is the attached payment. The price moves buyer → previous
    /// owner; any excess never leaves the buyer and is reported as
    /// `refunded`.
    #[instrument(skip(self), fields(caller = %short_addr(&caller)))]
    pub async fn buy_land(
        &self,
        caller: Address,
        id: LandId,
        value: Amount,
    ) -> Result<LandSoldPayload, LandError> {
        let mut cadastre = self.cadastre.write().await;
        let mut funds = self.funds.write().await;

        // All checks before any mutation.
        let land = cadastre.check_purchase(caller, id, value)?;
        let (seller, price) = (land.owner, land.price);
        if !funds.can_cover(caller, value) {
            return Err(LandError::InsufficientFunds {
                required: value,
                available: funds.balance_of(caller),
            });
        }

        funds.transfer(caller, seller, price)?;
        cadastre.convey(id, caller)?;

        let refunded = value - price;
        info!(land_id = id, price, refunded, "parcel sold");
        Ok(LandSoldPayload {
            receipt: Uuid::new_v4(),
            land_id: id,
            buyer: caller,
            seller,
            price,
            refunded,
        })
    }

    /// Transfers ownership on the gift/transfer path; the recipient need not
    /// be a verified user.
    #[instrument(skip(self), fields(caller = %short_addr(&caller), to = %short_addr(&new_owner)))]
    pub async fn transfer_ownership(
        &self,
        caller: Address,
        id: LandId,
        new_owner: Address,
    ) -> Result<OwnershipTransferredPayload, LandError> {
        let mut cadastre = self.cadastre.write().await;
        cadastre.transfer(caller, id, new_owner)?;
        info!(land_id = id, "ownership transferred");
        Ok(OwnershipTransferredPayload {
            receipt: Uuid::new_v4(),
            land_id: id,
            previous_owner: caller,
            new_owner,
        })
    }

    /// Settlement conveyance primitive (Marketplace/auction path): rewrites
    /// the owner and clears the listing with no owner-equality check.
    ///
    /// Not part of the external operation surface.
    #[instrument(skip(self), fields(to = %short_addr(&new_owner)))]
    pub async fn convey(
        &self,
        id: LandId,
        new_owner: Address,
    ) -> Result<OwnershipTransferredPayload, LandError> {
        let mut cadastre = self.cadastre.write().await;
        let previous_owner = cadastre
            .get(id)
            .map(|land| land.owner)
            .ok_or(LandError::NotFound { id })?;
        cadastre.convey(id, new_owner)?;
        info!(land_id = id, "parcel conveyed");
        Ok(OwnershipTransferredPayload {
            receipt: Uuid::new_v4(),
            land_id: id,
            previous_owner,
            new_owner,
        })
    }

    /// Removes a parcel from the direct-sale listing (auction start path).
    pub async fn delist(&self, id: LandId) -> Result<(), LandError> {
        self.cadastre.write().await.delist(id)
    }

    /// The record for `id`, if any.
    pub async fn land(&self, id: LandId) -> Option<Land> {
        self.cadastre.read().await.get(id).cloned()
    }

    /// Number of parcels ever registered.
    pub async fn land_count(&self) -> u64 {
        self.cadastre.read().await.count()
    }

    /// All parcels owned by `owner`, ascending id.
    pub async fn lands_of(&self, owner: Address) -> Vec<Land> {
        self.cadastre.read().await.of_owner(owner)
    }

    /// Snapshot of all parcels listed for sale, ascending id.
    ///
    /// The cadastre's `available()` iterator is the lazy, restartable
    /// sequence; the async boundary collects it so no lock guard escapes.
    pub async fn available_lands(&self) -> Vec<Land> {
        self.cadastre.read().await.available().cloned().collect()
    }
}
