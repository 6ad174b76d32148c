//! # Registry Runtime
//!
//! Wires the four subsystems over one logical ledger and exposes the
//! external operation surface. Every forwarded operation keeps the owning
//! subsystem's acknowledgement and error kind unchanged.

use crate::genesis::{GenesisConfig, GenesisError};

use lc_01_identity_registry::{
    IdentityError, IdentityService, Profile, User, UserRegisteredPayload, UserUpdatedPayload,
    UserVerifiedPayload,
};
use lc_02_land_registry::{
    IdentityGateway, Land, LandError, LandListedPayload, LandRegisteredPayload,
    LandReviewedPayload, LandService, LandSoldPayload, OwnershipTransferredPayload,
};
use lc_03_marketplace::MarketplaceService;
use lc_04_auction_engine::{
    Auction, AuctionCancelledPayload, AuctionError, AuctionFinalizedPayload, AuctionService,
    AuctionStartedPayload, BidPlacedPayload, BidWithdrawnPayload, CadastreGateway, MarketGateway,
};
use shared_types::{AdminAuthority, Address, Amount, BalanceBook, LandId};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

type Auctions = AuctionService<CadastreGateway<IdentityGateway>, MarketGateway<IdentityGateway>>;

/// The composed registry: one logical ledger behind four subsystem
/// interfaces.
pub struct RegistryRuntime {
    authority: Arc<AdminAuthority>,
    funds: Arc<RwLock<BalanceBook>>,
    identity: Arc<IdentityService>,
    land: Arc<LandService<IdentityGateway>>,
    market: Arc<MarketplaceService<IdentityGateway>>,
    auctions: Auctions,
}

impl RegistryRuntime {
    /// Initializes the ledger from genesis. Called once; state is never
    /// reset at runtime.
    pub fn new(config: GenesisConfig) -> Result<Self, GenesisError> {
        config.validate()?;

        let authority = Arc::new(AdminAuthority::new(config.admin));
        let funds = Arc::new(RwLock::new(BalanceBook::with_genesis(
            config
                .accounts
                .iter()
                .map(|account| (account.address, account.balance)),
        )));

        let identity = Arc::new(IdentityService::new(authority.clone()));
        let land = Arc::new(LandService::new(
            authority.clone(),
            IdentityGateway::new(identity.clone()),
            funds.clone(),
        ));
        let market = Arc::new(MarketplaceService::new(land.clone()));
        let auctions = AuctionService::new(
            CadastreGateway::new(land.clone()),
            MarketGateway::new(market.clone()),
            funds.clone(),
        );

        info!(accounts = config.accounts.len(), "registry initialized");
        Ok(Self {
            authority,
            funds,
            identity,
            land,
            market,
            auctions,
        })
    }

    // === Identity Registry (Subsystem 1) ===

    pub async fn register_user(
        &self,
        caller: Address,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<UserRegisteredPayload, IdentityError> {
        self.identity
            .register_user(caller, profile(name, email, phone))
            .await
    }

    pub async fn update_user(
        &self,
        caller: Address,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<UserUpdatedPayload, IdentityError> {
        self.identity
            .update_user(caller, profile(name, email, phone))
            .await
    }

    pub async fn verify_user(
        &self,
        caller: Address,
        address: Address,
    ) -> Result<UserVerifiedPayload, IdentityError> {
        self.identity.verify_user(caller, address).await
    }

    pub async fn user(&self, address: Address) -> Option<User> {
        self.identity.user(address).await
    }

    pub async fn is_registered(&self, address: Address) -> bool {
        self.identity.is_registered(address).await
    }

    /// The registry administrator.
    pub fn admin(&self) -> Address {
        self.authority.admin()
    }

    // === Land Registry (Subsystem 2) ===

    pub async fn register_land(
        &self,
        caller: Address,
        location: &str,
        price: Amount,
    ) -> Result<LandRegisteredPayload, LandError> {
        self.land.register_land(caller, location.into(), price).await
    }

    pub async fn verify_land(
        &self,
        caller: Address,
        id: LandId,
        approve: bool,
    ) -> Result<LandReviewedPayload, LandError> {
        self.land.verify_land(caller, id, approve).await
    }

    pub async fn transfer_ownership(
        &self,
        caller: Address,
        id: LandId,
        new_owner: Address,
    ) -> Result<OwnershipTransferredPayload, LandError> {
        self.land.transfer_ownership(caller, id, new_owner).await
    }

    pub async fn land(&self, id: LandId) -> Option<Land> {
        self.land.land(id).await
    }

    pub async fn land_count(&self) -> u64 {
        self.land.land_count().await
    }

    pub async fn lands_of(&self, owner: Address) -> Vec<Land> {
        self.land.lands_of(owner).await
    }

    pub async fn available_lands(&self) -> Vec<Land> {
        self.land.available_lands().await
    }

    // === Marketplace (Subsystem 3) ===

    pub async fn list_land_for_sale(
        &self,
        caller: Address,
        id: LandId,
        price: Amount,
    ) -> Result<LandListedPayload, LandError> {
        self.market.list_for_sale(caller, id, price).await
    }

    pub async fn buy_land(
        &self,
        caller: Address,
        id: LandId,
        value: Amount,
    ) -> Result<LandSoldPayload, LandError> {
        self.market.buy(caller, id, value).await
    }

    // === Auction Engine (Subsystem 4) ===

    pub async fn start_auction(
        &self,
        caller: Address,
        id: LandId,
        min_bid: Amount,
    ) -> Result<AuctionStartedPayload, AuctionError> {
        self.auctions.start_auction(caller, id, min_bid).await
    }

    pub async fn place_bid(
        &self,
        caller: Address,
        id: LandId,
        value: Amount,
    ) -> Result<BidPlacedPayload, AuctionError> {
        self.auctions.place_bid(caller, id, value).await
    }

    pub async fn withdraw_bid(
        &self,
        caller: Address,
        id: LandId,
    ) -> Result<BidWithdrawnPayload, AuctionError> {
        self.auctions.withdraw_bid(caller, id).await
    }

    pub async fn cancel_auction(
        &self,
        caller: Address,
        id: LandId,
    ) -> Result<AuctionCancelledPayload, AuctionError> {
        self.auctions.cancel_auction(caller, id).await
    }

    pub async fn finalize_auction(
        &self,
        caller: Address,
        id: LandId,
    ) -> Result<AuctionFinalizedPayload, AuctionError> {
        self.auctions.finalize_auction(caller, id).await
    }

    pub async fn auction(&self, id: LandId) -> Option<Auction> {
        self.auctions.auction(id).await
    }

    // === Fund Ledger Views ===

    pub async fn balance_of(&self, address: Address) -> Amount {
        self.funds.read().await.balance_of(address)
    }

    /// Balance-book total plus all auction-held value; constant across
    /// operations.
    pub async fn total_value(&self) -> Amount {
        self.funds.read().await.total() + self.auctions.held_value().await
    }
}

fn profile(name: &str, email: &str, phone: &str) -> Profile {
    Profile {
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
    }
}
