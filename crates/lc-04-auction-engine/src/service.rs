//! # Auction Service
//!
//! Async boundary over the [`AuctionBook`], coordinating parcel facts,
//! settlement conveyance, and the native balance book.
//!
//! ## Locking Discipline
//!
//! Operations take the book write lock first, then (where funds move) the
//! balance book write lock — the workspace-wide order is auctions → lands →
//! balances, and the outbound ports only ever touch the lands lock, so no
//! cycle exists. Every precondition is checked under the guards before the
//! first mutation.
//!
//! ## State Before Funds
//!
//! `place_bid` records the escrow movement and the new leader before the
//! stake is debited; `finalize_auction` marks the instance terminal before
//! the parcel is conveyed and the seller credited; `withdraw_bid` zeroes the
//! escrow before crediting the caller.

use crate::domain::{Auction, AuctionBook, AuctionError};
use crate::events::{
    AuctionCancelledPayload, AuctionFinalizedPayload, AuctionStartedPayload, BidPlacedPayload,
    BidWithdrawnPayload,
};
use crate::ports::{ParcelGate, SettlementGate};

use shared_types::{short_addr, Address, Amount, BalanceBook, LandId};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// The Auction Engine service, generic over its outbound gates.
pub struct AuctionService<P: ParcelGate, S: SettlementGate> {
    parcels: P,
    settlement: S,
    book: RwLock<AuctionBook>,
    funds: Arc<RwLock<BalanceBook>>,
}

impl<P: ParcelGate, S: SettlementGate> AuctionService<P, S> {
    /// Creates an empty engine over the shared balance book.
    pub fn new(parcels: P, settlement: S, funds: Arc<RwLock<BalanceBook>>) -> Self {
        Self {
            parcels,
            settlement,
            book: RwLock::new(AuctionBook::new()),
            funds,
        }
    }

    /// Opens an auction for a parcel the caller owns.
    ///
    /// The parcel leaves the direct-sale listing for the duration.
    #[instrument(skip(self), fields(caller = %short_addr(&caller)))]
    pub async fn start_auction(
        &self,
        caller: Address,
        land_id: LandId,
        min_bid: Amount,
    ) -> Result<AuctionStartedPayload, AuctionError> {
        let mut book = self.book.write().await;

        let owner = self
            .parcels
            .owner_of(land_id)
            .await
            .ok_or(AuctionError::NotFound { land_id })?;
        if owner != caller {
            warn!("start_auction rejected: caller does not own the parcel");
            return Err(AuctionError::Unauthorized {
                caller,
                required: "parcel owner",
            });
        }
        if !self.parcels.is_verified_parcel(land_id).await {
            return Err(AuctionError::NotVerified { land_id });
        }

        book.open(land_id, caller, min_bid)?;
        self.parcels.delist(land_id).await?;

        info!(land_id, min_bid, "auction opened");
        Ok(AuctionStartedPayload {
            receipt: Uuid::new_v4(),
            land_id,
            seller: caller,
            min_bid,
        })
    }

    /// Places a bid of `value` on the parcel's active auction. Payable.
    #[instrument(skip(self), fields(caller = %short_addr(&caller)))]
    pub async fn place_bid(
        &self,
        caller: Address,
        land_id: LandId,
        value: Amount,
    ) -> Result<BidPlacedPayload, AuctionError> {
        let mut book = self.book.write().await;
        let mut funds = self.funds.write().await;

        // The stake must be coverable before the book records anything.
        if !funds.can_cover(caller, value) {
            return Err(AuctionError::InsufficientFunds {
                required: value,
                available: funds.balance_of(caller),
            });
        }

        let outcome = book.bid(land_id, caller, value)?;
        funds.debit(caller, value)?;

        info!(land_id, value, outbid = ?outcome.previous_bidder.map(|a| short_addr(&a)), "bid accepted");
        Ok(BidPlacedPayload {
            receipt: Uuid::new_v4(),
            land_id,
            bidder: caller,
            amount: value,
            outbid: outcome.previous_bidder,
        })
    }

    /// Pays out the caller's escrowed (non-winning) stakes for this parcel.
    ///
    /// Callable at any time — during the auction and after it is terminal.
    #[instrument(skip(self), fields(caller = %short_addr(&caller)))]
    pub async fn withdraw_bid(
        &self,
        caller: Address,
        land_id: LandId,
    ) -> Result<BidWithdrawnPayload, AuctionError> {
        let mut book = self.book.write().await;
        let mut funds = self.funds.write().await;

        // Zeroed in the book before the credit is released.
        let amount = book.withdraw(land_id, caller)?;
        funds.credit(caller, amount)?;

        info!(land_id, amount, "escrow withdrawn");
        Ok(BidWithdrawnPayload {
            receipt: Uuid::new_v4(),
            land_id,
            bidder: caller,
            amount,
        })
    }

    /// Cancels the parcel's active auction. Legal only while no bid exists.
    #[instrument(skip(self), fields(caller = %short_addr(&caller)))]
    pub async fn cancel_auction(
        &self,
        caller: Address,
        land_id: LandId,
    ) -> Result<AuctionCancelledPayload, AuctionError> {
        let mut book = self.book.write().await;
        book.cancel(land_id, caller)?;
        info!(land_id, "auction cancelled");
        Ok(AuctionCancelledPayload {
            receipt: Uuid::new_v4(),
            land_id,
        })
    }

    /// Finalizes the parcel's active auction: the parcel is conveyed to the
    /// winner and the winning stake goes to the seller.
    #[instrument(skip(self), fields(caller = %short_addr(&caller)))]
    pub async fn finalize_auction(
        &self,
        caller: Address,
        land_id: LandId,
    ) -> Result<AuctionFinalizedPayload, AuctionError> {
        let mut book = self.book.write().await;

        // Terminal state is recorded before any value or ownership moves.
        // Lock order stays auctions → lands → balances: the conveyance takes
        // the cadastre lock before the balance book is touched.
        let settlement = book.finalize(land_id, caller)?;
        self.settlement
            .convey_to_winner(land_id, settlement.winner)
            .await
            .map_err(|err| {
                AuctionError::InvariantViolation(format!(
                    "settlement conveyance failed for parcel {land_id}: {err}"
                ))
            })?;
        self.funds
            .write()
            .await
            .credit(settlement.seller, settlement.price)?;

        info!(
            land_id,
            price = settlement.price,
            winner = %short_addr(&settlement.winner),
            "auction finalized"
        );
        Ok(AuctionFinalizedPayload {
            receipt: Uuid::new_v4(),
            land_id,
            seller: settlement.seller,
            winner: settlement.winner,
            price: settlement.price,
        })
    }

    /// The latest auction instance for the parcel, if any.
    pub async fn auction(&self, land_id: LandId) -> Option<Auction> {
        self.book.read().await.current(land_id).cloned()
    }

    /// Total value currently held in escrow and leading stakes.
    ///
    /// Conservation: this plus the balance-book total is constant.
    pub async fn held_value(&self) -> Amount {
        self.book.read().await.held_value()
    }
}
