//! # Auction Book
//!
//! The owned auction collection: per-parcel instance history with at most
//! one active instance.
//!
//! ## Data Structures
//!
//! - `instances`: `HashMap<LandId, Vec<Auction>>` — the last element is the
//!   current (latest) instance; earlier, terminal instances are retained so
//!   their escrow stays withdrawable after a fresh auction starts
//!
//! ## Invariants Enforced
//!
//! - At most one active instance per parcel (checked in `open()`)
//! - `highest_bid` strictly increases across accepted bids and never falls
//!   below `min_bid` once a bid exists
//! - An outbid stake moves to escrow in the same mutation that records the
//!   new leader — the book never holds a stake nobody can account for
//! - Withdraw zeroes the caller's escrow before reporting the payout amount

use super::entities::{Auction, AuctionState};
use super::errors::AuctionError;
use shared_types::{Address, Amount, LandId};
use std::collections::HashMap;

/// Result of an accepted bid: the stake that moved to escrow, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidOutcome {
    pub previous_bidder: Option<Address>,
    pub previous_bid: Amount,
}

/// Result of a finalize: who won and what the seller is owed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub seller: Address,
    pub winner: Address,
    pub price: Amount,
}

/// Keyed collection of auction instances.
#[derive(Debug, Default)]
pub struct AuctionBook {
    instances: HashMap<LandId, Vec<Auction>>,
}

impl AuctionBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current (latest) instance for the parcel.
    pub fn current(&self, land_id: LandId) -> Option<&Auction> {
        self.instances.get(&land_id).and_then(|v| v.last())
    }

    fn current_mut(&mut self, land_id: LandId) -> Option<&mut Auction> {
        self.instances.get_mut(&land_id).and_then(|v| v.last_mut())
    }

    /// Total value held across every instance of every parcel.
    ///
    /// Conservation: this plus the balance-book total is constant across
    /// operations.
    pub fn held_value(&self) -> Amount {
        self.instances
            .values()
            .flatten()
            .map(Auction::held_value)
            .sum()
    }

    /// Opens a fresh instance for the parcel.
    ///
    /// # Errors
    /// - `AuctionAlreadyActive` while the latest instance is active
    pub fn open(
        &mut self,
        land_id: LandId,
        seller: Address,
        min_bid: Amount,
    ) -> Result<(), AuctionError> {
        if self.current(land_id).is_some_and(Auction::is_active) {
            return Err(AuctionError::AuctionAlreadyActive { land_id });
        }
        self.instances
            .entry(land_id)
            .or_default()
            .push(Auction::open(land_id, seller, min_bid));
        Ok(())
    }

    /// Records an accepted bid of `value` by `bidder`.
    ///
    /// The previous leader's stake (if any) moves into escrow in the same
    /// mutation; the caller releases the matching debit only after this
    /// returns.
    ///
    /// # Errors
    /// - `NotFound` when the parcel never had an auction
    /// - `AuctionInactive` when the latest instance is terminal
    /// - `Unauthorized` when the seller bids on their own auction
    /// - `BidTooLow` unless `value ≥ min_bid` and `value > highest_bid`
    pub fn bid(
        &mut self,
        land_id: LandId,
        bidder: Address,
        value: Amount,
    ) -> Result<BidOutcome, AuctionError> {
        let auction = self
            .current_mut(land_id)
            .ok_or(AuctionError::NotFound { land_id })?;
        if !auction.is_active() {
            return Err(AuctionError::AuctionInactive { land_id });
        }
        if bidder == auction.seller {
            return Err(AuctionError::Unauthorized {
                caller: bidder,
                required: "a bidder other than the seller",
            });
        }
        if value < auction.min_bid || value <= auction.highest_bid {
            return Err(AuctionError::BidTooLow {
                offered: value,
                floor: auction.bid_floor(),
            });
        }

        let previous_bidder = auction.highest_bidder;
        let previous_bid = auction.highest_bid;
        if let Some(previous) = previous_bidder {
            *auction.escrow.entry(previous).or_insert(0) += previous_bid;
        }
        auction.highest_bid = value;
        auction.highest_bidder = Some(bidder);

        Ok(BidOutcome {
            previous_bidder,
            previous_bid,
        })
    }

    /// Drains the caller's escrow across every instance of the parcel and
    /// returns the total to pay out. The balances are zeroed here, before
    /// any payout happens.
    ///
    /// # Errors
    /// - `NoWithdrawableBalance` when nothing is escrowed for the caller
    pub fn withdraw(&mut self, land_id: LandId, caller: Address) -> Result<Amount, AuctionError> {
        let total: Amount = self
            .instances
            .get_mut(&land_id)
            .map(|instances| {
                instances
                    .iter_mut()
                    .filter_map(|auction| auction.escrow.remove(&caller))
                    .sum()
            })
            .unwrap_or(0);

        if total == 0 {
            return Err(AuctionError::NoWithdrawableBalance { caller });
        }
        Ok(total)
    }

    /// Cancels the active instance. Only legal while no bid has been placed,
    /// so no leading stake can be stranded.
    ///
    /// # Errors
    /// - `NotFound`, `Unauthorized`, `AuctionInactive`, `AuctionHasBids`
    pub fn cancel(&mut self, land_id: LandId, caller: Address) -> Result<(), AuctionError> {
        let auction = self
            .current_mut(land_id)
            .ok_or(AuctionError::NotFound { land_id })?;
        if !auction.is_active() {
            return Err(AuctionError::AuctionInactive { land_id });
        }
        if caller != auction.seller {
            return Err(AuctionError::Unauthorized {
                caller,
                required: "auction seller",
            });
        }
        if auction.highest_bidder.is_some() {
            return Err(AuctionError::AuctionHasBids { land_id });
        }
        auction.state = AuctionState::Cancelled;
        Ok(())
    }

    /// Finalizes the active instance: marks it terminal and reports the
    /// settlement. The caller credits the seller and conveys the parcel
    /// only after the state transition recorded here.
    ///
    /// # Errors
    /// - `NotFound`, `Unauthorized`, `AuctionInactive`, `NoBids`
    pub fn finalize(&mut self, land_id: LandId, caller: Address) -> Result<Settlement, AuctionError> {
        let auction = self
            .current_mut(land_id)
            .ok_or(AuctionError::NotFound { land_id })?;
        if !auction.is_active() {
            return Err(AuctionError::AuctionInactive { land_id });
        }
        if caller != auction.seller {
            return Err(AuctionError::Unauthorized {
                caller,
                required: "auction seller",
            });
        }
        let winner = auction
            .highest_bidder
            .ok_or(AuctionError::NoBids { land_id })?;

        auction.state = AuctionState::Finalized;
        Ok(Settlement {
            seller: auction.seller,
            winner,
            price: auction.highest_bid,
        })
    }
}
