//! # Auction Domain Entities

use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, LandId};
use std::collections::HashMap;

/// Lifecycle state of one auction instance.
///
/// `Finalized` and `Cancelled` are terminal for the instance; a fresh
/// `start_auction` on the same parcel creates a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionState {
    Active,
    Finalized,
    Cancelled,
}

/// One auction instance for a parcel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    /// The parcel under auction (non-owning key).
    pub land_id: LandId,
    /// Parcel owner at start time; the only address allowed to cancel or
    /// finalize.
    pub seller: Address,
    /// Floor for the first accepted bid.
    pub min_bid: Amount,
    /// Leading stake; zero until the first accepted bid.
    pub highest_bid: Amount,
    /// Leading bidder; `None` until the first accepted bid.
    pub highest_bidder: Option<Address>,
    pub state: AuctionState,
    /// Refundable stakes of outbid bidders, withdrawable on demand at any
    /// time — including after the instance is terminal.
    pub escrow: HashMap<Address, Amount>,
}

impl Auction {
    /// Opens a fresh instance with no bids.
    pub fn open(land_id: LandId, seller: Address, min_bid: Amount) -> Self {
        Self {
            land_id,
            seller,
            min_bid,
            highest_bid: 0,
            highest_bidder: None,
            state: AuctionState::Active,
            escrow: HashMap::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == AuctionState::Active
    }

    /// The caller's withdrawable escrow balance in this instance.
    pub fn escrow_of(&self, address: Address) -> Amount {
        self.escrow.get(&address).copied().unwrap_or(0)
    }

    /// Value this instance still holds: all escrowed stakes, plus the
    /// leading stake while the auction is active (on finalize it is paid to
    /// the seller; a cancelled instance never had one).
    pub fn held_value(&self) -> Amount {
        let escrowed: Amount = self.escrow.values().sum();
        if self.is_active() {
            escrowed + self.highest_bid
        } else {
            escrowed
        }
    }

    /// Smallest value the next bid must reach.
    pub fn bid_floor(&self) -> Amount {
        self.min_bid.max(self.highest_bid.saturating_add(1))
    }
}
