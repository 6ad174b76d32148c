//! Acknowledgement payloads returned by the Auction Engine.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, LandId};
use uuid::Uuid;

/// Acknowledgement for `start_auction`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuctionStartedPayload {
    pub receipt: Uuid,
    pub land_id: LandId,
    pub seller: Address,
    pub min_bid: Amount,
}

/// Acknowledgement for `place_bid`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BidPlacedPayload {
    pub receipt: Uuid,
    pub land_id: LandId,
    pub bidder: Address,
    pub amount: Amount,
    /// The outbid leader whose stake moved to escrow, if any.
    pub outbid: Option<Address>,
}

/// Acknowledgement for `withdraw_bid`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BidWithdrawnPayload {
    pub receipt: Uuid,
    pub land_id: LandId,
    pub bidder: Address,
    pub amount: Amount,
}

/// Acknowledgement for `cancel_auction`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuctionCancelledPayload {
    pub receipt: Uuid,
    pub land_id: LandId,
}

/// Acknowledgement for `finalize_auction`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuctionFinalizedPayload {
    pub receipt: Uuid,
    pub land_id: LandId,
    pub seller: Address,
    pub winner: Address,
    pub price: Amount,
}
