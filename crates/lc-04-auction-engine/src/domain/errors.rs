//! Auction Engine error types.

use lc_02_land_registry::LandError;
use shared_types::{short_addr, Address, Amount, FundsError, LandId};
use thiserror::Error;

/// Errors that can occur in the Auction Engine subsystem.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuctionError {
    /// No auction instance has ever existed for the parcel.
    #[error("no auction for parcel {land_id}")]
    NotFound { land_id: LandId },

    /// The latest instance for the parcel is no longer active.
    #[error("auction for parcel {land_id} is not active")]
    AuctionInactive { land_id: LandId },

    /// An active instance already exists for the parcel.
    #[error("auction for parcel {land_id} is already active")]
    AuctionAlreadyActive { land_id: LandId },

    /// Cancellation is forbidden once a leading bidder exists.
    #[error("auction for parcel {land_id} already has bids")]
    AuctionHasBids { land_id: LandId },

    /// Bid below the minimum or not above the current leader.
    #[error("bid too low: offered {offered}, floor {floor}")]
    BidTooLow { offered: Amount, floor: Amount },

    /// Finalize requires at least one accepted bid.
    #[error("auction for parcel {land_id} has no bids")]
    NoBids { land_id: LandId },

    /// The caller holds no escrowed stake for this parcel's auctions.
    #[error("no withdrawable balance for {}", short_addr(.caller))]
    NoWithdrawableBalance { caller: Address },

    /// Caller lacks the required role or ownership.
    #[error("caller {} is not authorized: requires {}", short_addr(.caller), .required)]
    Unauthorized {
        caller: Address,
        required: &'static str,
    },

    /// The parcel has not passed administrator review.
    #[error("not verified: parcel {land_id}")]
    NotVerified { land_id: LandId },

    /// The bidder's book balance cannot cover the stake.
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Amount, available: Amount },

    /// Failure surfaced by the Land Registry or Marketplace.
    #[error(transparent)]
    Land(#[from] LandError),

    /// Internal invariant breach; unreachable in correct operation.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl From<FundsError> for AuctionError {
    fn from(err: FundsError) -> Self {
        match err {
            FundsError::Insufficient {
                required,
                available,
                ..
            } => AuctionError::InsufficientFunds {
                required,
                available,
            },
            FundsError::Overflow { address, amount } => AuctionError::InvariantViolation(
                format!("balance overflow crediting {address} with {amount}"),
            ),
        }
    }
}
