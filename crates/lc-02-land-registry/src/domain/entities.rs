//! # Cadastre Domain Entities

use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, LandId};

/// Administrator review outcome for a parcel.
///
/// A parcel starts in `PendingReview`; the administrator decides it exactly
/// once. `Rejected` is terminal — the parcel can never be verified, listed,
/// or auctioned afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewStatus {
    PendingReview,
    Verified,
    Rejected,
}

/// A parcel record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Land {
    /// Unique, monotonically assigned at creation (starting at 1).
    pub id: LandId,
    /// Exclusive owner; exactly one address at any time.
    pub owner: Address,
    /// Free-form location description.
    pub location: String,
    /// Listed or asking price in base units.
    pub price: Amount,
    /// Administrator review outcome.
    pub review: ReviewStatus,
    /// Flagged for direct fixed-price purchase.
    pub is_for_sale: bool,
}

impl Land {
    /// Creates a freshly registered, unreviewed parcel.
    pub fn new(id: LandId, owner: Address, location: String, price: Amount) -> Self {
        Self {
            id,
            owner,
            location,
            price,
            review: ReviewStatus::PendingReview,
            is_for_sale: false,
        }
    }

    /// Boolean view of the review status (`Verified` only).
    pub fn is_verified(&self) -> bool {
        self.review == ReviewStatus::Verified
    }
}
