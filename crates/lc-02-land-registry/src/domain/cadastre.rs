//! # Cadastre - Parcel Collection
//!
//! The owned parcel collection, keyed by ascending id.
//!
//! ## Data Structures
//!
//! - `lands`: BTreeMap keyed by `LandId` — iteration order is ascending id,
//!   which is what `available()` must yield
//! - `next_id`: monotonic allocator; an id is consumed only after every
//!   precondition has passed
//!
//! ## Invariants Enforced
//!
//! - `is_for_sale ⟹ Verified` (listing checks review status first)
//! - Review is decided at most once per parcel; `Rejected` is terminal
//! - A failed operation never consumes an id or mutates a record

use super::entities::{Land, ReviewStatus};
use super::errors::LandError;
use shared_types::{short_addr, Address, Amount, LandId};
use std::collections::BTreeMap;

/// Keyed collection of parcel records.
#[derive(Debug, Default)]
pub struct Cadastre {
    lands: BTreeMap<LandId, Land>,
    next_id: LandId,
}

impl Cadastre {
    /// Creates an empty cadastre. Ids start at 1.
    pub fn new() -> Self {
        Self {
            lands: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Number of parcels ever registered.
    pub fn count(&self) -> u64 {
        self.lands.len() as u64
    }

    /// Gets the record for `id`.
    pub fn get(&self, id: LandId) -> Option<&Land> {
        self.lands.get(&id)
    }

    /// All parcels owned by `owner`, ascending id.
    pub fn of_owner(&self, owner: Address) -> Vec<Land> {
        self.lands
            .values()
            .filter(|land| land.owner == owner)
            .cloned()
            .collect()
    }

    /// Lazy, restartable sequence of all parcels listed for sale, ascending
    /// id. Restart by calling again.
    pub fn available(&self) -> impl Iterator<Item = &Land> + '_ {
        self.lands.values().filter(|land| land.is_for_sale)
    }

    /// Registers a new parcel owned by `owner` and returns its id.
    ///
    /// The caller's verification is the service's concern; by the time the
    /// cadastre is reached every identity precondition has passed, so the id
    /// is consumed here unconditionally.
    pub fn register(&mut self, owner: Address, location: String, price: Amount) -> LandId {
        let id = self.next_id;
        self.next_id += 1;
        self.lands.insert(id, Land::new(id, owner, location, price));
        id
    }

    /// Decides the administrator review for `id`.
    ///
    /// # Errors
    /// - `NotFound` for an unknown id
    /// - `AlreadyReviewed` when the review was already decided
    pub fn review(&mut self, id: LandId, approve: bool) -> Result<ReviewStatus, LandError> {
        let land = self.lands.get_mut(&id).ok_or(LandError::NotFound { id })?;
        if land.review != ReviewStatus::PendingReview {
            return Err(LandError::AlreadyReviewed { id });
        }
        land.review = if approve {
            ReviewStatus::Verified
        } else {
            ReviewStatus::Rejected
        };
        Ok(land.review)
    }

    /// Lists `id` for direct sale at `price`.
    ///
    /// # Errors
    /// - `NotFound` for an unknown id
    /// - `Unauthorized` when `caller` is not the owner
    /// - `NotVerified` unless the parcel passed review (rejected parcels are
    ///   excluded forever)
    pub fn list_for_sale(
        &mut self,
        caller: Address,
        id: LandId,
        price: Amount,
    ) -> Result<(), LandError> {
        let land = self.lands.get_mut(&id).ok_or(LandError::NotFound { id })?;
        if land.owner != caller {
            return Err(LandError::Unauthorized {
                caller,
                required: "parcel owner",
            });
        }
        if !land.is_verified() {
            return Err(LandError::NotVerified {
                subject: format!("parcel {id}"),
            });
        }
        land.is_for_sale = true;
        land.price = price;
        Ok(())
    }

    /// Removes `id` from the direct-sale listing (auction start path).
    ///
    /// # Errors
    /// - `NotFound` for an unknown id
    pub fn delist(&mut self, id: LandId) -> Result<(), LandError> {
        let land = self.lands.get_mut(&id).ok_or(LandError::NotFound { id })?;
        land.is_for_sale = false;
        Ok(())
    }

    /// Validates a direct purchase of `id` by `buyer` offering `value`.
    ///
    /// Read-only: the caller pairs this with `convey()` after the fund
    /// movement has been checked, so a failure here commits nothing anywhere.
    ///
    /// # Errors
    /// - `NotFound`, `NotForSale`, `Unauthorized` (owner buying own parcel),
    ///   `InsufficientFunds` (value below price)
    pub fn check_purchase(
        &self,
        buyer: Address,
        id: LandId,
        value: Amount,
    ) -> Result<&Land, LandError> {
        let land = self.lands.get(&id).ok_or(LandError::NotFound { id })?;
        if !land.is_for_sale {
            return Err(LandError::NotForSale { id });
        }
        if land.owner == buyer {
            return Err(LandError::Unauthorized {
                caller: buyer,
                required: "a buyer distinct from the owner",
            });
        }
        if value < land.price {
            return Err(LandError::InsufficientFunds {
                required: land.price,
                available: value,
            });
        }
        if !land.is_verified() {
            // Listing already implies verification; anything else is a bug.
            return Err(LandError::InvariantViolation(format!(
                "parcel {id} is for sale but not verified"
            )));
        }
        Ok(land)
    }

    /// Transfers ownership on the caller-initiated gift/transfer path.
    ///
    /// `new_owner` need not be a verified user here — this is the
    /// administrative path distinct from a sale.
    ///
    /// # Errors
    /// - `NotFound` for an unknown id
    /// - `Unauthorized` when `caller` is not the owner
    pub fn transfer(
        &mut self,
        caller: Address,
        id: LandId,
        new_owner: Address,
    ) -> Result<(), LandError> {
        let land = self.lands.get_mut(&id).ok_or(LandError::NotFound { id })?;
        if land.owner != caller {
            return Err(LandError::Unauthorized {
                caller,
                required: "parcel owner",
            });
        }
        land.owner = new_owner;
        land.is_for_sale = false;
        Ok(())
    }

    /// Settlement conveyance: rewrites the owner and clears the listing with
    /// no owner-equality or verification check.
    ///
    /// Reachable only through the Marketplace settlement path (direct sale
    /// completion, auction finalize); never exposed on the §6 surface.
    ///
    /// # Errors
    /// - `NotFound` for an unknown id
    pub fn convey(&mut self, id: LandId, new_owner: Address) -> Result<(), LandError> {
        let land = self.lands.get_mut(&id).ok_or(LandError::NotFound { id })?;
        land.owner = new_owner;
        land.is_for_sale = false;
        Ok(())
    }
}
