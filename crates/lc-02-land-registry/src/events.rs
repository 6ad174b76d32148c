//! Acknowledgement payloads returned by the Land Registry.

use crate::domain::ReviewStatus;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, LandId};
use uuid::Uuid;

/// Acknowledgement for `register_land`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LandRegisteredPayload {
    pub receipt: Uuid,
    pub land_id: LandId,
    pub owner: Address,
}

/// Acknowledgement for `verify_land`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LandReviewedPayload {
    pub receipt: Uuid,
    pub land_id: LandId,
    pub outcome: ReviewStatus,
}

/// Acknowledgement for `list_land_for_sale`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LandListedPayload {
    pub receipt: Uuid,
    pub land_id: LandId,
    pub price: Amount,
}

/// Acknowledgement for `buy_land`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LandSoldPayload {
    pub receipt: Uuid,
    pub land_id: LandId,
    pub buyer: Address,
    pub seller: Address,
    pub price: Amount,
    /// Excess of the attached value over the price; stays with the buyer.
    pub refunded: Amount,
}

/// Acknowledgement for `transfer_ownership` and the settlement conveyance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OwnershipTransferredPayload {
    pub receipt: Uuid,
    pub land_id: LandId,
    pub previous_owner: Address,
    pub new_owner: Address,
}
