//! Land Registry error types.

use shared_types::{short_addr, Address, Amount, FundsError, LandId};
use thiserror::Error;

/// Errors that can occur in the Land Registry subsystem.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LandError {
    /// Unknown parcel id.
    #[error("parcel not found: {id}")]
    NotFound { id: LandId },

    /// Caller lacks the required role or ownership.
    #[error("caller {} is not authorized: requires {}", short_addr(.caller), .required)]
    Unauthorized {
        caller: Address,
        required: &'static str,
    },

    /// Identity or parcel verification precondition unmet.
    #[error("not verified: {subject}")]
    NotVerified { subject: String },

    /// The parcel review was already decided.
    #[error("parcel {id} was already reviewed")]
    AlreadyReviewed { id: LandId },

    /// The parcel is not listed for direct sale.
    #[error("parcel {id} is not for sale")]
    NotForSale { id: LandId },

    /// Caller cannot cover the purchase: attached value below the price, or
    /// book balance below the attached value.
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Amount, available: Amount },

    /// Internal invariant breach; unreachable in correct operation.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl From<FundsError> for LandError {
    fn from(err: FundsError) -> Self {
        match err {
            FundsError::Insufficient {
                required,
                available,
                ..
            } => LandError::InsufficientFunds {
                required,
                available,
            },
            // Credit overflow cannot happen while the book total is conserved.
            FundsError::Overflow { address, amount } => LandError::InvariantViolation(format!(
                "balance overflow crediting {address} with {amount}"
            )),
        }
    }
}
