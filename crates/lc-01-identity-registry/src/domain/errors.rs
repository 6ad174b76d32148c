//! Identity Registry error types.

use shared_types::{short_addr, Address};
use thiserror::Error;

/// Errors that can occur in the Identity Registry subsystem.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// The caller address already holds an identity record.
    #[error("address {} is already registered", short_addr(.address))]
    AlreadyRegistered { address: Address },

    /// No identity record exists for the address.
    #[error("address {} is not registered", short_addr(.address))]
    NotRegistered { address: Address },

    /// Caller lacks the administrator role.
    #[error("caller {} is not the registry administrator", short_addr(.caller))]
    Unauthorized { caller: Address },
}
