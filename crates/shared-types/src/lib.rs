//! # Shared Types Crate
//!
//! This crate contains the value types shared by every Land-Chain subsystem:
//! addresses, identifiers, amounts, the native balance book, and the
//! administrator authority capability.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem value types are defined
//!   here; subsystem crates own their domain entities.
//! - **Centralized Authorization**: `AdminAuthority` is the one object that
//!   answers "is this caller the registry administrator?" — subsystems query
//!   it instead of re-deriving the role check.
//! - **Closed Fund Accounting**: every debit through `BalanceBook` has a
//!   matching credit or a matching escrow entry within the same operation.

pub mod authority;
pub mod entities;
pub mod ledger;

pub use authority::AdminAuthority;
pub use entities::*;
pub use ledger::{BalanceBook, FundsError};
