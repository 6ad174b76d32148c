//! # Core Value Types
//!
//! Defines the identifiers and amounts used across all subsystems.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`
//! - **Cadastre**: `LandId`
//! - **Funds**: `Amount`

/// A 20-byte Ethereum-style address.
///
/// All caller identity is carried as an explicit `Address` argument — the
/// analog of the transaction sender in the surrounding execution environment.
pub type Address = [u8; 20];

/// Unique parcel identifier, monotonically assigned starting at 1.
pub type LandId = u64;

/// Value in the smallest indivisible unit of the native asset.
///
/// `u128` covers all practical registry use cases while avoiding wider
/// big-integer arithmetic; amounts are never negative or fractional.
pub type Amount = u128;

/// Short hex rendering of an address for logs and error messages.
///
/// Full addresses are 40 hex characters; the first four bytes are enough to
/// tell accounts apart in any realistic trace.
pub fn short_addr(address: &Address) -> String {
    format!("0x{}…", hex::encode(&address[..4]))
}
