//! # lc-01-identity-registry
//!
//! Identity Registry subsystem for Land-Chain.
//!
//! ## Role in System
//!
//! - **Leaf Subsystem**: no dependencies on other registries
//! - **Single Source of Truth**: authoritative record for every known address
//! - **Verification Gate**: the Land Registry (Subsystem 2) consults this
//!   subsystem before allowing parcel registration
//!
//! ## Authorization
//!
//! `verify_user` is administrator-gated through the centralized
//! `AdminAuthority` capability from `shared-types`; all other operations are
//! authorized by caller identity alone.

pub mod domain;
pub mod events;
pub mod service;

pub use domain::*;
pub use events::*;
pub use service::IdentityService;
