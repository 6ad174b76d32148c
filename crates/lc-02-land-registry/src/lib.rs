//! # lc-02-land-registry
//!
//! Land Registry subsystem for Land-Chain.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: authoritative record for every parcel —
//!   location, price, owner, review status, sale listing
//! - **Verification Gate Consumer**: consults the Identity Registry
//!   (Subsystem 1) through the `IdentityGate` outbound port before allowing
//!   parcel registration
//! - **Settlement Substrate**: the Marketplace (Subsystem 3) and, through it,
//!   the Auction Engine (Subsystem 4) move parcels with the conveyance
//!   primitive this subsystem exposes
//!
//! ## Fund Movement
//!
//! `buy_land` is the one payable operation here. It verifies the attached
//! value against the listed price and the buyer's book balance before moving
//! anything; the price moves buyer → previous owner and any excess never
//! leaves the buyer (reported as refunded in the acknowledgement).

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

pub use adapters::IdentityGateway;
pub use domain::*;
pub use events::*;
pub use ports::IdentityGate;
pub use service::LandService;
