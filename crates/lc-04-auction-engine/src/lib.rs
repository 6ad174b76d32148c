//! # lc-04-auction-engine
//!
//! Auction Engine subsystem for Land-Chain.
//!
//! ## Role in System
//!
//! - **State Machine Owner**: `NoAuction → Active → {Finalized, Cancelled}`
//!   per parcel, with at most one active instance at a time
//! - **Escrow Custodian**: every outbid stake becomes a per-bidder refundable
//!   balance, paid out only through `withdraw_bid` (pull pattern — funds are
//!   never pushed as a side effect of someone else's call)
//! - **Settlement Consumer**: parcel ownership moves through the Marketplace
//!   (Subsystem 3) conveyance, parcel facts come from the Land Registry
//!   (Subsystem 2), both behind outbound ports
//!
//! ## Ordering Discipline
//!
//! `place_bid` and `finalize_auction` record the auction state transition
//! before any fund or ownership movement, and `withdraw_bid` zeroes the
//! caller's escrow before paying it out, so no payout path can observe or
//! re-enter a half-updated auction.

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

pub use adapters::{CadastreGateway, MarketGateway};
pub use domain::*;
pub use events::*;
pub use ports::{ParcelGate, SettlementGate};
pub use service::AuctionService;
