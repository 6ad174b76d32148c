//! # lc-03-marketplace
//!
//! Marketplace subsystem for Land-Chain.
//!
//! ## Role in System
//!
//! - **Thin Composition**: direct buy/sell of listed parcels at a fixed
//!   price, delegating entirely to the Land Registry (Subsystem 2) — this
//!   subsystem holds no state of its own
//! - **Settlement Boundary**: the Auction Engine (Subsystem 4) moves a parcel
//!   to the winning bidder through `convey_to_winner`, never by touching the
//!   registry's conveyance primitive directly

pub mod service;

pub use service::MarketplaceService;
