//! # Land-Chain Test Suite
//!
//! Unified test crate containing cross-subsystem integration flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs       # Identity → cadastre → marketplace flows
//!     └── settlement.rs  # Auction state machine and escrow accounting
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p lc-tests
//!
//! # By category
//! cargo test -p lc-tests integration::flows::
//! cargo test -p lc-tests integration::settlement::
//! ```

#![allow(dead_code)]

pub mod integration;
