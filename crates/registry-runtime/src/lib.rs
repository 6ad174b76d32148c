//! # registry-runtime
//!
//! Composition root for Land-Chain.
//!
//! ## Initialization Sequence
//!
//! 1. Validate the genesis configuration
//! 2. Create the administrator authority and seed the balance book
//! 3. Wire the four subsystems: Identity Registry → Land Registry →
//!    Marketplace → Auction Engine (dependencies point leaf-first)
//! 4. Expose the external operation facade; state is never reset at runtime
//!
//! The runtime owns no business rules of its own — it forwards each
//! operation to the owning subsystem and hands back its acknowledgement.

pub mod genesis;
pub mod runtime;

pub use genesis::{GenesisAccount, GenesisConfig, GenesisError};
pub use runtime::RegistryRuntime;

/// Initializes the tracing subscriber from `RUST_LOG` (falls back to `info`).
///
/// Call once at process start; tests and embedders may skip it entirely.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
