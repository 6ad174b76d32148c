//! Cross-subsystem integration tests.

pub mod flows;
pub mod settlement;

use registry_runtime::{GenesisConfig, RegistryRuntime};
use shared_types::{Address, Amount};

pub const ADMIN: Address = [0x01; 20];
pub const ALICE: Address = [0x11; 20];
pub const BOB: Address = [0x22; 20];
pub const CAROL: Address = [0x33; 20];
pub const MALLORY: Address = [0x44; 20];

/// A runtime with the standard cast funded.
pub fn runtime_with_funds(balance: Amount) -> RegistryRuntime {
    RegistryRuntime::new(
        GenesisConfig::with_admin(ADMIN)
            .fund(ALICE, balance)
            .fund(BOB, balance)
            .fund(CAROL, balance),
    )
    .expect("valid genesis")
}

/// A fresh random address with no record anywhere in the ledger.
pub fn random_address() -> Address {
    use rand::Rng;

    let mut address = [0u8; 20];
    rand::thread_rng().fill(&mut address[..]);
    address
}

/// Registers and verifies `address` as a user.
pub async fn verified_user(runtime: &RegistryRuntime, address: Address, name: &str) {
    runtime
        .register_user(address, name, &format!("{name}@example.com"), "1234567890")
        .await
        .expect("registration");
    runtime
        .verify_user(ADMIN, address)
        .await
        .expect("verification");
}
