//! # Genesis Configuration
//!
//! The one-time initialization input for the shared ledger state: the
//! administrator identity and the seeded account balances. Validated before
//! any state exists; the ledger is never reset afterwards.

use serde::{Deserialize, Serialize};
use shared_types::{short_addr, Address, Amount};
use thiserror::Error;

/// Genesis validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenesisError {
    /// The same address is seeded twice.
    #[error("duplicate genesis account: {0}")]
    DuplicateAccount(String),
}

/// One seeded account balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccount {
    pub address: Address,
    pub balance: Amount,
}

/// Registry genesis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// The registry administrator — the account that initialized the
    /// registry; the only one allowed to verify users and parcels.
    pub admin: Address,

    /// Accounts funded at genesis. Addresses not listed start at zero and
    /// can still register; they simply cannot attach value until funded by a
    /// sale or withdrawal.
    pub accounts: Vec<GenesisAccount>,
}

impl GenesisConfig {
    /// A configuration with the given administrator and no funded accounts.
    pub fn with_admin(admin: Address) -> Self {
        Self {
            admin,
            accounts: Vec::new(),
        }
    }

    /// Adds a funded account (builder style).
    pub fn fund(mut self, address: Address, balance: Amount) -> Self {
        self.accounts.push(GenesisAccount { address, balance });
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GenesisError> {
        let mut seen = std::collections::HashSet::new();
        for account in &self.accounts {
            if !seen.insert(account.address) {
                return Err(GenesisError::DuplicateAccount(short_addr(&account.address)));
            }
        }
        Ok(())
    }
}
