//! # Native Balance Book
//!
//! The fund-accounting substrate shared by the payable operations.
//!
//! ## Invariants Enforced
//!
//! - Debits fail before any mutation when the account cannot cover them; a
//!   failed debit leaves the book untouched.
//! - Credits use checked arithmetic; overflow surfaces as an error instead of
//!   wrapping.
//! - `transfer` is debit-then-credit under one `&mut self`, so no observer
//!   ever sees the value in flight.
//!
//! The book is seeded once at genesis and mutated only through the operations
//! of the component services, which hold it behind their own exclusive lock.

use crate::entities::{short_addr, Address, Amount};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Fund movement errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FundsError {
    /// Account cannot cover the requested debit.
    #[error("insufficient funds for {address}: required {required}, available {available}")]
    Insufficient {
        address: String,
        required: Amount,
        available: Amount,
    },

    /// Credit would overflow the account balance.
    #[error("balance overflow crediting {address} with {amount}")]
    Overflow { address: String, amount: Amount },
}

/// Per-address native balances.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceBook {
    balances: HashMap<Address, Amount>,
}

impl BalanceBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a book seeded with the given genesis balances.
    pub fn with_genesis<I>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (Address, Amount)>,
    {
        Self {
            balances: accounts.into_iter().collect(),
        }
    }

    /// Current balance of `address` (zero if never funded).
    pub fn balance_of(&self, address: Address) -> Amount {
        self.balances.get(&address).copied().unwrap_or(0)
    }

    /// Sum of every balance in the book.
    ///
    /// Used by conservation checks: book total plus auction-held value is
    /// constant across operations.
    pub fn total(&self) -> Amount {
        self.balances.values().sum()
    }

    /// Whether `address` can cover a debit of `amount`.
    pub fn can_cover(&self, address: Address, amount: Amount) -> bool {
        self.balance_of(address) >= amount
    }

    /// Credits `amount` to `address`.
    pub fn credit(&mut self, address: Address, amount: Amount) -> Result<(), FundsError> {
        let entry = self.balances.entry(address).or_insert(0);
        *entry = entry
            .checked_add(amount)
            .ok_or_else(|| FundsError::Overflow {
                address: short_addr(&address),
                amount,
            })?;
        Ok(())
    }

    /// Debits `amount` from `address`, failing without mutation if the
    /// balance cannot cover it.
    pub fn debit(&mut self, address: Address, amount: Amount) -> Result<(), FundsError> {
        let available = self.balance_of(address);
        if available < amount {
            return Err(FundsError::Insufficient {
                address: short_addr(&address),
                required: amount,
                available,
            });
        }
        self.balances.insert(address, available - amount);
        Ok(())
    }

    /// Moves `amount` from `from` to `to` as one indivisible step.
    pub fn transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), FundsError> {
        if !self.can_cover(from, amount) {
            return Err(FundsError::Insufficient {
                address: short_addr(&from),
                required: amount,
                available: self.balance_of(from),
            });
        }
        self.debit(from, amount)?;
        self.credit(to, amount)
    }
}
