//! Native value transfer capability.
//!
//! The host ledger moves balance between principals atomically with the
//! enclosing call. The core only consumes this capability; [`InMemoryLedger`]
//! stands in for the host during tests and simulation.

use std::collections::HashMap;

use thiserror::Error;
use tracing::trace;

use crate::principal::Principal;

/// Rejections the native transfer primitive can return.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u64, available: u64 },
    #[error("sender and recipient are the same principal")]
    SelfTransfer,
    #[error("transfer amount must be positive")]
    ZeroAmount,
}

/// Injected value-transfer capability.
///
/// `transfer` debits `from` and credits `to` atomically: on any error no
/// balance moves.
pub trait ValueLedger {
    /// Current balance, zero for unknown principals.
    fn balance(&self, who: &Principal) -> u64;

    fn transfer(&mut self, from: &Principal, to: &Principal, amount: u64)
    -> Result<(), LedgerError>;
}

/// In-memory balance ledger backed by HashMap.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: HashMap<Principal, u64>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fund an account (mint, for test setup).
    pub fn credit(&mut self, who: Principal, amount: u64) {
        *self.balances.entry(who).or_default() += amount;
    }
}

impl ValueLedger for InMemoryLedger {
    fn balance(&self, who: &Principal) -> u64 {
        self.balances.get(who).copied().unwrap_or(0)
    }

    fn transfer(
        &mut self,
        from: &Principal,
        to: &Principal,
        amount: u64,
    ) -> Result<(), LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        if from == to {
            return Err(LedgerError::SelfTransfer);
        }
        let available = self.balance(from);
        if available < amount {
            return Err(LedgerError::InsufficientFunds {
                required: amount,
                available,
            });
        }
        self.balances.insert(*from, available - amount);
        *self.balances.entry(*to).or_default() += amount;
        trace!(from = %from, to = %to, amount, "value transferred");
        Ok(())
    }
}
