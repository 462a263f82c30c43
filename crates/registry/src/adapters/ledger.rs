//! In-memory settlement ledger.
//!
//! Stands in for the host chain's native value transfer: a flat map of
//! account balances with all-or-nothing batch application. Used in tests
//! and by hosts that keep value accounting inside the process.

use crate::domain::{Address, Settlement, SettlementError};
use crate::ports::SettlementPort;
use std::collections::HashMap;

/// Account-balance ledger backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    balances: HashMap<Address, u128>,
}

impl InMemoryLedger {
    /// Creates an empty ledger. Unknown accounts read as zero balance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to seed an account balance.
    pub fn with_balance(mut self, account: Address, balance: u128) -> Self {
        self.balances.insert(account, balance);
        self
    }

    /// Gets an account's balance. Unknown accounts hold zero.
    pub fn balance_of(&self, account: &Address) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }
}

impl SettlementPort for InMemoryLedger {
    /// Validates every credit before touching any balance, so a failure
    /// partway through the batch cannot leave the ledger half-applied.
    fn apply(&mut self, settlement: &Settlement) -> Result<(), SettlementError> {
        // Dry run: accumulate per-account totals and check for overflow.
        let mut staged: HashMap<Address, u128> = HashMap::new();
        for credit in &settlement.credits {
            let current = staged
                .get(&credit.account)
                .copied()
                .unwrap_or_else(|| self.balance_of(&credit.account));
            let next = current
                .checked_add(credit.amount)
                .ok_or(SettlementError::BalanceOverflow)?;
            staged.insert(credit.account, next);
        }

        for (account, balance) in staged {
            self.balances.insert(account, balance);
        }
        Ok(())
    }
}
