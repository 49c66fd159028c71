//! In-memory ledger for simulation and tests.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{Address, Amount};
use crate::error::ZapError;
use crate::math::CheckedArithmetic;
use crate::traits::{transact, Checkpoint, Ledger};

/// Hash-map backed [`Ledger`].
///
/// Holds token balances, total supplies, allowances, native balances and a
/// settable block timestamp.  Snapshots are full clones.
///
/// # Examples
///
/// ```
/// use zap_amm::domain::{Address, Amount};
/// use zap_amm::ledger::MemoryLedger;
/// use zap_amm::traits::Ledger;
///
/// let token = Address::from_low_u64(1);
/// let alice = Address::from_low_u64(10);
/// let bob = Address::from_low_u64(11);
///
/// let mut ledger = MemoryLedger::new(1_700_000_000);
/// ledger.mint(token, alice, Amount::new(100)).expect("mint");
/// ledger.transfer(token, alice, bob, Amount::new(40)).expect("transfer");
/// assert_eq!(ledger.balance_of(&token, &bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLedger {
    timestamp: u64,
    balances: HashMap<(Address, Address), Amount>,
    supplies: HashMap<Address, Amount>,
    allowances: HashMap<(Address, Address, Address), Amount>,
    native: HashMap<Address, Amount>,
}

impl MemoryLedger {
    /// Creates an empty ledger at `timestamp`.
    #[must_use]
    pub fn new(timestamp: u64) -> Self {
        Self {
            timestamp,
            ..Self::default()
        }
    }

    /// Moves the block clock.
    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.timestamp = timestamp;
    }

    /// Credits native currency out of thin air (genesis allocation).
    ///
    /// # Errors
    ///
    /// [`ZapError::Overflow`] if the balance would overflow.
    pub fn fund_native(&mut self, owner: Address, amount: Amount) -> Result<(), ZapError> {
        let balance = self.native_balance(&owner).safe_add(&amount)?;
        self.native.insert(owner, balance);
        Ok(())
    }

    fn debit(&mut self, token: Address, from: Address, amount: Amount) -> Result<(), ZapError> {
        let available = self.balance_of(&token, &from);
        let remaining = available
            .checked_sub(&amount)
            .ok_or(ZapError::InsufficientBalance {
                available,
                required: amount,
            })?;
        self.balances.insert((token, from), remaining);
        Ok(())
    }

    fn credit(&mut self, token: Address, to: Address, amount: Amount) -> Result<(), ZapError> {
        let balance = self.balance_of(&token, &to).safe_add(&amount)?;
        self.balances.insert((token, to), balance);
        Ok(())
    }

    fn debit_native(&mut self, from: Address, amount: Amount) -> Result<(), ZapError> {
        let available = self.native_balance(&from);
        let remaining = available
            .checked_sub(&amount)
            .ok_or(ZapError::InsufficientBalance {
                available,
                required: amount,
            })?;
        self.native.insert(from, remaining);
        Ok(())
    }
}

impl Checkpoint for MemoryLedger {
    type Snapshot = Self;

    fn checkpoint(&self) -> Self {
        self.clone()
    }

    fn restore(&mut self, snapshot: Self) {
        *self = snapshot;
    }
}

impl Ledger for MemoryLedger {
    fn timestamp(&self) -> u64 {
        self.timestamp
    }

    fn balance_of(&self, token: &Address, owner: &Address) -> Amount {
        self.balances
            .get(&(*token, *owner))
            .copied()
            .unwrap_or_default()
    }

    fn total_supply(&self, token: &Address) -> Amount {
        self.supplies.get(token).copied().unwrap_or_default()
    }

    fn native_balance(&self, owner: &Address) -> Amount {
        self.native.get(owner).copied().unwrap_or_default()
    }

    fn allowance(&self, token: &Address, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*token, *owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn approve(&mut self, token: Address, owner: Address, spender: Address, amount: Amount) {
        trace!(token = %token, owner = %owner, spender = %spender, amount = %amount, "approve");
        if amount.is_zero() {
            self.allowances.remove(&(token, owner, spender));
        } else {
            self.allowances.insert((token, owner, spender), amount);
        }
    }

    fn transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), ZapError> {
        if from == to {
            let available = self.balance_of(&token, &from);
            if available < amount {
                return Err(ZapError::InsufficientBalance {
                    available,
                    required: amount,
                });
            }
            return Ok(());
        }
        // Check the credit side before debiting so a failure leaves no trace.
        let credited = self.balance_of(&token, &to).safe_add(&amount)?;
        self.debit(token, from, amount)?;
        self.balances.insert((token, to), credited);
        trace!(token = %token, from = %from, to = %to, amount = %amount, "transfer");
        Ok(())
    }

    fn transfer_from(
        &mut self,
        token: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), ZapError> {
        let available = self.allowance(&token, &from, &spender);
        let remaining = available
            .checked_sub(&amount)
            .ok_or(ZapError::InsufficientAllowance {
                available,
                required: amount,
            })?;
        self.transfer(token, from, to, amount)?;
        self.approve(token, from, spender, remaining);
        Ok(())
    }

    fn transfer_native(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), ZapError> {
        if from == to {
            let available = self.native_balance(&from);
            if available < amount {
                return Err(ZapError::InsufficientBalance {
                    available,
                    required: amount,
                });
            }
            return Ok(());
        }
        let credited = self.native_balance(&to).safe_add(&amount)?;
        self.debit_native(from, amount)?;
        self.native.insert(to, credited);
        trace!(from = %from, to = %to, amount = %amount, "transfer native");
        Ok(())
    }

    fn mint(&mut self, token: Address, to: Address, amount: Amount) -> Result<(), ZapError> {
        let supply = self.total_supply(&token).safe_add(&amount)?;
        self.credit(token, to, amount)?;
        self.supplies.insert(token, supply);
        Ok(())
    }

    fn burn(&mut self, token: Address, from: Address, amount: Amount) -> Result<(), ZapError> {
        let supply = self.total_supply(&token).safe_sub(&amount)?;
        self.debit(token, from, amount)?;
        self.supplies.insert(token, supply);
        Ok(())
    }

    fn wrap_native(
        &mut self,
        wrapper: Address,
        owner: Address,
        amount: Amount,
    ) -> Result<(), ZapError> {
        transact(self, |l| {
            l.transfer_native(owner, wrapper, amount)?;
            l.mint(wrapper, owner, amount)
        })
    }

    fn unwrap_native(
        &mut self,
        wrapper: Address,
        owner: Address,
        amount: Amount,
    ) -> Result<(), ZapError> {
        transact(self, |l| {
            l.burn(wrapper, owner, amount)?;
            l.transfer_native(wrapper, owner, amount)
        })
    }
}
