//! Single-token staking vault.

use std::collections::HashMap;

use crate::config::VaultConfig;
use crate::domain::{Address, Amount};
use crate::error::ZapError;
use crate::math::CheckedArithmetic;
use crate::traits::{transact, Checkpoint, FromConfig, Ledger, StakingClient};

/// Records stakes per beneficiary; staked tokens sit in the vault's
/// ledger account.
///
/// Reward schedules are not modelled.  The vault exists so a zap can
/// forward shares into something that checks the token it receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakingVault {
    address: Address,
    staking_token: Address,
    stakes: HashMap<Address, Amount>,
    total_staked: Amount,
}

/// Stake book captured by [`Checkpoint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultSnapshot {
    stakes: HashMap<Address, Amount>,
    total_staked: Amount,
}

impl StakingVault {
    /// Sum of all stakes.
    pub const fn total_staked(&self) -> Amount {
        self.total_staked
    }
}

impl FromConfig<VaultConfig> for StakingVault {
    fn from_config(config: &VaultConfig) -> Result<Self, ZapError> {
        config.validate()?;
        Ok(Self {
            address: config.address(),
            staking_token: config.staking_token(),
            stakes: HashMap::new(),
            total_staked: Amount::ZERO,
        })
    }
}

impl Checkpoint for StakingVault {
    type Snapshot = VaultSnapshot;

    fn checkpoint(&self) -> VaultSnapshot {
        VaultSnapshot {
            stakes: self.stakes.clone(),
            total_staked: self.total_staked,
        }
    }

    fn restore(&mut self, snapshot: VaultSnapshot) {
        self.stakes = snapshot.stakes;
        self.total_staked = snapshot.total_staked;
    }
}

impl StakingClient for StakingVault {
    fn address(&self) -> Address {
        self.address
    }

    fn staking_token(&self) -> Address {
        self.staking_token
    }

    fn stake<L: Ledger>(
        &mut self,
        ledger: &mut L,
        sender: Address,
        amount: Amount,
        beneficiary: Address,
    ) -> Result<(), ZapError> {
        if amount.is_zero() {
            return Err(ZapError::InvalidQuantity("cannot stake zero"));
        }
        let staked = self.staked(&beneficiary).safe_add(&amount)?;
        let total = self.total_staked.safe_add(&amount)?;

        let (token, vault) = (self.staking_token, self.address);
        transact(ledger, |l| l.transfer_from(token, vault, sender, vault, amount))?;

        self.stakes.insert(beneficiary, staked);
        self.total_staked = total;
        Ok(())
    }

    fn staked(&self, beneficiary: &Address) -> Amount {
        self.stakes.get(beneficiary).copied().unwrap_or_default()
    }
}
