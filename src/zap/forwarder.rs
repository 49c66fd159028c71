//! Hands minted share tokens to their final owner.

use tracing::debug;

use crate::domain::{Address, Amount};
use crate::error::ZapError;
use crate::traits::{Ledger, StakingClient};

/// Moves share tokens out of the zap account: either straight to the
/// caller or staked into a vault on the caller's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeForwarder {
    zap: Address,
}

impl StakeForwarder {
    /// Creates a forwarder acting for `zap`.
    pub const fn new(zap: Address) -> Self {
        Self { zap }
    }

    /// Checks that `vault` accepts `share_token`.
    ///
    /// # Errors
    ///
    /// [`ZapError::StakingContractWrongToken`] on a mismatch.
    pub fn check_target<S: StakingClient>(vault: &S, share_token: Address) -> Result<(), ZapError> {
        if vault.staking_token() == share_token {
            Ok(())
        } else {
            Err(ZapError::StakingContractWrongToken)
        }
    }

    /// Forwards `amount` of `share_token` for `beneficiary`.
    ///
    /// Returns the vault address when the shares were staked.
    ///
    /// # Errors
    ///
    /// - [`ZapError::StakingContractWrongToken`] if the vault stakes a
    ///   different token.
    /// - Anything the vault or ledger reports.
    pub fn forward<S, L>(
        &self,
        ledger: &mut L,
        share_token: Address,
        amount: Amount,
        vault: Option<&mut S>,
        beneficiary: Address,
    ) -> Result<Option<Address>, ZapError>
    where
        S: StakingClient,
        L: Ledger,
    {
        let Some(vault) = vault else {
            ledger.transfer(share_token, self.zap, beneficiary, amount)?;
            debug!(shares = %amount, to = %beneficiary, "shares returned");
            return Ok(None);
        };

        Self::check_target(vault, share_token)?;
        let spender = vault.address();
        ledger.approve(share_token, self.zap, spender, amount);
        vault.stake(ledger, self.zap, amount, beneficiary)?;
        ledger.approve(share_token, self.zap, spender, Amount::ZERO);

        debug!(shares = %amount, vault = %spender, beneficiary = %beneficiary, "shares staked");
        Ok(Some(spender))
    }
}
