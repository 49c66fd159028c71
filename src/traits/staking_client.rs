//! A staking vault that accepts pool-share tokens.

use super::{Checkpoint, Ledger};
use crate::domain::{Address, Amount};
use crate::error::ZapError;

/// A single-token staking vault.
///
/// The zap only needs to know which token the vault accepts and how to
/// stake on someone else's behalf.  Reward accounting is the vault's own
/// business.
pub trait StakingClient: Checkpoint {
    /// Vault address; also the account holding staked tokens.
    fn address(&self) -> Address;

    /// The one token this vault accepts.
    fn staking_token(&self) -> Address;

    /// Pulls `amount` of the staking token from `sender` and credits it to
    /// `beneficiary`.  The sender must have approved the vault.
    ///
    /// # Errors
    ///
    /// - [`ZapError::InvalidQuantity`] for a zero amount.
    /// - Ledger errors while pulling tokens.
    fn stake<L: Ledger>(
        &mut self,
        ledger: &mut L,
        sender: Address,
        amount: Amount,
        beneficiary: Address,
    ) -> Result<(), ZapError>;

    /// Total staked by `beneficiary`.
    fn staked(&self, beneficiary: &Address) -> Amount;
}
