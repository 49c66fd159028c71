//! Token and native-currency state.

use super::Checkpoint;
use crate::domain::{Address, Amount};
use crate::error::ZapError;

/// Balances, allowances and native currency for every account.
///
/// The ledger stands in for the token contracts and the chain's native
/// balance table.  Pools, vaults and the zap only move value through it,
/// so a single [`Checkpoint`] of the ledger captures every balance a zap
/// can touch.
///
/// # Native wrapping
///
/// [`wrap_native`](Self::wrap_native) moves native currency from `owner`
/// into the wrapper contract's account and mints the same amount of the
/// wrapper token to `owner`.  [`unwrap_native`](Self::unwrap_native) is
/// the exact inverse.
///
/// # Errors
///
/// Mutating methods fail with [`ZapError::InsufficientBalance`],
/// [`ZapError::InsufficientAllowance`] or [`ZapError::Overflow`] and leave
/// the ledger unchanged when they do.
pub trait Ledger: Checkpoint {
    /// Current block timestamp in unix seconds.
    fn timestamp(&self) -> u64;

    /// Token balance of `owner`.
    fn balance_of(&self, token: &Address, owner: &Address) -> Amount;

    /// Total supply of `token`.
    fn total_supply(&self, token: &Address) -> Amount;

    /// Native-currency balance of `owner`.
    fn native_balance(&self, owner: &Address) -> Amount;

    /// Amount `spender` may move out of `owner`'s `token` balance.
    fn allowance(&self, token: &Address, owner: &Address, spender: &Address) -> Amount;

    /// Sets `spender`'s allowance over `owner`'s `token` balance.
    fn approve(&mut self, token: Address, owner: Address, spender: Address, amount: Amount);

    /// Moves `amount` of `token` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`ZapError::InsufficientBalance`] if `from` holds less than `amount`.
    fn transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), ZapError>;

    /// Moves `amount` of `token` from `from` to `to` on behalf of
    /// `spender`, consuming its allowance.
    ///
    /// # Errors
    ///
    /// [`ZapError::InsufficientAllowance`] or
    /// [`ZapError::InsufficientBalance`].
    fn transfer_from(
        &mut self,
        token: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), ZapError>;

    /// Moves native currency.
    ///
    /// # Errors
    ///
    /// [`ZapError::InsufficientBalance`] if `from` holds less than `amount`.
    fn transfer_native(&mut self, from: Address, to: Address, amount: Amount)
        -> Result<(), ZapError>;

    /// Creates `amount` of `token` in `to`'s balance.
    ///
    /// # Errors
    ///
    /// [`ZapError::Overflow`] if the balance or supply would overflow.
    fn mint(&mut self, token: Address, to: Address, amount: Amount) -> Result<(), ZapError>;

    /// Destroys `amount` of `token` from `from`'s balance.
    ///
    /// # Errors
    ///
    /// [`ZapError::InsufficientBalance`] if `from` holds less than `amount`.
    fn burn(&mut self, token: Address, from: Address, amount: Amount) -> Result<(), ZapError>;

    /// Converts `owner`'s native currency into `wrapper` tokens.
    ///
    /// # Errors
    ///
    /// [`ZapError::InsufficientBalance`] if `owner` lacks the native amount.
    fn wrap_native(
        &mut self,
        wrapper: Address,
        owner: Address,
        amount: Amount,
    ) -> Result<(), ZapError>;

    /// Converts `owner`'s `wrapper` tokens back into native currency.
    ///
    /// # Errors
    ///
    /// [`ZapError::InsufficientBalance`] if `owner` lacks the wrapped amount.
    fn unwrap_native(
        &mut self,
        wrapper: Address,
        owner: Address,
        amount: Amount,
    ) -> Result<(), ZapError>;
}
