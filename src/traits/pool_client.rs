//! The liquidity pool as seen by the zap.
//!
//! [`PoolClient`] exposes exactly what a zap needs from a two-token
//! constant-product pool: a fresh [`PoolView`], a swap, and a deposit.
//! Reserve storage, share accounting and fee handling stay behind it.
//!
//! # Token movement
//!
//! Pools pull input with [`Ledger::transfer_from`], so the sender must
//! approve the pool first.  Output and minted shares go to the
//! `recipient` named in the parameters.

use super::{Checkpoint, Ledger};
use crate::domain::{Address, Amount, PoolView};
use crate::error::ZapError;

/// Arguments to [`PoolClient::swap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapParams {
    /// Account the input is pulled from.
    pub sender: Address,
    /// Token being sold.
    pub token_in: Address,
    /// Exact input amount.
    pub amount_in: Amount,
    /// Slippage floor on the output.
    pub min_out: Amount,
    /// Account credited with the output.
    pub recipient: Address,
    /// Unix-seconds deadline.
    pub deadline: u64,
}

/// Arguments to [`PoolClient::add_liquidity`].  Amounts are in the pair's
/// canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositParams {
    /// Account the tokens are pulled from.
    pub sender: Address,
    /// Desired amount of the first token.
    pub amount_a: Amount,
    /// Desired amount of the second token.
    pub amount_b: Amount,
    /// Account credited with minted shares.
    pub recipient: Address,
    /// Unix-seconds deadline.
    pub deadline: u64,
}

/// What a deposit actually consumed and minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositReceipt {
    /// First-token amount pulled from the sender.
    pub used_a: Amount,
    /// Second-token amount pulled from the sender.
    pub used_b: Amount,
    /// Share tokens minted to the recipient.
    pub minted: Amount,
}

impl DepositReceipt {
    /// Desired-minus-used of each token, `(leftover_a, leftover_b)`.
    #[must_use]
    pub const fn leftovers(&self, params: &DepositParams) -> (Amount, Amount) {
        (
            params.amount_a.saturating_sub(&self.used_a),
            params.amount_b.saturating_sub(&self.used_b),
        )
    }
}

/// A two-token constant-product pool.
///
/// Implementations are mutated only through [`swap`](Self::swap) and
/// [`add_liquidity`](Self::add_liquidity); both either complete fully or
/// fail without changing pool or ledger state.
pub trait PoolClient: Checkpoint {
    /// Pool address; also the account holding the reserves on the ledger.
    fn address(&self) -> Address;

    /// Current reserves, fee and share token.
    fn view(&self) -> PoolView;

    /// Sells exactly `params.amount_in` of `params.token_in`.
    ///
    /// # Errors
    ///
    /// - [`ZapError::Expired`] past the deadline.
    /// - [`ZapError::InputTokenNotInPair`] for a foreign token.
    /// - [`ZapError::InsufficientOutputAmount`] below `min_out`.
    /// - Ledger errors while pulling input.
    fn swap<L: Ledger>(&mut self, ledger: &mut L, params: SwapParams) -> Result<Amount, ZapError>;

    /// Deposits up to the desired amounts at the current reserve ratio.
    ///
    /// # Errors
    ///
    /// - [`ZapError::Expired`] past the deadline.
    /// - [`ZapError::InsufficientLiquidityMinted`] if no shares would mint.
    /// - Ledger errors while pulling tokens.
    fn add_liquidity<L: Ledger>(
        &mut self,
        ledger: &mut L,
        params: DepositParams,
    ) -> Result<DepositReceipt, ZapError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftovers_are_desired_minus_used() {
        let params = DepositParams {
            sender: Address::from_low_u64(1),
            amount_a: Amount::new(100),
            amount_b: Amount::new(50),
            recipient: Address::from_low_u64(1),
            deadline: 0,
        };
        let receipt = DepositReceipt {
            used_a: Amount::new(98),
            used_b: Amount::new(50),
            minted: Amount::new(70),
        };
        assert_eq!(receipt.leftovers(&params), (Amount::new(2), Amount::ZERO));
    }
}
