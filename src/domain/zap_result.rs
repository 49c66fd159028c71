//! Outcome of a successful zap.

use super::{Address, Amount};

/// What a completed zap did.
///
/// `residual` is the zap account's leftover after the call and is always
/// zero for a returned result; a non-zero residual is reported as
/// [`ZapError::ResidualBalance`](crate::error::ZapError::ResidualBalance)
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZapResult {
    /// Pool-share tokens minted and credited to the caller or staked.
    pub share_tokens_minted: Amount,
    /// Zap-held leftover after the call.
    pub residual: Amount,
    /// Input units sold in the swap leg.
    pub amount_swapped: Amount,
    /// Units received from the swap leg.
    pub swap_out: Amount,
    /// Dust of the pair's first token returned to the caller.
    pub refunded_a: Amount,
    /// Dust of the pair's second token returned to the caller.
    pub refunded_b: Amount,
    /// Vault the shares were staked into, if any.
    pub staked_into: Option<Address>,
}

impl ZapResult {
    /// `true` when the shares went into a vault.
    #[must_use]
    pub const fn is_staked(&self) -> bool {
        self.staked_into.is_some()
    }
}
