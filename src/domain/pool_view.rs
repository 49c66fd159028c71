//! Read-only snapshot of a constant-product pool.

use super::{Address, Amount, FeeRate, TokenPair};
use crate::error::ZapError;

/// Reserves, fee and share token of one pool, read at a single instant.
///
/// A view is built fresh from [`PoolClient::view`](crate::traits::PoolClient::view)
/// for every solve and is never cached across calls.  Reserves are stored in
/// the pair's canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolView {
    address: Address,
    pair: TokenPair,
    reserve_a: Amount,
    reserve_b: Amount,
    fee: FeeRate,
    share_token: Address,
}

impl PoolView {
    /// Creates a view.  `reserve_a` belongs to `pair.first()`.
    pub const fn new(
        address: Address,
        pair: TokenPair,
        reserve_a: Amount,
        reserve_b: Amount,
        fee: FeeRate,
        share_token: Address,
    ) -> Self {
        Self {
            address,
            pair,
            reserve_a,
            reserve_b,
            fee,
            share_token,
        }
    }

    /// Pool address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The pool's token pair.
    #[must_use]
    pub const fn pair(&self) -> TokenPair {
        self.pair
    }

    /// Lower-address token.
    #[must_use]
    pub const fn token_a(&self) -> Address {
        self.pair.first()
    }

    /// Higher-address token.
    #[must_use]
    pub const fn token_b(&self) -> Address {
        self.pair.second()
    }

    /// Reserve of [`token_a`](Self::token_a).
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Reserve of [`token_b`](Self::token_b).
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Swap fee.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }

    /// Pool-share token minted on deposit.
    #[must_use]
    pub const fn share_token(&self) -> Address {
        self.share_token
    }

    /// `true` when both reserves are non-zero.
    #[must_use]
    pub const fn has_liquidity(&self) -> bool {
        !self.reserve_a.is_zero() && !self.reserve_b.is_zero()
    }

    /// Reserves oriented to `token_in`: `(reserve_in, reserve_out)`.
    ///
    /// # Errors
    ///
    /// Returns [`ZapError::InputTokenNotInPair`] if `token_in` is not one
    /// of the pool's tokens.
    pub fn reserves_for(&self, token_in: &Address) -> Result<(Amount, Amount), ZapError> {
        if self.pair.is_first(token_in) {
            Ok((self.reserve_a, self.reserve_b))
        } else if self.pair.contains(token_in) {
            Ok((self.reserve_b, self.reserve_a))
        } else {
            Err(ZapError::InputTokenNotInPair)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn view() -> PoolView {
        let Ok(pair) = TokenPair::new(Address::from_low_u64(1), Address::from_low_u64(2)) else {
            panic!("valid pair");
        };
        PoolView::new(
            Address::from_low_u64(10),
            pair,
            Amount::new(100),
            Amount::new(200),
            FeeRate::UNISWAP_V2,
            Address::from_low_u64(11),
        )
    }

    #[test]
    fn reserves_oriented_to_input() {
        let v = view();
        assert_eq!(
            v.reserves_for(&Address::from_low_u64(1)),
            Ok((Amount::new(100), Amount::new(200)))
        );
        assert_eq!(
            v.reserves_for(&Address::from_low_u64(2)),
            Ok((Amount::new(200), Amount::new(100)))
        );
    }

    #[test]
    fn foreign_token_rejected() {
        assert_eq!(
            view().reserves_for(&Address::from_low_u64(3)),
            Err(ZapError::InputTokenNotInPair)
        );
    }

    #[test]
    fn liquidity_flag() {
        assert!(view().has_liquidity());
        let v = view();
        let empty = PoolView::new(
            v.address(),
            v.pair(),
            Amount::ZERO,
            v.reserve_b(),
            v.fee(),
            v.share_token(),
        );
        assert!(!empty.has_liquidity());
    }
}
