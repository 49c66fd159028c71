//! Ordered pair of distinct token addresses.

use serde::{Deserialize, Serialize};

use super::Address;
use crate::error::ZapError;

/// The two tokens of a liquidity pool, canonically sorted by address.
///
/// Canonical order guarantees `first() < second()`, so `(A, B)` and
/// `(B, A)` describe the same pool.  Reserves, deposit amounts and
/// refunds are always reported in this order.
///
/// # Examples
///
/// ```
/// use zap_amm::domain::{Address, TokenPair};
///
/// let a = Address::from_low_u64(1);
/// let b = Address::from_low_u64(2);
/// let pair = TokenPair::new(b, a).expect("distinct tokens");
/// assert_eq!(pair.first(), a);
/// assert_eq!(pair.other(&a), Ok(b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Address; 2]", into = "[Address; 2]")]
pub struct TokenPair {
    token_a: Address,
    token_b: Address,
}

impl TokenPair {
    /// Creates a new canonically-ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// Returns [`ZapError::InvalidToken`] if the two addresses are equal or
    /// either one is the null address.
    pub fn new(token1: Address, token2: Address) -> Result<Self, ZapError> {
        if token1.is_zero() || token2.is_zero() {
            return Err(ZapError::InvalidToken("token address must not be null"));
        }
        if token1 == token2 {
            return Err(ZapError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }
        let (token_a, token_b) = if token1 < token2 {
            (token1, token2)
        } else {
            (token2, token1)
        };
        Ok(Self { token_a, token_b })
    }

    /// Returns the lower-address token.
    #[must_use]
    pub const fn first(&self) -> Address {
        self.token_a
    }

    /// Returns the higher-address token.
    #[must_use]
    pub const fn second(&self) -> Address {
        self.token_b
    }

    /// Returns `true` if `token` is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &Address) -> bool {
        self.token_a == *token || self.token_b == *token
    }

    /// Returns `true` if `token` is the first (lower-address) token.
    #[must_use]
    pub fn is_first(&self, token: &Address) -> bool {
        self.token_a == *token
    }

    /// Returns the counterpart of `token` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`ZapError::InputTokenNotInPair`] if `token` is not in the pair.
    pub fn other(&self, token: &Address) -> Result<Address, ZapError> {
        if *token == self.token_a {
            Ok(self.token_b)
        } else if *token == self.token_b {
            Ok(self.token_a)
        } else {
            Err(ZapError::InputTokenNotInPair)
        }
    }
}

impl TryFrom<[Address; 2]> for TokenPair {
    type Error = ZapError;

    fn try_from(tokens: [Address; 2]) -> Result<Self, Self::Error> {
        Self::new(tokens[0], tokens[1])
    }
}

impl From<TokenPair> for [Address; 2] {
    fn from(pair: TokenPair) -> Self {
        [pair.token_a, pair.token_b]
    }
}
