//! Configuration for a constant-product pool.

use serde::{Deserialize, Serialize};

use crate::domain::{Address, FeeRate, TokenPair};
use crate::error::ZapError;

/// Immutable parameters of a Uniswap V2 style pair.
///
/// Pools start empty; the first deposit sets the price.
///
/// # Validation
///
/// - `address` and `share_token` are non-null.
/// - `share_token` is neither of the pair's tokens and not the pool
///   address itself.
/// - The pair and fee are validated when they are constructed or
///   deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    address: Address,
    token_pair: TokenPair,
    #[serde(default)]
    fee: FeeRate,
    share_token: Address,
}

impl PoolConfig {
    /// Creates a validated `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ZapError::InvalidConfiguration`] if an address is null or
    /// the share token collides with the pair or pool.
    pub fn new(
        address: Address,
        token_pair: TokenPair,
        fee: FeeRate,
        share_token: Address,
    ) -> Result<Self, ZapError> {
        let config = Self {
            address,
            token_pair,
            fee,
            share_token,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ZapError::InvalidConfiguration`] on the first violation.
    pub fn validate(&self) -> Result<(), ZapError> {
        if self.address.is_zero() {
            return Err(ZapError::InvalidConfiguration(
                "pool address must not be null",
            ));
        }
        if self.share_token.is_zero() {
            return Err(ZapError::InvalidConfiguration(
                "share token must not be null",
            ));
        }
        if self.token_pair.contains(&self.share_token) {
            return Err(ZapError::InvalidConfiguration(
                "share token must differ from the pooled tokens",
            ));
        }
        if self.token_pair.contains(&self.address) || self.share_token == self.address {
            return Err(ZapError::InvalidConfiguration(
                "pool address must differ from its tokens",
            ));
        }
        Ok(())
    }

    /// Pool address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Pooled tokens.
    #[must_use]
    pub const fn token_pair(&self) -> TokenPair {
        self.token_pair
    }

    /// Swap fee.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }

    /// Pool-share token.
    #[must_use]
    pub const fn share_token(&self) -> Address {
        self.share_token
    }
}
