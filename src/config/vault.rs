//! Configuration for a staking vault.

use serde::{Deserialize, Serialize};

use crate::domain::Address;
use crate::error::ZapError;

/// A vault's address and the single token it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    address: Address,
    staking_token: Address,
}

impl VaultConfig {
    /// Creates a validated `VaultConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ZapError::InvalidConfiguration`] if either address is null
    /// or they are equal.
    pub fn new(address: Address, staking_token: Address) -> Result<Self, ZapError> {
        let config = Self {
            address,
            staking_token,
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
                "vault address must not be null",
            ));
        }
        if self.staking_token.is_zero() {
            return Err(ZapError::InvalidConfiguration(
                "staking token must not be null",
            ));
        }
        if self.address == self.staking_token {
            return Err(ZapError::InvalidConfiguration(
                "vault address must differ from its staking token",
            ));
        }
        Ok(())
    }

    /// Vault address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Accepted token.
    #[must_use]
    pub const fn staking_token(&self) -> Address {
        self.staking_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_and_invalid() {
        assert!(VaultConfig::new(Address::from_low_u64(1), Address::from_low_u64(2)).is_ok());
        assert!(VaultConfig::new(Address::zero(), Address::from_low_u64(2)).is_err());
        assert!(VaultConfig::new(Address::from_low_u64(1), Address::zero()).is_err());
        assert!(VaultConfig::new(Address::from_low_u64(1), Address::from_low_u64(1)).is_err());
    }
}
