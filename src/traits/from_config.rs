//! Construction of collaborators from validated configuration.
//!
//! Pools and vaults are built from their config structs rather than looked
//! up by name at call time.  The orchestrator receives the constructed
//! clients once, at registration.
//!
//! ```text
//! ConstantProductPool::from_config(&PoolConfig)  -> registered pool
//! StakingVault::from_config(&VaultConfig)        -> registered vault
//! ```
//!
//! There is no blanket implementation; every collaborator/config pairing is
//! written out so its validation stays specific.

use crate::error::ZapError;

/// Builds `Self` from configuration `C`.
pub trait FromConfig<C> {
    /// Validates `config` and constructs the collaborator.
    ///
    /// # Errors
    ///
    /// - [`ZapError::InvalidConfiguration`] if a parameter is out of range
    ///   or inconsistent.
    /// - [`ZapError::InvalidToken`] if a token address is invalid.
    fn from_config(config: &C) -> Result<Self, ZapError>
    where
        Self: Sized;
}
