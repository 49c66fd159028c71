//! Staking vault implementations.

mod vault;

pub use vault::{StakingVault, VaultSnapshot};
