//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use zap_amm::prelude::*;
//! ```

pub use crate::domain::{
    Address, Amount, FeeRate, PoolView, Rounding, SwapPlan, TokenPair, ZapInput, ZapRequest,
    ZapResult, ZapState,
};

pub use crate::traits::{Checkpoint, FromConfig, Ledger, PoolClient, StakingClient};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{PoolConfig, VaultConfig, ZapConfig};

pub use crate::error::{Result, ZapError};

pub use crate::ledger::MemoryLedger;
pub use crate::pools::ConstantProductPool;
pub use crate::staking::StakingVault;

pub use crate::zap::{OptimalSwapSolver, ZapOrchestrator};
