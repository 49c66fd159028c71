//! Collaborator seams.
//!
//! The orchestrator is generic over [`Ledger`], [`PoolClient`] and
//! [`StakingClient`]; every mutable collaborator is also a [`Checkpoint`]
//! so a failed zap can put it back.  [`FromConfig`] builds collaborators
//! from their validated configuration.

mod checkpoint;
mod from_config;
mod ledger;
mod pool_client;
mod staking_client;

pub use checkpoint::{transact, Checkpoint};
pub use from_config::FromConfig;
pub use ledger::Ledger;
pub use pool_client::{DepositParams, DepositReceipt, PoolClient, SwapParams};
pub use staking_client::StakingClient;
