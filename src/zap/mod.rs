//! Single-asset zaps into a constant-product pool.
//!
//! | Module | Stage |
//! |--------|-------|
//! | `solver` | Plan: [`OptimalSwapSolver`] |
//! | `executor` | Swap: [`SwapExecutor`] |
//! | `depositor` | Deposit and dust sweep: [`LiquidityDepositor`] |
//! | `forwarder` | Forward: [`StakeForwarder`] |
//! | `unit_of_work` | Rollback journal: [`UnitOfWork`] |
//! | `orchestrator` | Entry points: [`ZapOrchestrator`] |

mod depositor;
mod executor;
mod forwarder;
mod orchestrator;
mod solver;
mod unit_of_work;

#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use depositor::{DepositOutcome, DepositTerms, LiquidityDepositor};
pub use executor::SwapExecutor;
pub use forwarder::StakeForwarder;
pub use orchestrator::ZapOrchestrator;
pub use solver::OptimalSwapSolver;
pub use unit_of_work::UnitOfWork;
