//! # Zap AMM
//!
//! Single-asset zaps into two-token constant-product pools: hold one
//! asset, end up with pool shares (optionally staked) in one atomic call
//! with nothing left behind in the zap account.
//!
//! The heart of the crate is the optimal-swap solver.  Given the input
//! amount `A` and the pool's reserve `R` of that token, it sells the `s`
//! that solves the fee-adjusted quadratic
//!
//! ```text
//! g·s² + (g + D)·R·s − A·D·R = 0        (g = D − fee numerator)
//! ```
//!
//! so the unsold remainder and the swap output deposit at the post-swap
//! reserve ratio with only rounding-unit dust.
//!
//! # Quick Start
//!
//! ```rust
//! use zap_amm::prelude::*;
//! use zap_amm::traits::DepositParams;
//!
//! let (usdc, weth) = (Address::from_low_u64(1), Address::from_low_u64(2));
//! let (pool_addr, share) = (Address::from_low_u64(10), Address::from_low_u64(11));
//! let (zap, wrapper) = (Address::from_low_u64(40), Address::from_low_u64(5));
//! let (lp, alice) = (Address::from_low_u64(20), Address::from_low_u64(41));
//!
//! let mut ledger = MemoryLedger::new(1_000);
//!
//! // 1. Seed a 1:2 pool
//! let pair = TokenPair::new(usdc, weth).expect("distinct tokens");
//! let config = PoolConfig::new(pool_addr, pair, FeeRate::UNISWAP_V2, share).expect("valid config");
//! let mut pool = ConstantProductPool::from_config(&config).expect("pool");
//! ledger.mint(usdc, lp, Amount::new(1_000_000_000_000)).expect("mint");
//! ledger.mint(weth, lp, Amount::new(2_000_000_000_000)).expect("mint");
//! ledger.approve(usdc, lp, pool_addr, Amount::new(1_000_000_000_000));
//! ledger.approve(weth, lp, pool_addr, Amount::new(2_000_000_000_000));
//! pool.add_liquidity(&mut ledger, DepositParams {
//!     sender: lp,
//!     amount_a: Amount::new(1_000_000_000_000),
//!     amount_b: Amount::new(2_000_000_000_000),
//!     recipient: lp,
//!     deadline: u64::MAX,
//! })
//! .expect("seeded");
//!
//! // 2. Register it with an orchestrator
//! let mut zapper: ZapOrchestrator<ConstantProductPool, StakingVault> =
//!     ZapOrchestrator::new(ZapConfig::new(zap, wrapper).expect("config")).expect("orchestrator");
//! zapper.register_pool(pool).expect("registered");
//!
//! // 3. Estimate, then zap with the estimate as the slippage floor
//! let amount = Amount::new(10_000_000);
//! ledger.mint(usdc, alice, amount).expect("mint");
//! ledger.approve(usdc, alice, zap, amount);
//! let plan = zapper.estimate_swap(&pool_addr, usdc, amount).expect("estimate");
//! let request = ZapRequest::new(pool_addr, alice, ZapInput::Token(usdc), amount, plan.expected_swap_out);
//! let result = zapper.zap_in(&mut ledger, &request).expect("zap");
//!
//! assert_eq!(ledger.balance_of(&share, &alice), result.share_tokens_minted);
//! assert_eq!(ledger.balance_of(&usdc, &zap), Amount::ZERO);
//! assert_eq!(ledger.balance_of(&weth, &zap), Amount::ZERO);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  ZapOrchestrator  │  zap_in / zap_in_native / estimate_swap
//! └────────┬─────────┘
//!          │ Validate → Plan → Swap → Deposit → Forward → Done
//!          ▼
//! ┌──────────────────┐
//! │   Zap stages      │  OptimalSwapSolver, SwapExecutor,
//! │                   │  LiquidityDepositor, StakeForwarder, UnitOfWork
//! └────────┬─────────┘
//!          │ PoolClient + StakingClient + Ledger traits
//!          ▼
//! ┌──────────────────┐
//! │  Collaborators    │  ConstantProductPool, StakingVault, MemoryLedger
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │  Domain + math    │  Address, Amount, FeeRate, U512 mul_div / isqrt
//! └──────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Address`](domain::Address), [`Amount`](domain::Amount), [`ZapRequest`](domain::ZapRequest), etc. |
//! | [`traits`] | Collaborator seams: [`Ledger`](traits::Ledger), [`PoolClient`](traits::PoolClient), [`StakingClient`](traits::StakingClient), [`Checkpoint`](traits::Checkpoint) |
//! | [`config`] | Validated configuration: [`ZapConfig`](config::ZapConfig), [`PoolConfig`](config::PoolConfig), [`VaultConfig`](config::VaultConfig) |
//! | [`zap`] | Solver, stages and the [`ZapOrchestrator`](zap::ZapOrchestrator) |
//! | [`pools`] | [`ConstantProductPool`](pools::ConstantProductPool) |
//! | [`staking`] | [`StakingVault`](staking::StakingVault) |
//! | [`ledger`] | [`MemoryLedger`](ledger::MemoryLedger) |
//! | [`math`] | Checked and 512-bit widened arithmetic, swap formulas |
//! | [`error`] | [`ZapError`](error::ZapError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod staking;
pub mod traits;
pub mod zap;
