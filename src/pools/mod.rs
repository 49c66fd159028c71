//! Reference pool implementations.
//!
//! | Pool | Style |
//! |------|-------|
//! | [`ConstantProductPool`] | Uniswap V2 pair with router deposit matching |
//!
//! Pools are reached through [`PoolClient`](crate::traits::PoolClient);
//! the zap never touches reserves directly.

mod constant_product;

pub use constant_product::{ConstantProductPool, PoolSnapshot, MINIMUM_LIQUIDITY};
