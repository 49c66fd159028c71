//! Integer arithmetic for pool and solver calculations.
//!
//! | Module | Provides |
//! |--------|----------|
//! | `checked` | [`CheckedArithmetic`]: `Option` ops lifted into [`ZapError`](crate::error::ZapError) |
//! | `wide` | 512-bit [`mul_div`], Newton [`isqrt`] and [`sqrt_mul`] |
//! | `cpmm` | [`amount_out`], [`quote`], [`optimal_swap_in`] |
//!
//! # Rounding convention
//!
//! Round against the trader: swap outputs, deposit quotes, minted shares
//! and the optimal swap amount all round down.

mod checked;
mod cpmm;
mod wide;

pub use checked::CheckedArithmetic;
pub use cpmm::{amount_out, optimal_swap_in, quote};
pub use wide::{isqrt, mul_div, sqrt_mul};
