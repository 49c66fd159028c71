//! Optimal-swap solver.
//!
//! Given one input token and a pool snapshot, decide how much of the input
//! to sell so that the remainder and the swap output deposit at the pool's
//! post-swap ratio.  Pure: no locks, no ledger, no mutation.

use tracing::debug;

use crate::config::ZapConfig;
use crate::domain::{Address, Amount, PoolView, SwapPlan};
use crate::error::ZapError;
use crate::math::{amount_out, optimal_swap_in};

/// Solves the single-sided deposit quadratic against a [`PoolView`].
///
/// Reserves at or below `min_reserve` are rejected with
/// [`ZapError::LiquidityTooLow`]: with so few base units the floor
/// rounding in the pool's formulas is a large share of any trade.
///
/// # Examples
///
/// ```
/// use zap_amm::domain::{Address, Amount, FeeRate, PoolView, TokenPair};
/// use zap_amm::zap::OptimalSwapSolver;
///
/// let (a, b) = (Address::from_low_u64(1), Address::from_low_u64(2));
/// let pair = TokenPair::new(a, b).expect("distinct");
/// let view = PoolView::new(
///     Address::from_low_u64(10),
///     pair,
///     Amount::new(1_000_000_000_000_000_000),
///     Amount::new(2_000_000_000_000_000_000),
///     FeeRate::UNISWAP_V2,
///     Address::from_low_u64(11),
/// );
///
/// let solver = OptimalSwapSolver::new(Amount::new(1_000_000_000));
/// let plan = solver.solve(&view, a, Amount::new(10_000_000_000_000_000)).expect("plan");
/// assert_eq!(plan.amount_to_swap, Amount::new(4_995_054_722_102_270));
/// assert_eq!(plan.token_out, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimalSwapSolver {
    min_reserve: Amount,
}

impl OptimalSwapSolver {
    /// Creates a solver that requires both reserves to exceed `min_reserve`.
    pub const fn new(min_reserve: Amount) -> Self {
        Self { min_reserve }
    }

    /// Creates a solver with the configured minimum reserve.
    pub const fn from_config(config: &ZapConfig) -> Self {
        Self::new(config.min_reserve())
    }

    /// Reserve threshold.
    pub const fn min_reserve(&self) -> Amount {
        self.min_reserve
    }

    /// Plans a zap of `amount` of `token_in` into the pool described by
    /// `view`.
    ///
    /// The returned `expected_swap_out` is exactly what the pool pays for
    /// `amount_to_swap` at these reserves.
    ///
    /// # Errors
    ///
    /// - [`ZapError::InputTokenNotInPair`] if `token_in` is not pooled.
    /// - [`ZapError::LiquidityTooLow`] if either reserve is at or below
    ///   the threshold.
    /// - [`ZapError::ZeroInputAmount`] if `amount` is zero.
    /// - [`ZapError::Overflow`] if the swap output cannot be represented.
    pub fn solve(
        &self,
        view: &PoolView,
        token_in: Address,
        amount: Amount,
    ) -> Result<SwapPlan, ZapError> {
        let (reserve_in, reserve_out) = view.reserves_for(&token_in)?;
        if reserve_in <= self.min_reserve || reserve_out <= self.min_reserve {
            return Err(ZapError::LiquidityTooLow);
        }
        if amount.is_zero() {
            return Err(ZapError::ZeroInputAmount);
        }
        let token_out = view.pair().other(&token_in)?;

        let amount_to_swap = optimal_swap_in(amount, reserve_in, view.fee())?;
        let expected_swap_out = amount_out(amount_to_swap, reserve_in, reserve_out, view.fee())?;

        debug!(
            pool = %view.address(),
            token_in = %token_in,
            amount = %amount,
            swap = %amount_to_swap,
            expected_out = %expected_swap_out,
            "solved optimal swap"
        );

        Ok(SwapPlan {
            token_in,
            token_out,
            amount_to_swap,
            expected_swap_out,
        })
    }
}
