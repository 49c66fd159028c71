//! Sells the swap leg of a zap.

use tracing::debug;

use crate::domain::{Address, Amount, SwapPlan};
use crate::error::ZapError;
use crate::traits::{Ledger, PoolClient, SwapParams};

/// Swaps the planned input amount through the target pool on behalf of
/// the zap account, crediting the output back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapExecutor {
    zap: Address,
}

impl SwapExecutor {
    /// Creates an executor acting for `zap`.
    pub const fn new(zap: Address) -> Self {
        Self { zap }
    }

    /// Account that sells and receives.
    pub const fn zap(&self) -> Address {
        self.zap
    }

    /// Executes `plan` against `pool`, requiring at least `min_out`.
    ///
    /// The pool is approved for exactly `plan.amount_to_swap` and the
    /// approval is cleared afterwards, so nothing is left for a later
    /// caller to spend.
    ///
    /// # Errors
    ///
    /// - [`ZapError::InsufficientOutputAmount`] if the pool pays less than
    ///   `min_out`.
    /// - Anything the pool or ledger reports.
    pub fn execute<P, L>(
        &self,
        pool: &mut P,
        ledger: &mut L,
        plan: &SwapPlan,
        min_out: Amount,
        deadline: u64,
    ) -> Result<Amount, ZapError>
    where
        P: PoolClient,
        L: Ledger,
    {
        let spender = pool.address();
        ledger.approve(plan.token_in, self.zap, spender, plan.amount_to_swap);
        let out = pool.swap(
            ledger,
            SwapParams {
                sender: self.zap,
                token_in: plan.token_in,
                amount_in: plan.amount_to_swap,
                min_out,
                recipient: self.zap,
                deadline,
            },
        )?;
        ledger.approve(plan.token_in, self.zap, spender, Amount::ZERO);

        if out < min_out {
            return Err(ZapError::InsufficientOutputAmount {
                actual: out,
                minimum: min_out,
            });
        }

        debug!(
            pool = %spender,
            sold = %plan.amount_to_swap,
            received = %out,
            expected = %plan.expected_swap_out,
            "swap leg executed"
        );
        Ok(out)
    }
}
