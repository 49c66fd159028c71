//! Output of the optimal-swap solver.

use super::{Address, Amount};

/// How much of the input to swap and what the pool will pay for it.
///
/// Invariant: `amount_to_swap <= input_amount` of the request that
/// produced the plan.  `expected_swap_out` is computed with the pool's own
/// formula against the reserves the plan was solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapPlan {
    /// Token being sold.
    pub token_in: Address,
    /// Token being bought.
    pub token_out: Address,
    /// Portion of the input to swap.
    pub amount_to_swap: Amount,
    /// Output the pool pays for `amount_to_swap` at the solved reserves.
    pub expected_swap_out: Amount,
}

impl SwapPlan {
    /// Input remaining for the direct deposit leg.
    ///
    /// Saturates at zero if `input_amount` is smaller than the swap leg.
    pub const fn remainder(&self, input_amount: Amount) -> Amount {
        input_amount.saturating_sub(&self.amount_to_swap)
    }
}
