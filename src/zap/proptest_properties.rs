//! Property-based tests using `proptest` for the solver and full zaps.
//!
//! 1. **Solver bounds**: `0 < amount_to_swap <= input` and the expected
//!    output is the pool's own swap formula.
//! 2. **Dust epsilon**: after a successful zap the refunded dust of each
//!    token stays within a rounding-unit bound.
//! 3. **Zero residual**: the zap account ends every call empty, and a
//!    failed call leaves ledger and pool untouched.  The only failures a
//!    valid input may produce are the dust-sized ones: a zero swap
//!    output, nothing minted, or a zero deposit leg.

use proptest::prelude::*;

use super::fixtures::{empty_pool, seed, zap_config, POOL, SHARE, TOKEN_1, TOKEN_2, USER, ZAP};
use super::{OptimalSwapSolver, ZapOrchestrator};
use crate::domain::{Address, Amount, FeeRate, PoolView, TokenPair, ZapInput, ZapRequest, ZapResult};
use crate::error::ZapError;
use crate::ledger::MemoryLedger;
use crate::math::amount_out;
use crate::pools::ConstantProductPool;
use crate::staking::StakingVault;
use crate::traits::{Ledger, PoolClient};

type Orchestrator = ZapOrchestrator<ConstantProductPool, StakingVault>;

const MIN_RESERVE: u128 = 1_000_000_000;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn reserve_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![
        (MIN_RESERVE + 1)..=1_000_000_000_000u128,
        (MIN_RESERVE + 1)..=1_000_000_000_000_000_000_000_000_000_000u128,
    ]
}

fn input_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![
        1u128..=1_000_000u128,
        1u128..=1_000_000_000_000_000_000_000_000_000_000_000u128,
    ]
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn view(reserve_1: u128, reserve_2: u128) -> PoolView {
    let Ok(pair) = TokenPair::new(TOKEN_1, TOKEN_2) else {
        panic!("valid pair");
    };
    PoolView::new(
        POOL,
        pair,
        Amount::new(reserve_1),
        Amount::new(reserve_2),
        FeeRate::UNISWAP_V2,
        SHARE,
    )
}

/// Orchestrator over a TOKEN_1/TOKEN_2 pool seeded with the given
/// reserves, and a ledger where USER holds and has approved `input`.
fn world(reserve_1: u128, reserve_2: u128, token_in: Address, input: u128) -> (Orchestrator, MemoryLedger) {
    let mut pool = empty_pool(POOL, TOKEN_1, TOKEN_2, SHARE);
    let mut ledger = MemoryLedger::new(1_000);
    seed(&mut pool, &mut ledger, reserve_1, reserve_2);

    let Ok(mut orchestrator) = Orchestrator::new(zap_config()) else {
        panic!("orchestrator");
    };
    let Ok(_) = orchestrator.register_pool(pool) else {
        panic!("register");
    };
    let Ok(()) = ledger.mint(token_in, USER, Amount::new(input)) else {
        panic!("fund user");
    };
    ledger.approve(token_in, USER, ZAP, Amount::new(input));
    (orchestrator, ledger)
}

fn zap_account_empty(ledger: &MemoryLedger) -> bool {
    [TOKEN_1, TOKEN_2, SHARE]
        .iter()
        .all(|token| ledger.balance_of(token, &ZAP).is_zero())
        && ledger.native_balance(&ZAP).is_zero()
}

/// Rounding-unit bound on the dust of `(input side, output side)`.
fn dust_bound(view: &PoolView, token_in: Address, input: u128, result: &ZapResult) -> (u128, u128) {
    let Ok((r_in, r_out)) = view.reserves_for(&token_in) else {
        panic!("token in pair");
    };
    let r_in = r_in.get() + result.amount_swapped.get();
    let r_out = r_out.get() - result.swap_out.get();
    let left_in = input - result.amount_swapped.get();
    let left_out = result.swap_out.get();
    (
        8u128
            .saturating_mul(r_in / r_out + 1)
            .saturating_mul(left_in / r_in + 1),
        8u128
            .saturating_mul(r_out / r_in + 1)
            .saturating_mul(left_out / r_out + 1),
    )
}

// ---------------------------------------------------------------------------
// Property 1: Solver bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_solver_swaps_within_input(
        r1 in reserve_strategy(),
        r2 in reserve_strategy(),
        input in input_strategy(),
    ) {
        let input = input.min(r1.saturating_mul(1_000_000));
        let v = view(r1, r2);
        let solver = OptimalSwapSolver::new(Amount::new(MIN_RESERVE));
        let Ok(plan) = solver.solve(&v, TOKEN_1, Amount::new(input)) else {
            return Err(TestCaseError::fail("solver rejected a valid pool"));
        };
        prop_assert!(!plan.amount_to_swap.is_zero());
        prop_assert!(plan.amount_to_swap.get() <= input);

        let Ok(out) = amount_out(plan.amount_to_swap, v.reserve_a(), v.reserve_b(), v.fee()) else {
            return Err(TestCaseError::fail("amount_out failed"));
        };
        prop_assert_eq!(out, plan.expected_swap_out);
    }

    #[test]
    fn prop_solver_rejects_shallow_pools(
        shallow in 1u128..=MIN_RESERVE,
        deep in reserve_strategy(),
        input in 1u128..=1_000_000_000_000u128,
    ) {
        let solver = OptimalSwapSolver::new(Amount::new(MIN_RESERVE));
        prop_assert_eq!(
            solver.solve(&view(shallow, deep), TOKEN_1, Amount::new(input)),
            Err(ZapError::LiquidityTooLow)
        );
        prop_assert_eq!(
            solver.solve(&view(deep, shallow), TOKEN_1, Amount::new(input)),
            Err(ZapError::LiquidityTooLow)
        );
    }
}

// ---------------------------------------------------------------------------
// Properties 2 and 3: Dust epsilon and zero residual
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_zap_dust_within_epsilon(
        r1 in reserve_strategy(),
        r2 in reserve_strategy(),
        input in input_strategy(),
        from_second in any::<bool>(),
    ) {
        let token_in = if from_second { TOKEN_2 } else { TOKEN_1 };
        let r_in = if from_second { r2 } else { r1 };
        let input = input.min(r_in.saturating_mul(1_000_000));
        let (orchestrator, mut ledger) = world(r1, r2, token_in, input);
        let Ok(handle) = orchestrator.pool(&POOL) else {
            return Err(TestCaseError::fail("pool registered"));
        };
        let view_before = handle.lock().view();
        let ledger_before = ledger.clone();

        let request = ZapRequest::new(POOL, USER, ZapInput::Token(token_in), Amount::new(input), Amount::ZERO);
        match orchestrator.zap_in(&mut ledger, &request) {
            Ok(result) => {
                let (bound_in, bound_out) = dust_bound(&view_before, token_in, input, &result);
                let (dust_in, dust_out) = if from_second {
                    (result.refunded_b.get(), result.refunded_a.get())
                } else {
                    (result.refunded_a.get(), result.refunded_b.get())
                };
                prop_assert!(dust_in <= bound_in, "input dust {} > {}", dust_in, bound_in);
                prop_assert!(dust_out <= bound_out, "output dust {} > {}", dust_out, bound_out);
                prop_assert!(!result.share_tokens_minted.is_zero());
                prop_assert_eq!(ledger.balance_of(&SHARE, &USER), result.share_tokens_minted);
            }
            // Dust-sized inputs may swap or mint nothing; the call must then be a no-op.
            Err(ZapError::InsufficientOutputAmount { actual, .. }) if actual.is_zero() => {
                prop_assert_eq!(&ledger, &ledger_before);
                prop_assert_eq!(handle.lock().view(), view_before);
            }
            Err(ZapError::InsufficientLiquidityMinted | ZapError::InsufficientInputAmount) => {
                prop_assert_eq!(&ledger, &ledger_before);
                prop_assert_eq!(handle.lock().view(), view_before);
            }
            Err(other) => {
                return Err(TestCaseError::fail(format!("unexpected zap error: {other:?}")));
            }
        }
        prop_assert!(zap_account_empty(&ledger));
    }

    #[test]
    fn prop_slippage_floor_is_all_or_nothing(
        r1 in reserve_strategy(),
        r2 in reserve_strategy(),
        input in 1_000_000u128..=1_000_000_000_000_000_000_000u128,
        slack in 0u128..=2,
    ) {
        let input = input.min(r1.saturating_mul(1_000_000));
        let (orchestrator, mut ledger) = world(r1, r2, TOKEN_1, input);
        let Ok(plan) = orchestrator.estimate_swap(&POOL, TOKEN_1, Amount::new(input)) else {
            return Err(TestCaseError::fail("estimate"));
        };
        // slack 0 and 1 sit at or below the estimate; 2 is one unit above it.
        let min_out = (plan.expected_swap_out.get() + slack).saturating_sub(1);
        let ledger_before = ledger.clone();

        let request = ZapRequest::new(POOL, USER, ZapInput::Token(TOKEN_1), Amount::new(input), Amount::new(min_out));
        match orchestrator.zap_in(&mut ledger, &request) {
            Ok(result) => {
                prop_assert!(min_out <= plan.expected_swap_out.get());
                prop_assert_eq!(result.swap_out, plan.expected_swap_out);
            }
            Err(ZapError::InsufficientOutputAmount { .. }) => {
                prop_assert!(min_out > plan.expected_swap_out.get() || plan.expected_swap_out.is_zero());
                prop_assert_eq!(&ledger, &ledger_before);
            }
            Err(ZapError::InsufficientLiquidityMinted | ZapError::InsufficientInputAmount) => {
                prop_assert_eq!(&ledger, &ledger_before);
            }
            Err(other) => {
                return Err(TestCaseError::fail(format!("unexpected zap error: {other:?}")));
            }
        }
        prop_assert!(zap_account_empty(&ledger));
    }
}
