//! Constant-product formulas shared by the solver and the reference pool.
//!
//! The solver's `expected_swap_out` and the pool's realised output come
//! from the same [`amount_out`], so an estimate against unchanged reserves
//! matches the swap to the unit.
//!
//! With fee `n / D` and complement `g = D - n`:
//!
//! | Quantity | Formula | Rounding |
//! |----------|---------|----------|
//! | swap output | `in·g·Rout / (Rin·D + in·g)` | down |
//! | deposit quote | `a·Rb / Ra` | down |
//! | optimal swap | `(√(R·((g+D)²R + 4gDA)) − (g+D)R) / 2g` | down |

use primitive_types::U512;

use super::wide::{div, isqrt, mul, narrow, widen};
use crate::domain::{Amount, FeeRate, Rounding};
use crate::error::ZapError;

/// Output paid for `amount_in` against `(reserve_in, reserve_out)`.
///
/// The whole input, fee included, stays in the input reserve.
///
/// # Errors
///
/// - [`ZapError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`ZapError::InsufficientLiquidity`] if either reserve is zero.
pub fn amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeRate,
) -> Result<Amount, ZapError> {
    if amount_in.is_zero() {
        return Err(ZapError::InsufficientInputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(ZapError::InsufficientLiquidity);
    }
    let in_with_fee = mul(widen(amount_in.get()), U512::from(fee.complement()))?;
    let numerator = mul(in_with_fee, widen(reserve_out.get()))?;
    let denominator = mul(widen(reserve_in.get()), U512::from(fee.denominator()))?
        .checked_add(in_with_fee)
        .ok_or(ZapError::Overflow("swap denominator overflow"))?;
    let out = div(numerator, denominator, Rounding::Down)?;
    Ok(Amount::new(narrow(out)?))
}

/// Amount of the second token that matches `amount_a` at the ratio
/// `reserve_a : reserve_b`.
///
/// # Errors
///
/// - [`ZapError::InsufficientInputAmount`] if `amount_a` is zero.
/// - [`ZapError::InsufficientLiquidity`] if either reserve is zero.
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount, ZapError> {
    if amount_a.is_zero() {
        return Err(ZapError::InsufficientInputAmount);
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(ZapError::InsufficientLiquidity);
    }
    let product = mul(widen(amount_a.get()), widen(reserve_b.get()))?;
    let matched = div(product, widen(reserve_a.get()), Rounding::Down)?;
    Ok(Amount::new(narrow(matched)?))
}

/// Portion of `amount` to swap so that the remainder and the swap output
/// deposit at the post-swap reserve ratio.
///
/// Solves `g·s² + (g+D)·R·s − A·D·R = 0` for its non-negative root and
/// floors it.  A positive `amount` never yields zero: a root below one
/// unit is raised to one, capped at `amount`.
///
/// # Errors
///
/// - [`ZapError::ZeroReserve`] if `reserve_in` is zero.
/// - [`ZapError::Overflow`] if an intermediate exceeds 512 bits.
pub fn optimal_swap_in(
    amount: Amount,
    reserve_in: Amount,
    fee: FeeRate,
) -> Result<Amount, ZapError> {
    if reserve_in.is_zero() {
        return Err(ZapError::ZeroReserve);
    }
    if amount.is_zero() {
        return Ok(Amount::ZERO);
    }

    let d = U512::from(fee.denominator());
    let g = U512::from(fee.complement());
    let r = widen(reserve_in.get());
    let a = widen(amount.get());

    let g_plus_d = g + d;
    let linear = mul(g_plus_d, r)?;
    let four_gda = mul(mul(U512::from(4u8) * g, d)?, a)?;
    let discriminant = mul(
        r,
        mul(mul(g_plus_d, g_plus_d)?, r)?
            .checked_add(four_gda)
            .ok_or(ZapError::Overflow("discriminant overflow"))?,
    )?;

    let root = isqrt(discriminant);
    let numerator = root
        .checked_sub(linear)
        .ok_or(ZapError::Underflow("optimal swap root below linear term"))?;
    let s = narrow(div(numerator, g * U512::from(2u8), Rounding::Down)?)?;

    let s = Amount::new(s.max(1));
    Ok(s.min(amount))
}
