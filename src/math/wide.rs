//! 512-bit intermediate arithmetic.
//!
//! Pool formulas multiply two or three 128-bit quantities before dividing.
//! These helpers do the multiplication in [`U512`] and narrow the quotient
//! back to `u128`, so no intermediate product can truncate.

use primitive_types::U512;

use crate::domain::Rounding;
use crate::error::ZapError;

/// Widens a `u128` into a [`U512`].
#[inline]
#[must_use]
pub fn widen(value: u128) -> U512 {
    U512::from(value)
}

/// Narrows a [`U512`] back into `u128`.
///
/// # Errors
///
/// Returns [`ZapError::Overflow`] if `value` needs more than 128 bits.
#[inline]
pub fn narrow(value: U512) -> Result<u128, ZapError> {
    if value.bits() > 128 {
        return Err(ZapError::Overflow("value does not fit in 128 bits"));
    }
    Ok(value.low_u128())
}

/// `a * b` in 512 bits.
///
/// # Errors
///
/// Returns [`ZapError::Overflow`] if the product exceeds 512 bits.
#[inline]
pub fn mul(a: U512, b: U512) -> Result<U512, ZapError> {
    a.checked_mul(b)
        .ok_or(ZapError::Overflow("512-bit multiplication overflow"))
}

/// `numerator / denominator` in 512 bits with explicit rounding.
///
/// # Errors
///
/// Returns [`ZapError::DivisionByZero`] if `denominator` is zero.
pub fn div(numerator: U512, denominator: U512, rounding: Rounding) -> Result<U512, ZapError> {
    if denominator.is_zero() {
        return Err(ZapError::DivisionByZero);
    }
    let (q, r) = numerator.div_mod(denominator);
    if rounding.is_up() && !r.is_zero() {
        // q < numerator <= U512::MAX whenever r != 0 and denominator > 1.
        return Ok(q + U512::one());
    }
    Ok(q)
}

/// `a * b / c` with a 512-bit intermediate, narrowed to `u128`.
///
/// # Errors
///
/// - [`ZapError::DivisionByZero`] if `c` is zero.
/// - [`ZapError::Overflow`] if the quotient exceeds `u128`.
pub fn mul_div(a: u128, b: u128, c: u128, rounding: Rounding) -> Result<u128, ZapError> {
    let product = mul(widen(a), widen(b))?;
    narrow(div(product, widen(c), rounding)?)
}

/// `floor(sqrt(a * b))` with a 512-bit intermediate.
///
/// # Errors
///
/// Never fails for `u128` inputs; the `Result` keeps the narrowing explicit.
pub fn sqrt_mul(a: u128, b: u128) -> Result<u128, ZapError> {
    narrow(isqrt(mul(widen(a), widen(b))?))
}

/// Floor square root by Newton's method.
///
/// Starts from `2^ceil(bits/2)`, which is never below the root, so the
/// iterates decrease monotonically and the first non-decreasing step is
/// the floor.
#[must_use]
pub fn isqrt(value: U512) -> U512 {
    if value.is_zero() {
        return U512::zero();
    }
    let shift = (value.bits() + 1) / 2;
    let two = U512::from(2u8);
    let mut x = U512::one() << shift;
    loop {
        let y = (x + value / x) / two;
        if y >= x {
            return x;
        }
        x = y;
    }
}
