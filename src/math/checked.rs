//! Checked arithmetic that reports failures as [`ZapError`].
//!
//! [`Amount`]'s own checked methods return `Option`.  This trait lifts them
//! into `Result` with a specific variant per failure, so pool, ledger and
//! zap code can use `?` throughout.
//!
//! ```
//! use zap_amm::domain::{Amount, Rounding};
//! use zap_amm::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(1_000);
//! assert_eq!(reserve.safe_sub(&Amount::new(1)), Ok(Amount::new(999)));
//! assert!(reserve.safe_div(&Amount::ZERO, Rounding::Down).is_err());
//! ```

use crate::domain::{Amount, Rounding};
use crate::error::ZapError;

/// Fallible arithmetic for domain wrapper types.
///
/// Implementations never panic and never saturate.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`ZapError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, ZapError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`ZapError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, ZapError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`ZapError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_mul(&self, other: &Self) -> Result<Self, ZapError>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`ZapError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, ZapError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, ZapError> {
        self.checked_add(other)
            .ok_or(ZapError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, ZapError> {
        self.checked_sub(other)
            .ok_or(ZapError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, ZapError> {
        self.checked_mul(other)
            .ok_or(ZapError::Overflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, ZapError> {
        self.checked_div(other, rounding)
            .ok_or(ZapError::DivisionByZero)
    }
}
