//! Proportional swap fee expressed as a fraction.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ZapError;

/// A pool's swap fee as `numerator / denominator`.
///
/// Constant-product pools quote fees this way (Uniswap V2 charges `3/1000`)
/// and the optimal-swap quadratic needs both parts, not a rounded
/// percentage.  The [`complement`](Self::complement) `denominator -
/// numerator` is the share of each input that actually moves the price.
///
/// # Examples
///
/// ```
/// use zap_amm::domain::FeeRate;
///
/// let fee = FeeRate::UNISWAP_V2;
/// assert_eq!(fee.numerator(), 3);
/// assert_eq!(fee.denominator(), 1000);
/// assert_eq!(fee.complement(), 997);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFeeRate", into = "RawFeeRate")]
pub struct FeeRate {
    numerator: u32,
    denominator: u32,
}

impl FeeRate {
    /// 0.3%, the Uniswap V2 pair fee.
    pub const UNISWAP_V2: Self = Self {
        numerator: 3,
        denominator: 1000,
    };

    /// A fee-free pool.
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// Creates a validated fee rate.
    ///
    /// # Errors
    ///
    /// Returns [`ZapError::InvalidFee`] if `denominator` is zero or
    /// `numerator >= denominator` (a 100% fee leaves nothing to swap).
    pub const fn new(numerator: u32, denominator: u32) -> Result<Self, ZapError> {
        if denominator == 0 {
            return Err(ZapError::InvalidFee("fee denominator must be non-zero"));
        }
        if numerator >= denominator {
            return Err(ZapError::InvalidFee(
                "fee numerator must be below the denominator",
            ));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Fee numerator.
    #[must_use]
    pub const fn numerator(&self) -> u32 {
        self.numerator
    }

    /// Fee denominator.
    #[must_use]
    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    /// `denominator - numerator`.
    #[must_use]
    pub const fn complement(&self) -> u32 {
        self.denominator - self.numerator
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self::UNISWAP_V2
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[derive(Serialize, Deserialize)]
struct RawFeeRate {
    numerator: u32,
    denominator: u32,
}

impl TryFrom<RawFeeRate> for FeeRate {
    type Error = ZapError;

    fn try_from(raw: RawFeeRate) -> Result<Self, Self::Error> {
        Self::new(raw.numerator, raw.denominator)
    }
}

impl From<FeeRate> for RawFeeRate {
    fn from(fee: FeeRate) -> Self {
        Self {
            numerator: fee.numerator,
            denominator: fee.denominator,
        }
    }
}
