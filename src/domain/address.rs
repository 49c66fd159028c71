//! Chain-agnostic account and contract address.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A generic, chain-agnostic 32-byte address.
///
/// The same type identifies tokens, user accounts, pools, staking vaults
/// and the zap itself.  All 32-byte sequences are valid, so construction
/// is infallible.  The all-zero address is the null address: it never
/// names a live contract and is where pools lock their minimum liquidity.
///
/// # Examples
///
/// ```
/// use zap_amm::domain::Address;
///
/// let addr = Address::from_bytes([1u8; 32]);
/// assert_eq!(addr.as_bytes(), [1u8; 32]);
/// assert!(!addr.is_zero());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates an address whose last eight bytes hold `value` (big-endian).
    ///
    /// Handy for readable fixtures: `Address::from_low_u64(7)`.
    #[must_use]
    pub const fn from_low_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        let be = value.to_be_bytes();
        let mut i = 0;
        while i < 8 {
            bytes[24 + i] = be[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the null address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the null address.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < 32 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl fmt::Display for Address {
    /// Abbreviated hex form, `0x0102…1f20`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02x}{:02x}\u{2026}{:02x}{:02x}",
            self.0[0], self.0[1], self.0[30], self.0[31]
        )
    }
}
