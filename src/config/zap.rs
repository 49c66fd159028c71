//! Configuration for the zap orchestrator.

use serde::{Deserialize, Serialize};

use crate::domain::{Address, Amount};
use crate::error::ZapError;

/// Default minimum reserve, in base units, below which the solver refuses
/// to plan.
pub const DEFAULT_MIN_RESERVE: Amount = Amount::new(1_000_000_000);

const fn default_min_reserve() -> Amount {
    DEFAULT_MIN_RESERVE
}

/// Per-deployment settings passed to
/// [`ZapOrchestrator::new`](crate::zap::ZapOrchestrator::new).
///
/// # Validation
///
/// - `zap_address` and `native_wrapper` are non-null and distinct.
/// - `min_reserve` is non-zero.
///
/// # Examples
///
/// ```
/// use zap_amm::config::ZapConfig;
///
/// let cfg: ZapConfig = serde_json::from_str(
///     r#"{
///         "zap_address": [0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,9],
///         "native_wrapper": [0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,8]
///     }"#,
/// )
/// .expect("valid json");
/// assert!(cfg.validate().is_ok());
/// assert_eq!(cfg.min_reserve().get(), 1_000_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZapConfig {
    zap_address: Address,
    native_wrapper: Address,
    #[serde(default = "default_min_reserve")]
    min_reserve: Amount,
}

impl ZapConfig {
    /// Creates a validated config with [`DEFAULT_MIN_RESERVE`].
    ///
    /// # Errors
    ///
    /// Returns [`ZapError::InvalidConfiguration`] on invalid addresses.
    pub fn new(zap_address: Address, native_wrapper: Address) -> Result<Self, ZapError> {
        let config = Self {
            zap_address,
            native_wrapper,
            min_reserve: DEFAULT_MIN_RESERVE,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the minimum reserve.
    ///
    /// # Errors
    ///
    /// Returns [`ZapError::InvalidConfiguration`] for zero.
    pub fn with_min_reserve(mut self, min_reserve: Amount) -> Result<Self, ZapError> {
        self.min_reserve = min_reserve;
        self.validate()?;
        Ok(self)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ZapError::InvalidConfiguration`] on the first violation.
    pub fn validate(&self) -> Result<(), ZapError> {
        if self.zap_address.is_zero() {
            return Err(ZapError::InvalidConfiguration(
                "zap address must not be null",
            ));
        }
        if self.native_wrapper.is_zero() {
            return Err(ZapError::InvalidConfiguration(
                "native wrapper must not be null",
            ));
        }
        if self.zap_address == self.native_wrapper {
            return Err(ZapError::InvalidConfiguration(
                "zap address must differ from the native wrapper",
            ));
        }
        if self.min_reserve.is_zero() {
            return Err(ZapError::InvalidConfiguration(
                "minimum reserve must be non-zero",
            ));
        }
        Ok(())
    }

    /// Account the zap holds funds under while a call runs.
    #[must_use]
    pub const fn zap_address(&self) -> Address {
        self.zap_address
    }

    /// Wrapped-native token used for native-currency zaps.
    #[must_use]
    pub const fn native_wrapper(&self) -> Address {
        self.native_wrapper
    }

    /// Reserves must be strictly above this to plan a swap.
    pub const fn min_reserve(&self) -> Amount {
        self.min_reserve
    }
}
