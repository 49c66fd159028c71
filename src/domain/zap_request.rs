//! A single zap call's parameters.

use super::{Address, Amount};

/// What the caller is zapping in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZapInput {
    /// An ERC-20 style token pulled from the caller's allowance.
    Token(Address),
    /// The chain's native currency, wrapped before entering the pool.
    Native,
}

impl ZapInput {
    /// `true` for [`ZapInput::Native`].
    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }

    /// The token that enters the pool, resolving `Native` to `native_wrapper`.
    #[must_use]
    pub const fn pool_token(&self, native_wrapper: Address) -> Address {
        match self {
            Self::Token(token) => *token,
            Self::Native => native_wrapper,
        }
    }
}

/// Parameters of one `zap_in` / `zap_in_native` call.
///
/// # Examples
///
/// ```
/// use zap_amm::domain::{Address, Amount, ZapInput, ZapRequest};
///
/// let req = ZapRequest::new(
///     Address::from_low_u64(100),
///     Address::from_low_u64(7),
///     ZapInput::Token(Address::from_low_u64(1)),
///     Amount::new(1_000),
///     Amount::new(450),
/// )
/// .with_stake_target(Address::from_low_u64(200))
/// .with_deadline(1_700_000_000);
/// assert_eq!(req.stake_target, Some(Address::from_low_u64(200)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZapRequest {
    /// Target pool.
    pub pool: Address,
    /// Account paying the input and receiving shares, stake and dust.
    pub caller: Address,
    /// Input asset.
    pub input: ZapInput,
    /// Input quantity; must be non-zero.
    pub input_amount: Amount,
    /// Slippage floor for the swap leg.
    pub min_swap_out: Amount,
    /// Staking vault to forward shares into; `None` or the null address
    /// credits shares to the caller.
    pub stake_target: Option<Address>,
    /// Unix-seconds deadline; `None` means the call must complete at the
    /// current ledger timestamp.
    pub deadline: Option<u64>,
}

impl ZapRequest {
    /// Creates a request with no stake target and no explicit deadline.
    pub const fn new(
        pool: Address,
        caller: Address,
        input: ZapInput,
        input_amount: Amount,
        min_swap_out: Amount,
    ) -> Self {
        Self {
            pool,
            caller,
            input,
            input_amount,
            min_swap_out,
            stake_target: None,
            deadline: None,
        }
    }

    /// Forwards minted shares into `vault`.
    #[must_use]
    pub const fn with_stake_target(mut self, vault: Address) -> Self {
        self.stake_target = Some(vault);
        self
    }

    /// Sets an explicit deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: u64) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// The stake target with the null address folded into `None`.
    #[must_use]
    pub fn effective_stake_target(&self) -> Option<Address> {
        self.stake_target.filter(|vault| !vault.is_zero())
    }
}
