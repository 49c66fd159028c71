//! Zap lifecycle states.

use core::fmt;

/// Stage of a zap call.
///
/// Stages run strictly in order.  Any failure moves the call to
/// [`Aborted`](Self::Aborted) and unwinds every earlier stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZapState {
    /// Request checks; nothing is mutated.
    Validate,
    /// Solve the swap against a fresh pool view.
    Plan,
    /// Sell the swap leg.
    Swap,
    /// Add both legs as liquidity and sweep dust.
    Deposit,
    /// Stake or return the minted shares.
    Forward,
    /// Finished; post-condition held.
    Done,
    /// Failed and rolled back.
    Aborted,
}

impl ZapState {
    /// The stage that follows a successful `self`, or `None` when terminal.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Validate => Some(Self::Plan),
            Self::Plan => Some(Self::Swap),
            Self::Swap => Some(Self::Deposit),
            Self::Deposit => Some(Self::Forward),
            Self::Forward => Some(Self::Done),
            Self::Done | Self::Aborted => None,
        }
    }

    /// `true` for `Done` and `Aborted`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// `true` for stages that mutate pool, vault or ledger state.
    #[must_use]
    pub const fn is_mutating(self) -> bool {
        matches!(self, Self::Swap | Self::Deposit | Self::Forward)
    }
}

impl fmt::Display for ZapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validate => "validate",
            Self::Plan => "plan",
            Self::Swap => "swap",
            Self::Deposit => "deposit",
            Self::Forward => "forward",
            Self::Done => "done",
            Self::Aborted => "aborted",
        };
        f.write_str(name)
    }
}
