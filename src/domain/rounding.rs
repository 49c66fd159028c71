//! Rounding direction for integer division.

/// Direction in which an inexact integer quotient is resolved.
///
/// Pool math always rounds against the trader: outputs and minted shares
/// round [`Down`](Self::Down), required inputs round [`Up`](Self::Up).
///
/// ```
/// use zap_amm::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert!(!Rounding::Up.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling.
    Up,
    /// Floor.
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
