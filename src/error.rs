//! Unified error types for the zap library.
//!
//! Every fallible operation in the crate returns [`ZapError`].  A zap call
//! that fails surfaces exactly one variant to the caller and leaves no
//! partial effect behind (see [`crate::zap::UnitOfWork`]).
//!
//! Variants carry either nothing, structured values, or a `&'static str`
//! naming the violated constraint.  No variant allocates, which keeps the
//! enum `Copy` and usable from `const fn` constructors.

use thiserror::Error;

use crate::domain::{Address, Amount};

/// Errors produced by the solver, the orchestrator, and the reference
/// collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZapError {
    // -- Zap taxonomy -------------------------------------------------------
    /// The requested input token is neither of the pool's two tokens.
    #[error("input token is not part of the liquidity pair")]
    InputTokenNotInPair,

    /// The realised swap output fell below the caller's floor.
    #[error("insufficient output amount: got {actual}, required at least {minimum}")]
    InsufficientOutputAmount {
        /// Output the pool would pay.
        actual: Amount,
        /// The caller's `min_swap_out`.
        minimum: Amount,
    },

    /// Pool reserves are at or below the minimum usable threshold.
    #[error("liquidity pair reserves too low")]
    LiquidityTooLow,

    /// The stake target accepts a different token than the pool's share token.
    #[error("staking contract is for the wrong token")]
    StakingContractWrongToken,

    /// The stake target is not a known staking vault.
    #[error("stake target is not a valid staking contract")]
    StakingContractInvalid,

    // -- Request validation -------------------------------------------------
    /// A zap was requested with a zero input amount.
    #[error("input amount must be non-zero")]
    ZeroInputAmount,

    /// No pool is registered under the requested address.
    #[error("no pool registered at {0}")]
    PoolNotFound(Address),

    /// The call's deadline has already passed.
    #[error("deadline {deadline} expired at timestamp {now}")]
    Expired {
        /// Deadline supplied with the call.
        deadline: u64,
        /// Ledger timestamp when the call executed.
        now: u64,
    },

    // -- Ledger -------------------------------------------------------------
    /// An account tried to move more than it holds.
    #[error("insufficient balance: have {available}, need {required}")]
    InsufficientBalance {
        /// Current balance.
        available: Amount,
        /// Amount requested.
        required: Amount,
    },

    /// A spender tried to move more than it was approved for.
    #[error("insufficient allowance: have {available}, need {required}")]
    InsufficientAllowance {
        /// Current allowance.
        available: Amount,
        /// Amount requested.
        required: Amount,
    },

    // -- Pool ---------------------------------------------------------------
    /// A swap was requested with zero input.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// The pool cannot satisfy the request with its current reserves.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A deposit was too small to mint any share tokens.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// One or both reserves are zero.
    #[error("zero reserve")]
    ZeroReserve,

    // -- Post-condition -----------------------------------------------------
    /// The zap account still held a balance after the call completed.
    #[error("zap retained {amount} of token {token}")]
    ResidualBalance {
        /// Token (or [`Address::zero`] for native currency) left behind.
        token: Address,
        /// Amount left behind.
        amount: Amount,
    },

    // -- Configuration and domain validation --------------------------------
    /// A configuration value is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A fee rate is out of range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A token identity is invalid for the requested operation.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// A quantity is invalid for the requested operation.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    // -- Arithmetic ---------------------------------------------------------
    /// An arithmetic result exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// An arithmetic result went below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, ZapError>;
