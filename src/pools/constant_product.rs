//! Constant-product pair (Uniswap V2 semantics).
//!
//! The swap invariant is `x × y = k`.  The fee is taken from the input
//! before pricing, and the whole input, fee included, is added to the
//! input reserve, so `k` never decreases.
//!
//! # Swap (exact in)
//!
//! 1. `out = in·g·Rout / (Rin·D + in·g)`, floored, with `g = D − fee_num`
//! 2. pull `in` from the sender, pay `out` to the recipient
//! 3. `Rin += in`, `Rout −= out`
//!
//! # Deposit
//!
//! - First deposit (no shares outstanding): mint `√(a·b) − 1000` and lock
//!   [`MINIMUM_LIQUIDITY`] to the null address.
//! - Later deposits take the largest `(a, b)` within the desired amounts
//!   that matches `Ra : Rb`, then mint `min(a·T/Ra, b·T/Rb)`.

use crate::config::PoolConfig;
use crate::domain::{Address, Amount, FeeRate, PoolView, Rounding, TokenPair};
use crate::error::ZapError;
use crate::math::{amount_out, mul_div, quote, sqrt_mul, CheckedArithmetic};
use crate::traits::{
    transact, Checkpoint, DepositParams, DepositReceipt, FromConfig, Ledger, PoolClient,
    SwapParams,
};

/// Shares permanently locked by the first deposit.
pub const MINIMUM_LIQUIDITY: Amount = Amount::new(1_000);

/// Reserves captured by [`Checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSnapshot {
    reserve_a: Amount,
    reserve_b: Amount,
}

/// A Uniswap V2 style pair whose tokens and shares live on a [`Ledger`].
///
/// The pool's reserves are also its ledger balances under
/// [`address`](PoolClient::address); share tokens are minted on the
/// ledger under the configured share-token address.
///
/// # Example
///
/// ```rust
/// use zap_amm::config::PoolConfig;
/// use zap_amm::domain::{Address, Amount, FeeRate, TokenPair};
/// use zap_amm::ledger::MemoryLedger;
/// use zap_amm::pools::ConstantProductPool;
/// use zap_amm::traits::{DepositParams, FromConfig, Ledger, PoolClient};
///
/// let (a, b) = (Address::from_low_u64(1), Address::from_low_u64(2));
/// let pool_addr = Address::from_low_u64(10);
/// let lp = Address::from_low_u64(20);
/// let pair = TokenPair::new(a, b).expect("distinct");
/// let cfg = PoolConfig::new(pool_addr, pair, FeeRate::UNISWAP_V2, Address::from_low_u64(11))
///     .expect("valid config");
/// let mut pool = ConstantProductPool::from_config(&cfg).expect("pool");
///
/// let mut ledger = MemoryLedger::new(0);
/// ledger.mint(a, lp, Amount::new(1_000_000)).expect("mint");
/// ledger.mint(b, lp, Amount::new(4_000_000)).expect("mint");
/// ledger.approve(a, lp, pool_addr, Amount::new(1_000_000));
/// ledger.approve(b, lp, pool_addr, Amount::new(4_000_000));
///
/// let receipt = pool
///     .add_liquidity(&mut ledger, DepositParams {
///         sender: lp,
///         amount_a: Amount::new(1_000_000),
///         amount_b: Amount::new(4_000_000),
///         recipient: lp,
///         deadline: 0,
///     })
///     .expect("deposit");
/// assert_eq!(receipt.minted, Amount::new(1_999_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    address: Address,
    token_pair: TokenPair,
    fee: FeeRate,
    share_token: Address,
    reserve_a: Amount,
    reserve_b: Amount,
}

impl ConstantProductPool {
    /// Returns the current reserve of the first token.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the current reserve of the second token.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    fn ensure_live(ledger: &impl Ledger, deadline: u64) -> Result<(), ZapError> {
        let now = ledger.timestamp();
        if now > deadline {
            return Err(ZapError::Expired { deadline, now });
        }
        Ok(())
    }

    /// Largest `(a, b)` within the desired amounts matching `Ra : Rb`.
    fn matched_amounts(
        &self,
        desired_a: Amount,
        desired_b: Amount,
    ) -> Result<(Amount, Amount), ZapError> {
        if self.reserve_a.is_zero() && self.reserve_b.is_zero() {
            return Ok((desired_a, desired_b));
        }
        let optimal_b = quote(desired_a, self.reserve_a, self.reserve_b)?;
        if optimal_b <= desired_b {
            return Ok((desired_a, optimal_b));
        }
        let optimal_a = quote(desired_b, self.reserve_b, self.reserve_a)?;
        if optimal_a > desired_a {
            return Err(ZapError::InsufficientLiquidity);
        }
        Ok((optimal_a, desired_b))
    }

    /// Shares minted for `(a, b)` given the current share supply.
    ///
    /// Returns `(to_recipient, locked)`.
    fn shares_for(
        &self,
        amount_a: Amount,
        amount_b: Amount,
        total_supply: Amount,
    ) -> Result<(Amount, Amount), ZapError> {
        if total_supply.is_zero() {
            let root = Amount::new(sqrt_mul(amount_a.get(), amount_b.get())?);
            let minted = root
                .checked_sub(&MINIMUM_LIQUIDITY)
                .filter(|m| !m.is_zero())
                .ok_or(ZapError::InsufficientLiquidityMinted)?;
            return Ok((minted, MINIMUM_LIQUIDITY));
        }
        let t = total_supply.get();
        let by_a = mul_div(amount_a.get(), t, self.reserve_a.get(), Rounding::Down)?;
        let by_b = mul_div(amount_b.get(), t, self.reserve_b.get(), Rounding::Down)?;
        let minted = Amount::new(by_a.min(by_b));
        if minted.is_zero() {
            return Err(ZapError::InsufficientLiquidityMinted);
        }
        Ok((minted, Amount::ZERO))
    }
}

impl Checkpoint for ConstantProductPool {
    type Snapshot = PoolSnapshot;

    fn checkpoint(&self) -> PoolSnapshot {
        PoolSnapshot {
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
        }
    }

    fn restore(&mut self, snapshot: PoolSnapshot) {
        self.reserve_a = snapshot.reserve_a;
        self.reserve_b = snapshot.reserve_b;
    }
}

impl FromConfig<PoolConfig> for ConstantProductPool {
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, ZapError> {
        config.validate()?;
        Ok(Self {
            address: config.address(),
            token_pair: config.token_pair(),
            fee: config.fee(),
            share_token: config.share_token(),
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
        })
    }
}

impl PoolClient for ConstantProductPool {
    fn address(&self) -> Address {
        self.address
    }

    fn view(&self) -> PoolView {
        PoolView::new(
            self.address,
            self.token_pair,
            self.reserve_a,
            self.reserve_b,
            self.fee,
            self.share_token,
        )
    }

    /// Sells exactly `amount_in`; the recipient receives the floored
    /// constant-product output.
    ///
    /// # Errors
    ///
    /// - [`ZapError::Expired`] past the deadline.
    /// - [`ZapError::InputTokenNotInPair`] for a foreign token.
    /// - [`ZapError::InsufficientInputAmount`] for zero input.
    /// - [`ZapError::InsufficientLiquidity`] on an empty pool.
    /// - [`ZapError::InsufficientOutputAmount`] if the output is zero or
    ///   below `min_out`.
    /// - Ledger errors while moving tokens; the pool is left unchanged.
    fn swap<L: Ledger>(&mut self, ledger: &mut L, params: SwapParams) -> Result<Amount, ZapError> {
        Self::ensure_live(&*ledger, params.deadline)?;
        let token_out = self.token_pair.other(&params.token_in)?;
        let is_a_to_b = self.token_pair.is_first(&params.token_in);

        let (reserve_in, reserve_out) = if is_a_to_b {
            (self.reserve_a, self.reserve_b)
        } else {
            (self.reserve_b, self.reserve_a)
        };

        let out = amount_out(params.amount_in, reserve_in, reserve_out, self.fee)?;
        if out.is_zero() || out < params.min_out {
            return Err(ZapError::InsufficientOutputAmount {
                actual: out,
                minimum: params.min_out,
            });
        }

        let new_reserve_in = reserve_in.safe_add(&params.amount_in)?;
        let new_reserve_out = reserve_out.safe_sub(&out)?;

        let pool = self.address;
        transact(ledger, |l| {
            l.transfer_from(params.token_in, pool, params.sender, pool, params.amount_in)?;
            l.transfer(token_out, pool, params.recipient, out)
        })?;

        if is_a_to_b {
            self.reserve_a = new_reserve_in;
            self.reserve_b = new_reserve_out;
        } else {
            self.reserve_b = new_reserve_in;
            self.reserve_a = new_reserve_out;
        }
        Ok(out)
    }

    /// Adds liquidity at the current ratio.
    ///
    /// # Errors
    ///
    /// - [`ZapError::Expired`] past the deadline.
    /// - [`ZapError::InsufficientInputAmount`] if a desired amount is zero
    ///   on a seeded pool.
    /// - [`ZapError::InsufficientLiquidityMinted`] if no shares would mint.
    /// - Ledger errors while moving tokens; the pool is left unchanged.
    fn add_liquidity<L: Ledger>(
        &mut self,
        ledger: &mut L,
        params: DepositParams,
    ) -> Result<DepositReceipt, ZapError> {
        Self::ensure_live(&*ledger, params.deadline)?;
        let (used_a, used_b) = self.matched_amounts(params.amount_a, params.amount_b)?;
        let total_supply = ledger.total_supply(&self.share_token);
        let (minted, locked) = self.shares_for(used_a, used_b, total_supply)?;

        let new_reserve_a = self.reserve_a.safe_add(&used_a)?;
        let new_reserve_b = self.reserve_b.safe_add(&used_b)?;

        let pool = self.address;
        let share = self.share_token;
        let (token_a, token_b) = (self.token_pair.first(), self.token_pair.second());
        transact(ledger, |l| {
            l.transfer_from(token_a, pool, params.sender, pool, used_a)?;
            l.transfer_from(token_b, pool, params.sender, pool, used_b)?;
            if !locked.is_zero() {
                l.mint(share, Address::zero(), locked)?;
            }
            l.mint(share, params.recipient, minted)
        })?;

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        Ok(DepositReceipt {
            used_a,
            used_b,
            minted,
        })
    }
}
