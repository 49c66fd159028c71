//! Deposits both legs of a zap and sweeps what the pool did not take.

use tracing::debug;

use crate::domain::{Address, Amount};
use crate::error::ZapError;
use crate::traits::{DepositParams, Ledger, PoolClient};

/// Result of [`LiquidityDepositor::deposit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositOutcome {
    /// Share tokens credited to the zap account.
    pub minted: Amount,
    /// First-token dust returned to the beneficiary.
    pub refunded_a: Amount,
    /// Second-token dust returned to the beneficiary.
    pub refunded_b: Amount,
}

/// Where the dust of a deposit goes and how long the deposit stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositTerms {
    /// Receives the unmatched part of both legs.
    pub beneficiary: Address,
    /// Return native-wrapper dust as native currency.
    pub unwrap_native: bool,
    /// Unix-seconds deadline forwarded to the pool.
    pub deadline: u64,
}

/// Adds liquidity from the zap account and refunds the unmatched part.
///
/// When the zap started from native currency, dust in the native wrapper
/// token is unwrapped before it goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidityDepositor {
    zap: Address,
    native_wrapper: Address,
}

impl LiquidityDepositor {
    /// Creates a depositor acting for `zap`.
    pub const fn new(zap: Address, native_wrapper: Address) -> Self {
        Self {
            zap,
            native_wrapper,
        }
    }

    /// Deposits `amount_a` and `amount_b` (canonical pair order) into
    /// `pool`, minting shares to the zap account, then returns leftovers
    /// to `terms.beneficiary`.
    ///
    /// # Errors
    ///
    /// Anything the pool or ledger reports, including
    /// [`ZapError::InsufficientLiquidityMinted`].
    pub fn deposit<P, L>(
        &self,
        pool: &mut P,
        ledger: &mut L,
        amount_a: Amount,
        amount_b: Amount,
        terms: DepositTerms,
    ) -> Result<DepositOutcome, ZapError>
    where
        P: PoolClient,
        L: Ledger,
    {
        let view = pool.view();
        let spender = pool.address();
        let (token_a, token_b) = (view.token_a(), view.token_b());

        ledger.approve(token_a, self.zap, spender, amount_a);
        ledger.approve(token_b, self.zap, spender, amount_b);
        let params = DepositParams {
            sender: self.zap,
            amount_a,
            amount_b,
            recipient: self.zap,
            deadline: terms.deadline,
        };
        let receipt = pool.add_liquidity(ledger, params)?;
        ledger.approve(token_a, self.zap, spender, Amount::ZERO);
        ledger.approve(token_b, self.zap, spender, Amount::ZERO);

        let (refunded_a, refunded_b) = receipt.leftovers(&params);
        self.sweep(ledger, token_a, refunded_a, &terms)?;
        self.sweep(ledger, token_b, refunded_b, &terms)?;

        debug!(
            pool = %spender,
            minted = %receipt.minted,
            refunded_a = %refunded_a,
            refunded_b = %refunded_b,
            "liquidity deposited"
        );
        Ok(DepositOutcome {
            minted: receipt.minted,
            refunded_a,
            refunded_b,
        })
    }

    fn sweep<L: Ledger>(
        &self,
        ledger: &mut L,
        token: Address,
        amount: Amount,
        terms: &DepositTerms,
    ) -> Result<(), ZapError> {
        if amount.is_zero() {
            return Ok(());
        }
        if terms.unwrap_native && token == self.native_wrapper {
            ledger.unwrap_native(token, self.zap, amount)?;
            ledger.transfer_native(self.zap, terms.beneficiary, amount)
        } else {
            ledger.transfer(token, self.zap, terms.beneficiary, amount)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::ledger::MemoryLedger;
    use crate::pools::ConstantProductPool;
    use crate::zap::fixtures::{
        empty_pool, seed, seeded_pool, E18, POOL, SHARE, TOKEN_1, TOKEN_2, USER, WRAPPER, ZAP,
    };

    fn terms(unwrap_native: bool, deadline: u64) -> DepositTerms {
        DepositTerms {
            beneficiary: USER,
            unwrap_native,
            deadline,
        }
    }

    fn fund(ledger: &mut MemoryLedger, token: Address, amount: u128) {
        let Ok(()) = ledger.mint(token, ZAP, Amount::new(amount)) else {
            panic!("mint");
        };
    }

    #[test]
    fn mints_to_zap_and_refunds_dust() {
        let (mut pool, mut ledger) = seeded_pool(E18, 2 * E18);
        fund(&mut ledger, TOKEN_1, 1_000);
        fund(&mut ledger, TOKEN_2, 2_500);
        let Ok(outcome) = LiquidityDepositor::new(ZAP, WRAPPER).deposit(
            &mut pool,
            &mut ledger,
            Amount::new(1_000),
            Amount::new(2_500),
            terms(false, u64::MAX),
        ) else {
            panic!("deposit");
        };
        assert_eq!(outcome.refunded_a, Amount::ZERO);
        assert_eq!(outcome.refunded_b, Amount::new(500));
        assert_eq!(ledger.balance_of(&SHARE, &ZAP), outcome.minted);
        assert_eq!(ledger.balance_of(&TOKEN_2, &USER), Amount::new(500));
        assert_eq!(ledger.balance_of(&TOKEN_1, &ZAP), Amount::ZERO);
        assert_eq!(ledger.balance_of(&TOKEN_2, &ZAP), Amount::ZERO);
        assert_eq!(ledger.allowance(&TOKEN_1, &ZAP, &POOL), Amount::ZERO);
        assert_eq!(ledger.allowance(&TOKEN_2, &ZAP, &POOL), Amount::ZERO);
    }

    #[test]
    fn wrapped_dust_goes_back_as_native() {
        let native_pool_addr = Address::from_low_u64(12);
        let native_share = Address::from_low_u64(13);
        let mut pool: ConstantProductPool =
            empty_pool(native_pool_addr, WRAPPER, TOKEN_1, native_share);
        let mut ledger = MemoryLedger::new(0);
        seed(&mut pool, &mut ledger, 3 * E18, E18);

        let Ok(()) = ledger.fund_native(ZAP, Amount::new(4_000)) else {
            panic!("fund native");
        };
        let Ok(()) = ledger.wrap_native(WRAPPER, ZAP, Amount::new(4_000)) else {
            panic!("wrap");
        };
        fund(&mut ledger, TOKEN_1, 3_000);

        // 3000 of TOKEN_1 matches exactly 1000 of the wrapper at 3:1.
        let Ok(outcome) = LiquidityDepositor::new(ZAP, WRAPPER).deposit(
            &mut pool,
            &mut ledger,
            Amount::new(3_000),
            Amount::new(4_000),
            terms(true, u64::MAX),
        ) else {
            panic!("deposit");
        };
        assert_eq!(outcome.refunded_a, Amount::ZERO);
        assert_eq!(outcome.refunded_b, Amount::new(3_000));
        assert_eq!(ledger.native_balance(&USER), Amount::new(3_000));
        assert_eq!(ledger.balance_of(&WRAPPER, &USER), Amount::ZERO);
        assert_eq!(ledger.native_balance(&ZAP), Amount::ZERO);
        assert_eq!(ledger.balance_of(&WRAPPER, &ZAP), Amount::ZERO);
    }

    #[test]
    fn expired_deposit_rejected() {
        let (mut pool, mut ledger) = seeded_pool(E18, E18);
        fund(&mut ledger, TOKEN_1, 10);
        fund(&mut ledger, TOKEN_2, 10);
        let result = LiquidityDepositor::new(ZAP, WRAPPER).deposit(
            &mut pool,
            &mut ledger,
            Amount::new(10),
            Amount::new(10),
            terms(false, 0),
        );
        assert!(matches!(result, Err(ZapError::Expired { .. })));
    }
}
