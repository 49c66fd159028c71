//! Public zap entry points.
//!
//! [`ZapOrchestrator`] owns the pool and vault registries and runs each
//! zap through its stages:
//!
//! ```text
//! Validate -> Plan -> Swap -> Deposit -> Forward -> Done
//!     \________\_______\________\_________\______-> Aborted
//! ```
//!
//! Validate and Plan only read.  Swap (which also collects the caller's
//! input), Deposit and Forward run inside a [`UnitOfWork`], and Done
//! checks that the zap account kept nothing; a failure anywhere after
//! Plan restores ledger, pool and vault to their state before the call.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use super::{DepositTerms, LiquidityDepositor, OptimalSwapSolver, StakeForwarder, SwapExecutor, UnitOfWork};
use crate::config::ZapConfig;
use crate::domain::{Address, Amount, PoolView, SwapPlan, ZapInput, ZapRequest, ZapResult, ZapState};
use crate::error::ZapError;
use crate::traits::{FromConfig, Ledger, PoolClient, StakingClient};

/// Zap account balances captured before a call, compared again in Done.
#[derive(Debug, Clone, Copy)]
struct Holdings {
    token_a: Amount,
    token_b: Amount,
    share: Amount,
    native: Amount,
}

impl Holdings {
    fn read<L: Ledger>(ledger: &L, zap: &Address, view: &PoolView) -> Self {
        Self {
            token_a: ledger.balance_of(&view.token_a(), zap),
            token_b: ledger.balance_of(&view.token_b(), zap),
            share: ledger.balance_of(&view.share_token(), zap),
            native: ledger.native_balance(zap),
        }
    }

    /// First balance that moved, as `(token, difference)`.  Native
    /// currency is reported under the null address.
    fn first_change(&self, after: &Self, view: &PoolView) -> Option<(Address, Amount)> {
        [
            (view.token_a(), self.token_a, after.token_a),
            (view.token_b(), self.token_b, after.token_b),
            (view.share_token(), self.share, after.share),
            (Address::zero(), self.native, after.native),
        ]
        .into_iter()
        .find(|(_, was, now)| was != now)
        .map(|(token, was, now)| (token, Amount::new(was.get().abs_diff(now.get()))))
    }
}

/// Converts a single asset into pool shares, optionally staked.
///
/// Pools and vaults are registered once and then shared behind
/// `Arc<Mutex<_>>`; a zap holds its pool's lock (and then its vault's) for
/// the whole call, so zaps against one pool never interleave.
///
/// # Examples
///
/// ```
/// use zap_amm::prelude::*;
///
/// let zap = Address::from_low_u64(40);
/// let wrapper = Address::from_low_u64(5);
/// let orchestrator: ZapOrchestrator<ConstantProductPool, StakingVault> =
///     ZapOrchestrator::new(ZapConfig::new(zap, wrapper).expect("config")).expect("orchestrator");
/// assert_eq!(orchestrator.config().zap_address(), zap);
/// ```
#[derive(Debug)]
pub struct ZapOrchestrator<P, S> {
    config: ZapConfig,
    solver: OptimalSwapSolver,
    executor: SwapExecutor,
    depositor: LiquidityDepositor,
    forwarder: StakeForwarder,
    pools: HashMap<Address, Arc<Mutex<P>>>,
    vaults: HashMap<Address, Arc<Mutex<S>>>,
}

impl<P, S> FromConfig<ZapConfig> for ZapOrchestrator<P, S>
where
    P: PoolClient,
    S: StakingClient,
{
    fn from_config(config: &ZapConfig) -> Result<Self, ZapError> {
        config.validate()?;
        let zap = config.zap_address();
        Ok(Self {
            config: *config,
            solver: OptimalSwapSolver::from_config(config),
            executor: SwapExecutor::new(zap),
            depositor: LiquidityDepositor::new(zap, config.native_wrapper()),
            forwarder: StakeForwarder::new(zap),
            pools: HashMap::new(),
            vaults: HashMap::new(),
        })
    }
}

impl<P, S> ZapOrchestrator<P, S>
where
    P: PoolClient,
    S: StakingClient,
{
    /// Creates an orchestrator with empty registries.
    ///
    /// # Errors
    ///
    /// [`ZapError::InvalidConfiguration`] if `config` does not validate.
    pub fn new(config: ZapConfig) -> Result<Self, ZapError> {
        Self::from_config(&config)
    }

    /// Deployment settings.
    pub const fn config(&self) -> &ZapConfig {
        &self.config
    }

    /// Registers `pool` under its own address and returns the shared
    /// handle.
    ///
    /// # Errors
    ///
    /// [`ZapError::InvalidConfiguration`] for a null or already registered
    /// address.
    pub fn register_pool(&mut self, pool: P) -> Result<Arc<Mutex<P>>, ZapError> {
        let address = pool.address();
        if address.is_zero() {
            return Err(ZapError::InvalidConfiguration("pool address must not be null"));
        }
        if self.pools.contains_key(&address) {
            return Err(ZapError::InvalidConfiguration("pool already registered"));
        }
        let handle = Arc::new(Mutex::new(pool));
        self.pools.insert(address, Arc::clone(&handle));
        debug!(pool = %address, "pool registered");
        Ok(handle)
    }

    /// Registers `vault` under its own address and returns the shared
    /// handle.
    ///
    /// # Errors
    ///
    /// [`ZapError::InvalidConfiguration`] for a null or already registered
    /// address.
    pub fn register_vault(&mut self, vault: S) -> Result<Arc<Mutex<S>>, ZapError> {
        let address = vault.address();
        if address.is_zero() {
            return Err(ZapError::InvalidConfiguration("vault address must not be null"));
        }
        if self.vaults.contains_key(&address) {
            return Err(ZapError::InvalidConfiguration("vault already registered"));
        }
        let handle = Arc::new(Mutex::new(vault));
        self.vaults.insert(address, Arc::clone(&handle));
        debug!(vault = %address, "vault registered");
        Ok(handle)
    }

    /// Handle of the pool at `address`.
    ///
    /// # Errors
    ///
    /// [`ZapError::PoolNotFound`] if nothing is registered there.
    pub fn pool(&self, address: &Address) -> Result<Arc<Mutex<P>>, ZapError> {
        self.pools
            .get(address)
            .cloned()
            .ok_or(ZapError::PoolNotFound(*address))
    }

    /// Handle of the vault at `address`.
    ///
    /// # Errors
    ///
    /// [`ZapError::StakingContractInvalid`] if nothing is registered there.
    pub fn vault(&self, address: &Address) -> Result<Arc<Mutex<S>>, ZapError> {
        self.vaults
            .get(address)
            .cloned()
            .ok_or(ZapError::StakingContractInvalid)
    }

    /// Simulates the swap leg of a zap of `amount` of `token_in` into
    /// `pool` without changing anything.
    ///
    /// For a native zap pass the native wrapper as `token_in`.
    ///
    /// # Errors
    ///
    /// [`ZapError::PoolNotFound`] or any [`OptimalSwapSolver::solve`]
    /// error.
    pub fn estimate_swap(
        &self,
        pool: &Address,
        token_in: Address,
        amount: Amount,
    ) -> Result<SwapPlan, ZapError> {
        let handle = self.pool(pool)?;
        let view = handle.lock().view();
        self.solver.solve(&view, token_in, amount)
    }

    /// Zaps an ERC-20-style token held by `request.caller`.
    ///
    /// The caller must have approved the zap account for
    /// `request.input_amount`.
    ///
    /// # Errors
    ///
    /// - [`ZapError::InvalidToken`] if the request asks for native input.
    /// - Any error from the stages; the call then changes nothing.
    pub fn zap_in<L: Ledger>(&self, ledger: &mut L, request: &ZapRequest) -> Result<ZapResult, ZapError> {
        if request.input.is_native() {
            return Err(ZapError::InvalidToken("native input goes through zap_in_native"));
        }
        self.execute(ledger, request)
    }

    /// Zaps native currency held by `request.caller`, wrapping it first.
    /// Dust in the wrapper token comes back as native currency.
    ///
    /// # Errors
    ///
    /// - [`ZapError::InvalidToken`] if the request names a token input.
    /// - Any error from the stages; the call then changes nothing.
    pub fn zap_in_native<L: Ledger>(
        &self,
        ledger: &mut L,
        request: &ZapRequest,
    ) -> Result<ZapResult, ZapError> {
        if !request.input.is_native() {
            return Err(ZapError::InvalidToken("token input goes through zap_in"));
        }
        self.execute(ledger, request)
    }

    fn execute<L: Ledger>(&self, ledger: &mut L, request: &ZapRequest) -> Result<ZapResult, ZapError> {
        let zap = self.config.zap_address();

        // -- Validate
        if request.input_amount.is_zero() {
            return Err(ZapError::ZeroInputAmount);
        }
        let pool_handle = self.pool(&request.pool)?;
        let vault_handle = request
            .effective_stake_target()
            .map(|target| self.vault(&target))
            .transpose()?;

        let mut pool = pool_handle.lock();
        let mut vault = vault_handle.as_ref().map(|handle| handle.lock());

        let view = pool.view();
        let token_in = request.input.pool_token(self.config.native_wrapper());
        if !view.pair().contains(&token_in) {
            return Err(ZapError::InputTokenNotInPair);
        }
        let now = ledger.timestamp();
        let deadline = request.deadline.unwrap_or(now);
        if now > deadline {
            return Err(ZapError::Expired { deadline, now });
        }
        if let Some(vault) = vault.as_deref() {
            StakeForwarder::check_target(vault, view.share_token())?;
        }

        // -- Plan
        let plan = self.solver.solve(&view, token_in, request.input_amount)?;
        let remainder = plan.remainder(request.input_amount);
        let before = Holdings::read(&*ledger, &zap, &view);

        let mut uow = UnitOfWork::new(ledger, &mut *pool, vault.as_deref_mut());

        let swap_out = uow.run(ZapState::Swap, |ledger, pool, _| {
            self.collect(ledger, request)?;
            self.executor
                .execute(pool, ledger, &plan, request.min_swap_out, deadline)
        })?;

        let (amount_a, amount_b) = if view.pair().is_first(&plan.token_in) {
            (remainder, swap_out)
        } else {
            (swap_out, remainder)
        };
        let terms = DepositTerms {
            beneficiary: request.caller,
            unwrap_native: request.input.is_native(),
            deadline,
        };
        let deposit = uow.run(ZapState::Deposit, |ledger, pool, _| {
            self.depositor.deposit(pool, ledger, amount_a, amount_b, terms)
        })?;

        let staked_into = uow.run(ZapState::Forward, |ledger, _, vault| {
            self.forwarder
                .forward(ledger, view.share_token(), deposit.minted, vault, request.caller)
        })?;

        uow.run(ZapState::Done, |ledger, _, _| {
            let after = Holdings::read(&*ledger, &zap, &view);
            match before.first_change(&after, &view) {
                Some((token, amount)) => Err(ZapError::ResidualBalance { token, amount }),
                None => Ok(()),
            }
        })?;
        uow.commit();

        info!(
            pool = %request.pool,
            caller = %request.caller,
            input = %token_in,
            amount = %request.input_amount,
            swapped = %plan.amount_to_swap,
            swap_out = %swap_out,
            shares = %deposit.minted,
            staked = staked_into.is_some(),
            "zap completed"
        );

        Ok(ZapResult {
            share_tokens_minted: deposit.minted,
            residual: Amount::ZERO,
            amount_swapped: plan.amount_to_swap,
            swap_out,
            refunded_a: deposit.refunded_a,
            refunded_b: deposit.refunded_b,
            staked_into,
        })
    }

    /// Moves the caller's input into the zap account.
    fn collect<L: Ledger>(&self, ledger: &mut L, request: &ZapRequest) -> Result<(), ZapError> {
        let zap = self.config.zap_address();
        match request.input {
            ZapInput::Token(token) => {
                ledger.transfer_from(token, zap, request.caller, zap, request.input_amount)
            }
            ZapInput::Native => {
                ledger.transfer_native(request.caller, zap, request.input_amount)?;
                ledger.wrap_native(self.config.native_wrapper(), zap, request.input_amount)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::ledger::MemoryLedger;
    use crate::pools::ConstantProductPool;
    use crate::staking::StakingVault;
    use crate::traits::Checkpoint;
    use crate::zap::fixtures::{
        seeded_pool, vault_for, zap_config, E18, POOL, SHARE, TOKEN_1, TOKEN_2, USER, VAULT, ZAP,
    };

    type Orchestrator = ZapOrchestrator<ConstantProductPool, StakingVault>;

    /// Pulls the shares it is offered, counts the attempt, then refuses.
    #[derive(Debug, Default)]
    struct RefusingVault {
        attempts: u32,
    }

    impl Checkpoint for RefusingVault {
        type Snapshot = u32;

        fn checkpoint(&self) -> u32 {
            self.attempts
        }

        fn restore(&mut self, snapshot: u32) {
            self.attempts = snapshot;
        }
    }

    impl StakingClient for RefusingVault {
        fn address(&self) -> Address {
            VAULT
        }

        fn staking_token(&self) -> Address {
            SHARE
        }

        fn stake<L: Ledger>(
            &mut self,
            ledger: &mut L,
            sender: Address,
            amount: Amount,
            _beneficiary: Address,
        ) -> Result<(), ZapError> {
            ledger.transfer_from(SHARE, VAULT, sender, VAULT, amount)?;
            self.attempts += 1;
            Err(ZapError::InvalidQuantity("vault closed"))
        }

        fn staked(&self, _beneficiary: &Address) -> Amount {
            Amount::ZERO
        }
    }

    fn setup_with<S: StakingClient>(
        vault: S,
    ) -> (ZapOrchestrator<ConstantProductPool, S>, MemoryLedger, Arc<Mutex<S>>) {
        let (pool, mut ledger) = seeded_pool(E18, 2 * E18);
        let Ok(mut orchestrator) = ZapOrchestrator::new(zap_config()) else {
            panic!("orchestrator");
        };
        let Ok(_) = orchestrator.register_pool(pool) else {
            panic!("register pool");
        };
        let Ok(vault) = orchestrator.register_vault(vault) else {
            panic!("register vault");
        };
        let Ok(()) = ledger.mint(TOKEN_1, USER, Amount::new(E18)) else {
            panic!("fund user");
        };
        ledger.approve(TOKEN_1, USER, ZAP, Amount::new(E18));
        (orchestrator, ledger, vault)
    }

    fn setup() -> (Orchestrator, MemoryLedger) {
        let (orchestrator, ledger, _) = setup_with(vault_for(VAULT, SHARE));
        (orchestrator, ledger)
    }

    fn request(amount: u128, min_out: u128) -> ZapRequest {
        ZapRequest::new(
            POOL,
            USER,
            ZapInput::Token(TOKEN_1),
            Amount::new(amount),
            Amount::new(min_out),
        )
    }

    fn assert_zap_empty(ledger: &MemoryLedger) {
        for token in [TOKEN_1, TOKEN_2, SHARE] {
            assert_eq!(ledger.balance_of(&token, &ZAP), Amount::ZERO, "token {token}");
        }
        assert_eq!(ledger.native_balance(&ZAP), Amount::ZERO);
    }

    // -- Registry -------------------------------------------------------------

    #[test]
    fn duplicate_pool_rejected() {
        let (mut orchestrator, _) = setup();
        let (again, _) = seeded_pool(E18, E18);
        assert_eq!(
            orchestrator.register_pool(again).map(|_| ()),
            Err(ZapError::InvalidConfiguration("pool already registered"))
        );
    }

    #[test]
    fn unknown_pool_not_found() {
        let (orchestrator, mut ledger) = setup();
        let mut req = request(E18 / 100, 0);
        req.pool = Address::from_low_u64(99);
        assert_eq!(
            orchestrator.zap_in(&mut ledger, &req),
            Err(ZapError::PoolNotFound(Address::from_low_u64(99)))
        );
    }

    // -- Happy path -----------------------------------------------------------

    #[test]
    fn zap_returns_shares_to_caller() {
        let (orchestrator, mut ledger) = setup();
        let Ok(result) = orchestrator.zap_in(&mut ledger, &request(E18 / 100, 9 * E18 / 1000)) else {
            panic!("zap");
        };
        assert_eq!(result.amount_swapped, Amount::new(4_995_054_722_102_270));
        assert_eq!(result.swap_out, Amount::new(9_910_782_728_510_354));
        assert_eq!(result.share_tokens_minted, Amount::new(7_042_881_910_394_421));
        assert_eq!(result.residual, Amount::ZERO);
        assert!(!result.is_staked());
        assert_eq!(ledger.balance_of(&SHARE, &USER), result.share_tokens_minted);
        assert_zap_empty(&ledger);
    }

    #[test]
    fn estimate_matches_realised_output() {
        let (orchestrator, mut ledger) = setup();
        let Ok(plan) = orchestrator.estimate_swap(&POOL, TOKEN_1, Amount::new(E18 / 100)) else {
            panic!("estimate");
        };
        let Ok(result) = orchestrator.zap_in(&mut ledger, &request(E18 / 100, 0)) else {
            panic!("zap");
        };
        assert_eq!(plan.expected_swap_out, result.swap_out);
        assert_eq!(plan.amount_to_swap, result.amount_swapped);
    }

    // -- Validation -----------------------------------------------------------

    #[test]
    fn zero_amount_rejected() {
        let (orchestrator, mut ledger) = setup();
        assert_eq!(
            orchestrator.zap_in(&mut ledger, &request(0, 0)),
            Err(ZapError::ZeroInputAmount)
        );
    }

    #[test]
    fn expired_deadline_rejected() {
        let (orchestrator, mut ledger) = setup();
        let req = request(E18 / 100, 0).with_deadline(ledger.timestamp() - 1);
        assert!(matches!(
            orchestrator.zap_in(&mut ledger, &req),
            Err(ZapError::Expired { .. })
        ));
    }

    #[test]
    fn unregistered_vault_rejected() {
        let (orchestrator, mut ledger) = setup();
        let req = request(E18 / 100, 0).with_stake_target(Address::from_low_u64(77));
        assert_eq!(
            orchestrator.zap_in(&mut ledger, &req),
            Err(ZapError::StakingContractInvalid)
        );
    }

    #[test]
    fn native_request_through_token_entry_rejected() {
        let (orchestrator, mut ledger) = setup();
        let mut req = request(E18 / 100, 0);
        req.input = ZapInput::Native;
        assert!(matches!(
            orchestrator.zap_in(&mut ledger, &req),
            Err(ZapError::InvalidToken(_))
        ));
        let req = request(E18 / 100, 0);
        assert!(matches!(
            orchestrator.zap_in_native(&mut ledger, &req),
            Err(ZapError::InvalidToken(_))
        ));
    }

    // -- Rollback -------------------------------------------------------------

    #[test]
    fn slippage_failure_changes_nothing() {
        let (orchestrator, mut ledger) = setup();
        let before = ledger.clone();
        let Ok(handle) = orchestrator.pool(&POOL) else {
            panic!("pool");
        };
        let view_before = handle.lock().view();

        let result = orchestrator.zap_in(&mut ledger, &request(E18 / 100, 9_990_000_000_000_000));
        assert!(matches!(
            result,
            Err(ZapError::InsufficientOutputAmount { .. })
        ));
        assert_eq!(ledger, before);
        assert_eq!(handle.lock().view(), view_before);
    }

    #[test]
    fn missing_allowance_changes_nothing() {
        let (orchestrator, mut ledger) = setup();
        ledger.approve(TOKEN_1, USER, ZAP, Amount::ZERO);
        let before = ledger.clone();
        assert!(matches!(
            orchestrator.zap_in(&mut ledger, &request(E18 / 100, 0)),
            Err(ZapError::InsufficientAllowance { .. })
        ));
        assert_eq!(ledger, before);
    }

    #[test]
    fn deposit_failure_unwinds_the_swap() {
        let (orchestrator, mut ledger) = setup();
        let before = ledger.clone();
        let Ok(handle) = orchestrator.pool(&POOL) else {
            panic!("pool");
        };
        let view_before = handle.lock().view();

        // 2 units: 1 is sold for 1 of TOKEN_2, and the (1, 1) deposit mints
        // nothing against a 1:2 pool.
        assert_eq!(
            orchestrator.zap_in(&mut ledger, &request(2, 0)),
            Err(ZapError::InsufficientLiquidityMinted)
        );
        assert_eq!(ledger, before);
        assert_eq!(handle.lock().view(), view_before);
        assert_zap_empty(&ledger);
    }

    #[test]
    fn stake_failure_unwinds_swap_and_deposit() {
        let (orchestrator, mut ledger, vault) = setup_with(RefusingVault::default());
        let before = ledger.clone();
        let Ok(handle) = orchestrator.pool(&POOL) else {
            panic!("pool");
        };
        let view_before = handle.lock().view();

        let req = request(E18 / 100, 0).with_stake_target(VAULT);
        assert_eq!(
            orchestrator.zap_in(&mut ledger, &req),
            Err(ZapError::InvalidQuantity("vault closed"))
        );
        assert_eq!(ledger, before);
        assert_eq!(handle.lock().view(), view_before);
        assert_eq!(vault.lock().attempts, 0);
        assert_eq!(ledger.balance_of(&SHARE, &VAULT), Amount::ZERO);
        assert_zap_empty(&ledger);
    }

    #[test]
    fn preexisting_zap_balance_is_left_alone() {
        let (orchestrator, mut ledger) = setup();
        let Ok(()) = ledger.mint(TOKEN_2, ZAP, Amount::new(5)) else {
            panic!("mint");
        };
        let Ok(_) = orchestrator.zap_in(&mut ledger, &request(E18 / 100, 0)) else {
            panic!("zap");
        };
        assert_eq!(ledger.balance_of(&TOKEN_2, &ZAP), Amount::new(5));
    }

    #[test]
    fn orchestrator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Orchestrator>();
    }
}
