//! Shared setup for the zap unit tests.

#![allow(clippy::panic)]

use crate::config::{PoolConfig, VaultConfig, ZapConfig};
use crate::domain::{Address, Amount, FeeRate, TokenPair};
use crate::ledger::MemoryLedger;
use crate::pools::ConstantProductPool;
use crate::staking::StakingVault;
use crate::traits::{DepositParams, FromConfig, Ledger, PoolClient};

pub(crate) const E18: u128 = 1_000_000_000_000_000_000;

pub(crate) const TOKEN_1: Address = Address::from_low_u64(1);
pub(crate) const TOKEN_2: Address = Address::from_low_u64(2);
pub(crate) const WRAPPER: Address = Address::from_low_u64(5);
pub(crate) const POOL: Address = Address::from_low_u64(10);
pub(crate) const SHARE: Address = Address::from_low_u64(11);
pub(crate) const VAULT: Address = Address::from_low_u64(30);
pub(crate) const LP: Address = Address::from_low_u64(20);
pub(crate) const ZAP: Address = Address::from_low_u64(40);
pub(crate) const USER: Address = Address::from_low_u64(41);

pub(crate) fn zap_config() -> ZapConfig {
    let Ok(cfg) = ZapConfig::new(ZAP, WRAPPER) else {
        panic!("valid zap config");
    };
    cfg
}

pub(crate) fn empty_pool(address: Address, a: Address, b: Address, share: Address) -> ConstantProductPool {
    let Ok(pair) = TokenPair::new(a, b) else {
        panic!("valid pair");
    };
    let Ok(cfg) = PoolConfig::new(address, pair, FeeRate::UNISWAP_V2, share) else {
        panic!("valid pool config");
    };
    let Ok(pool) = ConstantProductPool::from_config(&cfg) else {
        panic!("valid pool");
    };
    pool
}

/// Seeds `pool` from the LP account with `a` of its first token and `b`
/// of its second.
pub(crate) fn seed(pool: &mut ConstantProductPool, ledger: &mut MemoryLedger, a: u128, b: u128) {
    let view = pool.view();
    for (token, amount) in [(view.token_a(), a), (view.token_b(), b)] {
        let Ok(()) = ledger.mint(token, LP, Amount::new(amount)) else {
            panic!("mint seed");
        };
        ledger.approve(token, LP, pool.address(), Amount::new(amount));
    }
    let params = DepositParams {
        sender: LP,
        amount_a: Amount::new(a),
        amount_b: Amount::new(b),
        recipient: LP,
        deadline: u64::MAX,
    };
    let Ok(_) = pool.add_liquidity(ledger, params) else {
        panic!("seed deposit");
    };
}

/// TOKEN_1/TOKEN_2 pool seeded with `a`/`b`.
pub(crate) fn seeded_pool(a: u128, b: u128) -> (ConstantProductPool, MemoryLedger) {
    let mut pool = empty_pool(POOL, TOKEN_1, TOKEN_2, SHARE);
    let mut ledger = MemoryLedger::new(1_000);
    seed(&mut pool, &mut ledger, a, b);
    (pool, ledger)
}

pub(crate) fn vault_for(address: Address, staking_token: Address) -> StakingVault {
    let Ok(cfg) = VaultConfig::new(address, staking_token) else {
        panic!("valid vault config");
    };
    let Ok(vault) = StakingVault::from_config(&cfg) else {
        panic!("valid vault");
    };
    vault
}
