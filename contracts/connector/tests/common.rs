#![allow(dead_code)]

use lpconnector::{LiquidityConnector, LiquidityConnectorClient, Slot0, SplitPolicyKind};
use soroban_sdk::{
    contract, contractimpl, symbol_short, testutils::Address as _, Address, Env, Symbol, U256,
};

// Test constants
pub const DEFAULT_WIDTH_BPS: u32 = 5000;
pub const DEFAULT_MIN_LEG_SHARE_BPS: u32 = 1000;
pub const ONE: u128 = 1_000_000_000_000_000_000; // 1e18

/// sqrt(1.0) in Q64.96
pub const SQRT_PRICE_1_1: u128 = 1u128 << 96;

/// 65000 USDT per BTC, USDT as token0
pub const BTC_SQRT_PRICE_X96: u128 = 310_758_420_527_949_423_906_897_513;
pub const BTC_TICK: i32 = -110_827;

pub fn u256(env: &Env, value: u128) -> U256 {
    U256::from_u128(env, value)
}

/// Register an uninitialized connector
pub fn setup_connector(env: &Env) -> LiquidityConnectorClient<'_> {
    let connector_id = env.register(LiquidityConnector, ());
    LiquidityConnectorClient::new(env, &connector_id)
}

/// Register and initialize a connector with the given policy
pub fn setup_initialized_connector(
    env: &Env,
    split_policy: SplitPolicyKind,
) -> (LiquidityConnectorClient<'_>, Address) {
    let admin = Address::generate(env);
    let client = setup_connector(env);
    client.initialize(&admin, &split_policy, &DEFAULT_MIN_LEG_SHARE_BPS);
    (client, admin)
}

// ============================================================
// MOCK POOL
// ============================================================

const SLOT0: Symbol = symbol_short!("SLOT0");
const READS: Symbol = symbol_short!("READS");

/// Pool stand-in exposing only `slot0`
#[contract]
pub struct MockPool;

#[contractimpl]
impl MockPool {
    pub fn set_slot0(env: Env, sqrt_price_x96: U256, tick: i32) {
        env.storage().instance().set(&SLOT0, &Slot0 { sqrt_price_x96, tick });
    }

    pub fn slot0(env: Env) -> Slot0 {
        let reads: u32 = env.storage().instance().get(&READS).unwrap_or(0);
        env.storage().instance().set(&READS, &(reads + 1));
        env.storage().instance().get(&SLOT0).unwrap()
    }

    pub fn reads(env: Env) -> u32 {
        env.storage().instance().get(&READS).unwrap_or(0)
    }
}

/// Register a mock pool at the given price
pub fn setup_pool(env: &Env, sqrt_price_x96: u128, tick: i32) -> (MockPoolClient<'_>, Address) {
    let pool_id = env.register(MockPool, ());
    let client = MockPoolClient::new(env, &pool_id);
    client.set_slot0(&u256(env, sqrt_price_x96), &tick);
    (client, pool_id)
}
