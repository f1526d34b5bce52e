mod common;

use soroban_sdk::{Env, U256};

#[test]
fn test_to_price_parity() {
    let env = Env::default();
    let client = common::setup_connector(&env);

    let quote = client.to_price(&common::u256(&env, common::SQRT_PRICE_1_1));
    assert_eq!(quote.price, common::u256(&env, 1));
    assert_eq!(quote.inverted_price, common::u256(&env, 1));
}

#[test]
fn test_to_price_btc_pool() {
    let env = Env::default();
    let client = common::setup_connector(&env);

    // current BTC price :)
    let quote = client.to_price(&common::u256(&env, common::BTC_SQRT_PRICE_X96));
    assert_eq!(quote.price, common::u256(&env, 0));
    assert_eq!(quote.inverted_price, common::u256(&env, 65_000));
}

#[test]
#[should_panic(expected = "Error(Contract, #11)")]
fn test_to_price_zero() {
    let env = Env::default();
    let client = common::setup_connector(&env);

    client.to_price(&common::u256(&env, 0));
}

#[test]
#[should_panic(expected = "Error(Contract, #21)")]
fn test_to_price_overflow() {
    let env = Env::default();
    let client = common::setup_connector(&env);

    // 2^224
    let sqrt_price = U256::from_parts(&env, 1 << 32, 0, 0, 0);
    client.to_price(&sqrt_price);
}

#[test]
fn test_sqrt() {
    let env = Env::default();
    let client = common::setup_connector(&env);

    assert_eq!(client.sqrt(&common::u256(&env, 0)), common::u256(&env, 0));
    assert_eq!(client.sqrt(&common::u256(&env, 1)), common::u256(&env, 1));
    assert_eq!(client.sqrt(&common::u256(&env, 48)), common::u256(&env, 6));
    assert_eq!(client.sqrt(&common::u256(&env, 49)), common::u256(&env, 7));
    assert_eq!(
        client.sqrt(&common::u256(&env, u128::MAX)),
        common::u256(&env, u64::MAX as u128)
    );
}

#[test]
fn test_sqrt_full_width() {
    let env = Env::default();
    let client = common::setup_connector(&env);

    let max = U256::from_parts(&env, u64::MAX, u64::MAX, u64::MAX, u64::MAX);
    assert_eq!(client.sqrt(&max), common::u256(&env, u128::MAX));
}
