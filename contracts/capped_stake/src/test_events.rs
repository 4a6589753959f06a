#![cfg(test)]

use crate::test_helpers::*;
use crate::{AssetKind, DefundPolicy, StakeConfig, StakeOp};
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, Address, Env, FromVal, Symbol, Val, Vec};

/// Last event published by the pool itself, ignoring token events.
fn last_pool_event(e: &Env, contract_id: &Address) -> (Vec<Val>, Val) {
    let (_, topics, data) = e
        .events()
        .all()
        .into_iter()
        .rev()
        .find(|ev| ev.0 == *contract_id)
        .unwrap();
    (topics, data)
}

fn topic_name(e: &Env, topics: &Vec<Val>) -> Symbol {
    Symbol::from_val(e, &topics.get(0).unwrap())
}

#[test]
fn test_open_emits_stake_opened() {
    let e = Env::default();
    let pool = setup(&e);

    pool.client.open(&pool.user1, &STAKE);

    let (topics, data) = last_pool_event(&e, &pool.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "stake_opened"));
    assert_eq!(Address::from_val(&e, &topics.get(1).unwrap()), pool.user1);
    assert_eq!(<(u32, i128, i128)>::from_val(&e, &data), (0, STAKE, STAKE));
}

#[test]
fn test_early_close_emits_stake_closed() {
    let e = Env::default();
    let pool = setup(&e);
    pool.client.open(&pool.user1, &STAKE);

    pool.client.close(&pool.user1, &pool.user1, &0);

    let (topics, data) = last_pool_event(&e, &pool.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "stake_closed"));
    assert_eq!(Address::from_val(&e, &topics.get(1).unwrap()), pool.user1);
    assert_eq!(
        <(u32, bool, i128, i128, i128)>::from_val(&e, &data),
        (0, false, 225, 25, 0)
    );
}

#[test]
fn test_mature_close_emits_stake_closed() {
    let e = Env::default();
    let pool = setup(&e);
    pool.client.open(&pool.user1, &STAKE);
    advance_past_lock(&e);

    pool.client.close(&pool.user1, &pool.user1, &0);

    let (_, data) = last_pool_event(&e, &pool.contract_id);
    assert_eq!(
        <(u32, bool, i128, i128, i128)>::from_val(&e, &data),
        (0, true, STAKE, 0, 2)
    );
}

#[test]
fn test_config_setter_emits_field_and_value() {
    let e = Env::default();
    let pool = setup(&e);

    pool.client.set_fee_bps(&pool.admin, &300);

    let (topics, data) = last_pool_event(&e, &pool.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "config_updated"));
    assert_eq!(
        Symbol::from_val(&e, &topics.get(1).unwrap()),
        Symbol::new(&e, "fee_bps")
    );
    assert_eq!(u32::from_val(&e, &data), 300);
}

#[test]
fn test_pause_emits_paused_and_unpaused() {
    let e = Env::default();
    let pool = setup(&e);

    pool.client.set_paused(&pool.admin, &true);
    let (topics, data) = last_pool_event(&e, &pool.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "paused"));
    assert_eq!(Address::from_val(&e, &data), pool.admin);

    pool.client.set_paused(&pool.admin, &false);
    let (topics, _) = last_pool_event(&e, &pool.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "unpaused"));
}

#[test]
fn test_pool_funding_events() {
    let e = Env::default();
    let pool = setup(&e);

    pool.client.fund_reward_pool(&pool.admin, &5);
    let (topics, data) = last_pool_event(&e, &pool.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "pool_funded"));
    assert_eq!(<(Address, i128)>::from_val(&e, &data), (pool.admin.clone(), 5));

    pool.client.defund_reward_pool(&pool.admin, &3);
    let (topics, data) = last_pool_event(&e, &pool.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "pool_defunded"));
    assert_eq!(<(Address, i128)>::from_val(&e, &data), (pool.admin.clone(), 3));
}

#[test]
fn test_admin_transfer_event() {
    let e = Env::default();
    let pool = setup(&e);
    let new_admin = Address::generate(&e);

    pool.client.transfer_administrator(&pool.admin, &new_admin);

    let (topics, data) = last_pool_event(&e, &pool.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "admin_transferred"));
    assert_eq!(
        <(Address, Address)>::from_val(&e, &data),
        (pool.admin.clone(), new_admin)
    );
}

#[test]
fn test_batch_emits_summary_last() {
    let e = Env::default();
    let pool = setup(&e);

    pool.client
        .batch(&pool.user1, &vec![&e, StakeOp::Open(10), StakeOp::Open(20)]);

    let (topics, data) = last_pool_event(&e, &pool.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "batch_executed"));
    assert_eq!(Address::from_val(&e, &topics.get(1).unwrap()), pool.user1);
    assert_eq!(u32::from_val(&e, &data), 2);
}

#[test]
fn test_initialize_emits_initialized() {
    let e = Env::default();
    let pool = setup_paused(&e, AssetKind::Native, DefundPolicy::Unrestricted);

    let (topics, data) = last_pool_event(&e, &pool.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "initialized"));
    let (admin, config, policy) = <(Address, StakeConfig, DefundPolicy)>::from_val(&e, &data);
    assert_eq!(admin, pool.admin);
    assert_eq!(config, pool.client.get_config());
    assert_eq!(policy, DefundPolicy::Unrestricted);
}
