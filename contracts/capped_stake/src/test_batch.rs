#![cfg(test)]

use crate::test_helpers::*;
use crate::{OpOutcome, StakeError, StakeOp};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env};

#[test]
fn test_batch_opens_multiple_records() {
    let e = Env::default();
    let pool = setup(&e);

    let outcomes = pool.client.batch(
        &pool.user1,
        &vec![&e, StakeOp::Open(100), StakeOp::Open(200), StakeOp::Open(300)],
    );

    assert_eq!(
        outcomes,
        vec![&e, OpOutcome::Opened(0), OpOutcome::Opened(1), OpOutcome::Opened(2)]
    );
    assert_eq!(pool.client.capacity_used(), 600);
    assert_eq!(pool.staked(&e).balance(&pool.user1), DEFAULT_MINT - 600);
}

#[test]
fn test_batch_closes_matured_records() {
    let e = Env::default();
    let pool = setup(&e);
    for _ in 0..3 {
        pool.client.open(&pool.user1, &STAKE);
    }
    advance_past_lock(&e);

    let outcomes = pool.client.batch(
        &pool.user1,
        &vec![
            &e,
            StakeOp::Close(pool.user1.clone(), 0),
            StakeOp::Close(pool.user1.clone(), 1),
            StakeOp::Close(pool.user1.clone(), 2),
        ],
    );

    assert_eq!(outcomes.len(), 3);
    for (i, outcome) in outcomes.iter().enumerate() {
        match outcome {
            OpOutcome::Closed(receipt) => {
                assert_eq!(receipt.index, i as u32);
                assert!(receipt.matured);
                assert_eq!(receipt.reward, 2);
            }
            _ => panic!("expected a close receipt"),
        }
    }
    assert_eq!(pool.staked(&e).balance(&pool.user1), DEFAULT_MINT);
    assert_eq!(pool.reward(&e).balance(&pool.user1), 6);
    assert_eq!(pool.client.capacity_used(), STAKE * 3);
    assert_eq!(pool.client.open_stake_count(), 0);
}

#[test]
fn test_empty_batch_is_rejected() {
    let e = Env::default();
    let pool = setup(&e);

    assert_eq!(
        pool.client.try_batch(&pool.user1, &vec![&e]),
        Err(Ok(StakeError::EmptyBatch))
    );
}

// ═══════════════════════════════════════════════════════════════════
// Atomicity
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_failing_op_rolls_back_whole_batch() {
    let e = Env::default();
    let pool = setup(&e);

    assert_eq!(
        pool.client.try_batch(
            &pool.user1,
            &vec![&e, StakeOp::Open(STAKE), StakeOp::Open(CAPACITY)],
        ),
        Err(Ok(StakeError::CapacityExceeded))
    );

    assert_eq!(pool.client.capacity_used(), 0);
    assert_eq!(pool.client.stake_count(&pool.user1), 0);
    assert_eq!(pool.client.open_stake_count(), 0);
    assert_eq!(pool.staked(&e).balance(&pool.user1), DEFAULT_MINT);
    assert_eq!(pool.staked(&e).balance(&pool.contract_id), 0);
}

#[test]
fn test_failing_close_rolls_back_earlier_closes() {
    let e = Env::default();
    let pool = setup(&e);
    pool.client.open(&pool.user1, &STAKE);
    pool.client.open(&pool.user1, &STAKE);
    advance_past_lock(&e);

    assert_eq!(
        pool.client.try_batch(
            &pool.user1,
            &vec![
                &e,
                StakeOp::Close(pool.user1.clone(), 0),
                StakeOp::Close(pool.user1.clone(), 1),
                StakeOp::Close(pool.user1.clone(), 0),
            ],
        ),
        Err(Ok(StakeError::AlreadyClosed))
    );

    assert!(!pool.client.get_stake(&pool.user1, &0).closed);
    assert!(!pool.client.get_stake(&pool.user1, &1).closed);
    assert_eq!(pool.reward(&e).balance(&pool.user1), 0);
    assert_eq!(pool.client.reward_balance(), REWARD_POOL);
}

// ═══════════════════════════════════════════════════════════════════
// Authorization inside a batch
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_batch_grants_no_admin_privilege() {
    let e = Env::default();
    let pool = setup(&e);

    assert_eq!(
        pool.client.try_batch(
            &pool.user1,
            &vec![&e, StakeOp::Open(STAKE), StakeOp::SetFeeBps(0)],
        ),
        Err(Ok(StakeError::Unauthorized))
    );
    assert_eq!(pool.client.stake_count(&pool.user1), 0);
    assert_eq!(pool.client.get_config().fee_bps, FEE_BPS);
}

#[test]
fn test_batch_cannot_close_other_party_records() {
    let e = Env::default();
    let pool = setup(&e);
    pool.client.open(&pool.user1, &STAKE);

    assert_eq!(
        pool.client.try_batch(
            &pool.user2,
            &vec![&e, StakeOp::Close(pool.user1.clone(), 0)],
        ),
        Err(Ok(StakeError::Unauthorized))
    );
}

#[test]
fn test_admin_batch_reconfigures_while_paused() {
    let e = Env::default();
    let pool = setup(&e);
    let new_treasury = Address::generate(&e);

    let outcomes = pool.client.batch(
        &pool.admin,
        &vec![
            &e,
            StakeOp::SetPaused(true),
            StakeOp::SetFeeBps(500),
            StakeOp::SetLockTerm(ONE_DAY * 7),
            StakeOp::SetTreasury(new_treasury.clone()),
            StakeOp::SetCapacityLimit(2_000),
            StakeOp::SetRewardPoolTotal(40),
            StakeOp::FundRewardPool(30),
            StakeOp::SetPaused(false),
        ],
    );

    assert_eq!(outcomes.len(), 8);
    assert!(outcomes.iter().all(|o| o == OpOutcome::Done));

    let config = pool.client.get_config();
    assert_eq!(config.fee_bps, 500);
    assert_eq!(config.lock_term, ONE_DAY * 7);
    assert_eq!(config.treasury, new_treasury);
    assert_eq!(config.capacity_limit, 2_000);
    assert_eq!(config.reward_pool_total, 40);
    assert_eq!(pool.client.reward_balance(), REWARD_POOL + 30);
    assert!(!pool.client.is_paused());
}

#[test]
fn test_batch_admin_handover_applies_to_later_ops() {
    let e = Env::default();
    let pool = setup(&e);
    let new_admin = Address::generate(&e);

    assert_eq!(
        pool.client.try_batch(
            &pool.admin,
            &vec![
                &e,
                StakeOp::TransferAdministrator(new_admin.clone()),
                StakeOp::SetFeeBps(0),
            ],
        ),
        Err(Ok(StakeError::Unauthorized))
    );
    assert_eq!(pool.client.admin(), pool.admin);

    pool.client.batch(
        &pool.admin,
        &vec![
            &e,
            StakeOp::SetFeeBps(0),
            StakeOp::TransferAdministrator(new_admin.clone()),
        ],
    );
    assert_eq!(pool.client.admin(), new_admin);
    assert_eq!(pool.client.get_config().fee_bps, 0);
}

#[test]
fn test_batch_open_fails_once_paused_mid_batch() {
    let e = Env::default();
    let pool = setup(&e);

    // The admin may stake too; pausing mid-batch blocks the following open.
    assert_eq!(
        pool.client.try_batch(
            &pool.admin,
            &vec![&e, StakeOp::SetPaused(true), StakeOp::Open(1)],
        ),
        Err(Ok(StakeError::Paused))
    );
    assert!(!pool.client.is_paused());
}
