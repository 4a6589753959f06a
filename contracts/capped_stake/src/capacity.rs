//! Capacity accounting.
//!
//! The counter equals the amount of every open record plus every record that
//! closed mature. Early closes release their amount; mature closes never do,
//! which caps the total reward ever payable at `reward_pool_total`.
//!
//! The reward escrow is tracked separately from the contract's token balance,
//! so staked principal is never counted as reward even when both sides of the
//! pool use the same token.

use soroban_sdk::{log, Env};

use crate::errors::StakeError;
use crate::types::{DataKey, StakeConfig};

pub fn used(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::CapacityUsed)
        .unwrap_or(0)
}

fn set_used(e: &Env, value: i128) {
    e.storage().instance().set(&DataKey::CapacityUsed, &value);
}

/// Claims `amount` of capacity for a new record. Returns the new counter.
pub(crate) fn reserve(e: &Env, config: &StakeConfig, amount: i128) -> Result<i128, StakeError> {
    let current = used(e);
    let next = current
        .checked_add(amount)
        .ok_or(StakeError::CapacityExceeded)?;
    if next > config.capacity_limit {
        log!(e, "capacity exceeded", current, amount, config.capacity_limit);
        return Err(StakeError::CapacityExceeded);
    }
    set_used(e, next);
    Ok(next)
}

/// Returns the capacity of an early-closed record to the pool.
pub(crate) fn release(e: &Env, amount: i128) -> Result<i128, StakeError> {
    let next = used(e)
        .checked_sub(amount)
        .filter(|n| *n >= 0)
        .ok_or(StakeError::ArithmeticOverflow)?;
    set_used(e, next);
    Ok(next)
}

pub fn open_stakes(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::OpenStakes)
        .unwrap_or(0)
}

pub(crate) fn track_open(e: &Env) -> Result<(), StakeError> {
    let next = open_stakes(e)
        .checked_add(1)
        .ok_or(StakeError::ArithmeticOverflow)?;
    e.storage().instance().set(&DataKey::OpenStakes, &next);
    Ok(())
}

pub(crate) fn track_close(e: &Env) -> Result<(), StakeError> {
    let next = open_stakes(e)
        .checked_sub(1)
        .ok_or(StakeError::ArithmeticOverflow)?;
    e.storage().instance().set(&DataKey::OpenStakes, &next);
    Ok(())
}

pub fn reward_escrow(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::RewardEscrow)
        .unwrap_or(0)
}

pub(crate) fn credit_reward_escrow(e: &Env, amount: i128) -> Result<i128, StakeError> {
    let next = reward_escrow(e)
        .checked_add(amount)
        .ok_or(StakeError::ArithmeticOverflow)?;
    e.storage().instance().set(&DataKey::RewardEscrow, &next);
    Ok(next)
}

/// Takes `amount` out of the reward escrow; fails if less is funded.
pub(crate) fn debit_reward_escrow(e: &Env, amount: i128) -> Result<i128, StakeError> {
    let current = reward_escrow(e);
    if amount > current {
        log!(e, "reward escrow exhausted", current, amount);
        return Err(StakeError::RewardPoolExhausted);
    }
    let next = current - amount;
    e.storage().instance().set(&DataKey::RewardEscrow, &next);
    Ok(next)
}
