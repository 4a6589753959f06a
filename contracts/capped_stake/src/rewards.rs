//! Reward / fee engine.
//!
//! Pure functions of the configuration and a record. Integer floor division is
//! the only rounding in the pool: remainders below one unit are never paid.

use soroban_sdk::{Env, I256};

use crate::errors::StakeError;
use crate::types::{StakeConfig, StakeInfo, StakeRecord};

pub const BPS_DENOMINATOR: i128 = 10_000;

/// `floor(amount * reward_pool_total / capacity_limit)`.
///
/// The product is formed in 256 bits so large pools cannot overflow before the
/// division brings the result back into range.
pub fn reward(e: &Env, config: &StakeConfig, amount: i128) -> Result<i128, StakeError> {
    if config.capacity_limit == 0 {
        return Err(StakeError::ConfigurationError);
    }
    I256::from_i128(e, amount)
        .mul(&I256::from_i128(e, config.reward_pool_total))
        .div(&I256::from_i128(e, config.capacity_limit))
        .to_i128()
        .ok_or(StakeError::ArithmeticOverflow)
}

/// `floor(amount * fee_bps / 10000)`.
pub fn fee(config: &StakeConfig, amount: i128) -> Result<i128, StakeError> {
    amount
        .checked_mul(config.fee_bps as i128)
        .map(|n| n / BPS_DENOMINATOR)
        .ok_or(StakeError::ArithmeticOverflow)
}

pub fn unlock_at(config: &StakeConfig, record: &StakeRecord) -> Result<u64, StakeError> {
    record
        .opened_at
        .checked_add(config.lock_term)
        .ok_or(StakeError::ArithmeticOverflow)
}

pub fn is_matured(e: &Env, config: &StakeConfig, record: &StakeRecord) -> Result<bool, StakeError> {
    Ok(e.ledger().timestamp() >= unlock_at(config, record)?)
}

/// What closing `record` right now would pay, regardless of whether it is
/// already closed.
pub fn preview_exit(
    e: &Env,
    config: &StakeConfig,
    record: &StakeRecord,
) -> Result<StakeInfo, StakeError> {
    let unlock_at = unlock_at(config, record)?;
    Ok(StakeInfo {
        amount: record.amount,
        opened_at: record.opened_at,
        unlock_at,
        matured: e.ledger().timestamp() >= unlock_at,
        active: !record.closed,
        reward: reward(e, config, record.amount)?,
        fee: fee(config, record.amount)?,
    })
}
