//! Administrative operations.
//!
//! All of them require the administrator role and none of them are gated by
//! the pause flag. Parameter changes apply to future `open` capacity checks and
//! future reward/fee computations only; closed records are never revisited.

use soroban_sdk::{Address, BytesN, Env, IntoVal};

use crate::access::{self, Role};
use crate::asset_transfer;
use crate::capacity;
use crate::config::{self, MAX_FEE_BPS};
use crate::errors::StakeError;
use crate::events;
use crate::types::DefundPolicy;

/// Moves `amount` of the reward asset from the administrator into escrow.
pub(crate) fn fund_reward_pool(e: &Env, admin: &Address, amount: i128) -> Result<(), StakeError> {
    access::require_role(e, admin, Role::Administrator)?;
    if amount <= 0 {
        return Err(StakeError::InvalidAmount);
    }
    let config = config::load(e)?;
    asset_transfer::pull(e, &config.reward_asset, admin, amount)?;
    capacity::credit_reward_escrow(e, amount)?;
    events::emit_pool_funded(e, admin, amount);
    Ok(())
}

/// Moves `amount` of the reward asset out of escrow to the administrator.
///
/// Bounded by the funded escrow (`RewardPoolExhausted`). Under
/// `DefundPolicy::RequireNoOpenStakes` it also fails with `ActiveStakes`
/// while any record anywhere is open.
pub(crate) fn defund_reward_pool(
    e: &Env,
    admin: &Address,
    amount: i128,
) -> Result<(), StakeError> {
    access::require_role(e, admin, Role::Administrator)?;
    if amount <= 0 {
        return Err(StakeError::InvalidAmount);
    }
    if config::defund_policy(e)? == DefundPolicy::RequireNoOpenStakes
        && capacity::open_stakes(e) > 0
    {
        return Err(StakeError::ActiveStakes);
    }
    let config = config::load(e)?;
    capacity::debit_reward_escrow(e, amount)?;
    asset_transfer::push(e, &config.reward_asset, admin, amount)?;
    events::emit_pool_defunded(e, admin, amount);
    Ok(())
}

pub(crate) fn set_capacity_limit(e: &Env, admin: &Address, value: i128) -> Result<(), StakeError> {
    access::require_role(e, admin, Role::Administrator)?;
    if value < 0 {
        return Err(StakeError::InvalidAmount);
    }
    config::update(e, |c| c.capacity_limit = value)?;
    events::emit_config_updated(e, "capacity_limit", value.into_val(e));
    Ok(())
}

pub(crate) fn set_reward_pool_total(
    e: &Env,
    admin: &Address,
    value: i128,
) -> Result<(), StakeError> {
    access::require_role(e, admin, Role::Administrator)?;
    if value < 0 {
        return Err(StakeError::InvalidAmount);
    }
    config::update(e, |c| c.reward_pool_total = value)?;
    events::emit_config_updated(e, "reward_pool_total", value.into_val(e));
    Ok(())
}

pub(crate) fn set_lock_term(e: &Env, admin: &Address, value: u64) -> Result<(), StakeError> {
    access::require_role(e, admin, Role::Administrator)?;
    config::update(e, |c| c.lock_term = value)?;
    events::emit_config_updated(e, "lock_term", value.into_val(e));
    Ok(())
}

pub(crate) fn set_fee_bps(e: &Env, admin: &Address, value: u32) -> Result<(), StakeError> {
    access::require_role(e, admin, Role::Administrator)?;
    if value > MAX_FEE_BPS {
        return Err(StakeError::InvalidFeeBps);
    }
    config::update(e, |c| c.fee_bps = value)?;
    events::emit_config_updated(e, "fee_bps", value.into_val(e));
    Ok(())
}

pub(crate) fn set_treasury(e: &Env, admin: &Address, treasury: &Address) -> Result<(), StakeError> {
    access::require_role(e, admin, Role::Administrator)?;
    config::update(e, |c| c.treasury = treasury.clone())?;
    events::emit_config_updated(e, "treasury", treasury.clone().into_val(e));
    Ok(())
}

/// One-step, immediate handover of the administrator role.
pub(crate) fn transfer_administrator(
    e: &Env,
    admin: &Address,
    new_admin: &Address,
) -> Result<(), StakeError> {
    access::require_role(e, admin, Role::Administrator)?;
    config::set_admin(e, new_admin);
    events::emit_admin_transferred(e, admin, new_admin);
    Ok(())
}

/// Swaps the contract code. Storage is left exactly as it is.
pub(crate) fn upgrade(
    e: &Env,
    admin: &Address,
    new_wasm_hash: &BytesN<32>,
) -> Result<(), StakeError> {
    access::require_role(e, admin, Role::Administrator)?;
    e.deployer()
        .update_current_contract_wasm(new_wasm_hash.clone());
    events::emit_upgraded(e, new_wasm_hash);
    Ok(())
}
