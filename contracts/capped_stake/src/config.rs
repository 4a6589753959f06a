//! Configuration state: the `StakeConfig` snapshot and the values stored
//! beside it (administrator, defund policy).
//!
//! All of it lives in `instance()` storage: a small, bounded set of globals
//! that every operation needs.

use soroban_sdk::{Address, Env};

use crate::errors::StakeError;
use crate::types::{DataKey, DefundPolicy, StakeConfig};

/// Minimum instance TTL before a bump is requested (~1 day at 5 s/ledger).
pub(crate) const INSTANCE_BUMP_THRESHOLD: u32 = 17_280;
/// Target instance TTL after a bump (~30 days).
pub(crate) const INSTANCE_BUMP_TARGET: u32 = 518_400;

pub(crate) const MAX_FEE_BPS: u32 = 10_000;

pub(crate) fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub(crate) fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_THRESHOLD, INSTANCE_BUMP_TARGET);
}

pub(crate) fn validate(config: &StakeConfig) -> Result<(), StakeError> {
    if config.fee_bps > MAX_FEE_BPS {
        return Err(StakeError::InvalidFeeBps);
    }
    if config.capacity_limit < 0 || config.reward_pool_total < 0 {
        return Err(StakeError::InvalidAmount);
    }
    Ok(())
}

pub(crate) fn load(e: &Env) -> Result<StakeConfig, StakeError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(StakeError::NotInitialized)
}

pub(crate) fn save(e: &Env, config: &StakeConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

/// Load, mutate and store the configuration in one step.
pub(crate) fn update<F>(e: &Env, f: F) -> Result<StakeConfig, StakeError>
where
    F: FnOnce(&mut StakeConfig),
{
    let mut config = load(e)?;
    f(&mut config);
    save(e, &config);
    Ok(config)
}

pub(crate) fn admin(e: &Env) -> Result<Address, StakeError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(StakeError::NotInitialized)
}

pub(crate) fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

pub(crate) fn defund_policy(e: &Env) -> Result<DefundPolicy, StakeError> {
    e.storage()
        .instance()
        .get(&DataKey::DefundPolicy)
        .ok_or(StakeError::NotInitialized)
}

pub(crate) fn set_defund_policy(e: &Env, policy: DefundPolicy) {
    e.storage().instance().set(&DataKey::DefundPolicy, &policy);
}
