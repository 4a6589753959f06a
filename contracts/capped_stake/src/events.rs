use soroban_sdk::{Address, BytesN, Env, Symbol, Val};

use crate::types::{DefundPolicy, StakeConfig};

/// Emitted once by `initialize`.
///
/// # Topics
/// * `Symbol` - "initialized"
///
/// # Data
/// * `Address` - The administrator
/// * `StakeConfig` - The initial configuration
/// * `DefundPolicy` - The chosen defund policy
pub fn emit_initialized(e: &Env, admin: &Address, config: &StakeConfig, policy: DefundPolicy) {
    e.events().publish(
        (Symbol::new(e, "initialized"),),
        (admin.clone(), config.clone(), policy),
    );
}

/// Emitted when a stake record is created.
///
/// # Topics
/// * `Symbol` - "stake_opened"
/// * `Address` - The party owning the record
///
/// # Data
/// * `u32` - Index of the new record
/// * `i128` - Staked amount
/// * `i128` - Capacity counter after the open
pub fn emit_stake_opened(e: &Env, party: &Address, index: u32, amount: i128, capacity_used: i128) {
    let topics = (Symbol::new(e, "stake_opened"), party.clone());
    e.events().publish(topics, (index, amount, capacity_used));
}

/// Emitted when a stake record is closed, early or mature.
///
/// # Topics
/// * `Symbol` - "stake_closed"
/// * `Address` - The party owning the record
///
/// # Data
/// * `u32` - Index of the record
/// * `bool` - Whether the lock term had elapsed
/// * `i128` - Staked asset returned to the party
/// * `i128` - Fee sent to the treasury
/// * `i128` - Reward paid to the party
pub fn emit_stake_closed(
    e: &Env,
    party: &Address,
    index: u32,
    matured: bool,
    paid: i128,
    fee: i128,
    reward: i128,
) {
    let topics = (Symbol::new(e, "stake_closed"), party.clone());
    e.events()
        .publish(topics, (index, matured, paid, fee, reward));
}

pub fn emit_pool_funded(e: &Env, admin: &Address, amount: i128) {
    e.events().publish(
        (Symbol::new(e, "pool_funded"),),
        (admin.clone(), amount),
    );
}

pub fn emit_pool_defunded(e: &Env, admin: &Address, amount: i128) {
    e.events().publish(
        (Symbol::new(e, "pool_defunded"),),
        (admin.clone(), amount),
    );
}

/// Emitted by every configuration setter.
///
/// # Topics
/// * `Symbol` - "config_updated"
/// * `Symbol` - Name of the changed field
///
/// # Data
/// * The new value
pub fn emit_config_updated(e: &Env, field: &str, value: Val) {
    let topics = (Symbol::new(e, "config_updated"), Symbol::new(e, field));
    e.events().publish(topics, value);
}

pub fn emit_paused(e: &Env, admin: &Address) {
    e.events()
        .publish((Symbol::new(e, "paused"),), admin.clone());
}

pub fn emit_unpaused(e: &Env, admin: &Address) {
    e.events()
        .publish((Symbol::new(e, "unpaused"),), admin.clone());
}

pub fn emit_admin_transferred(e: &Env, previous: &Address, new_admin: &Address) {
    e.events().publish(
        (Symbol::new(e, "admin_transferred"),),
        (previous.clone(), new_admin.clone()),
    );
}

pub fn emit_upgraded(e: &Env, wasm_hash: &BytesN<32>) {
    e.events()
        .publish((Symbol::new(e, "upgraded"),), wasm_hash.clone());
}

pub fn emit_batch_executed(e: &Env, caller: &Address, op_count: u32) {
    e.events().publish(
        (Symbol::new(e, "batch_executed"), caller.clone()),
        op_count,
    );
}
