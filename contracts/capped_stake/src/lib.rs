//! Capped Stake Pool Contract
//!
//! Depositors lock a staked asset for a fixed term. Closing before the term
//! pays back principal minus a fee and forfeits the reward; closing after it
//! pays back the full principal plus `amount * reward_pool_total / capacity_limit`
//! of the reward asset.
//!
//! ## Key design decisions
//!
//! - **Asymmetric capacity counter**: early exits release capacity, mature
//!   exits retire it. Since every `open` keeps the counter at or below
//!   `capacity_limit`, total reward paid can never exceed `reward_pool_total`.
//! - **Append-only ledger**: records are flagged closed, never deleted.
//! - **Result-based errors**: an entry point returning `Err` makes the host
//!   roll back every storage write and nested token transfer of the call.
//!   `batch` relies on this for all-or-nothing execution.
//! - **Auth once per entry point**: `require_auth()` is called on the caller at
//!   the boundary; internal modules only check roles and ownership.
//! - **Starts paused**: the administrator funds the reward pool, then unpauses.

#![no_std]

mod access;
mod admin;
mod asset_transfer;
mod batch;
mod capacity;
mod config;
mod errors;
mod events;
mod exit;
mod ledger;
mod pausable;
mod rewards;
mod types;

pub use errors::{ErrorCategory, StakeError};
pub use types::{
    AssetKind, AssetRef, DefundPolicy, ExitReceipt, OpOutcome, StakeConfig, StakeInfo, StakeOp,
    StakeRecord,
};

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};


#[cfg(test)]
mod test_batch;
#[cfg(test)]
mod test_events;

/// Code revision reported by `version()`; bumped with every deployed upgrade.
pub const CONTRACT_VERSION: u32 = 1;

#[contract]
pub struct CappedStake;

#[contractimpl]
impl CappedStake {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization. The pool starts paused.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called a second time
    /// * `InvalidFeeBps` - `config.fee_bps > 10000`
    /// * `InvalidAmount` - negative `capacity_limit` or `reward_pool_total`
    pub fn initialize(
        e: Env,
        admin: Address,
        config: StakeConfig,
        defund_policy: DefundPolicy,
    ) -> Result<(), StakeError> {
        if config::is_initialized(&e) {
            return Err(StakeError::AlreadyInitialized);
        }
        admin.require_auth();
        config::validate(&config)?;

        config::set_admin(&e, &admin);
        config::save(&e, &config);
        config::set_defund_policy(&e, defund_policy);
        pausable::start_paused(&e);
        events::emit_initialized(&e, &admin, &config, defund_policy);
        config::bump_instance(&e);
        Ok(())
    }

    // ── Stake lifecycle ────────────────────────────────────────────────────

    /// Lock `amount` of the staked asset. Returns the new record index.
    ///
    /// # Errors
    /// * `Paused`, `InvalidAmount`, `CapacityExceeded`, `TransferFailed`
    pub fn open(e: Env, party: Address, amount: i128) -> Result<u32, StakeError> {
        party.require_auth();
        let index = ledger::open(&e, &party, amount)?;
        config::bump_instance(&e);
        Ok(index)
    }

    /// Close record `index` of `owner`. `caller` must be the owner.
    ///
    /// # Errors
    /// * `Paused`, `Unauthorized`, `NotFound`, `AlreadyClosed`,
    ///   `ConfigurationError`, `RewardPoolExhausted`, `TransferFailed`
    pub fn close(
        e: Env,
        caller: Address,
        owner: Address,
        index: u32,
    ) -> Result<ExitReceipt, StakeError> {
        caller.require_auth();
        let receipt = exit::close(&e, &caller, &owner, index)?;
        config::bump_instance(&e);
        Ok(receipt)
    }

    /// Execute `ops` atomically under `caller`.
    pub fn batch(e: Env, caller: Address, ops: Vec<StakeOp>) -> Result<Vec<OpOutcome>, StakeError> {
        caller.require_auth();
        let outcomes = batch::run(&e, &caller, ops)?;
        config::bump_instance(&e);
        Ok(outcomes)
    }

    // ── Administration ─────────────────────────────────────────────────────

    pub fn fund_reward_pool(e: Env, admin: Address, amount: i128) -> Result<(), StakeError> {
        admin.require_auth();
        admin::fund_reward_pool(&e, &admin, amount)?;
        config::bump_instance(&e);
        Ok(())
    }

    /// Pull reward funds back out. Under `RequireNoOpenStakes` fails with
    /// `ActiveStakes` while any record is open.
    pub fn defund_reward_pool(e: Env, admin: Address, amount: i128) -> Result<(), StakeError> {
        admin.require_auth();
        admin::defund_reward_pool(&e, &admin, amount)?;
        config::bump_instance(&e);
        Ok(())
    }

    pub fn set_capacity_limit(e: Env, admin: Address, value: i128) -> Result<(), StakeError> {
        admin.require_auth();
        admin::set_capacity_limit(&e, &admin, value)?;
        config::bump_instance(&e);
        Ok(())
    }

    pub fn set_reward_pool_total(e: Env, admin: Address, value: i128) -> Result<(), StakeError> {
        admin.require_auth();
        admin::set_reward_pool_total(&e, &admin, value)?;
        config::bump_instance(&e);
        Ok(())
    }

    pub fn set_lock_term(e: Env, admin: Address, value: u64) -> Result<(), StakeError> {
        admin.require_auth();
        admin::set_lock_term(&e, &admin, value)?;
        config::bump_instance(&e);
        Ok(())
    }

    pub fn set_fee_bps(e: Env, admin: Address, value: u32) -> Result<(), StakeError> {
        admin.require_auth();
        admin::set_fee_bps(&e, &admin, value)?;
        config::bump_instance(&e);
        Ok(())
    }

    pub fn set_treasury(e: Env, admin: Address, treasury: Address) -> Result<(), StakeError> {
        admin.require_auth();
        admin::set_treasury(&e, &admin, &treasury)?;
        config::bump_instance(&e);
        Ok(())
    }

    pub fn set_paused(e: Env, admin: Address, paused: bool) -> Result<(), StakeError> {
        admin.require_auth();
        pausable::set_paused(&e, &admin, paused)?;
        config::bump_instance(&e);
        Ok(())
    }

    pub fn transfer_administrator(
        e: Env,
        admin: Address,
        new_admin: Address,
    ) -> Result<(), StakeError> {
        admin.require_auth();
        admin::transfer_administrator(&e, &admin, &new_admin)?;
        config::bump_instance(&e);
        Ok(())
    }

    /// Replace the contract code, keeping all stored state.
    pub fn upgrade(e: Env, admin: Address, new_wasm_hash: BytesN<32>) -> Result<(), StakeError> {
        admin.require_auth();
        admin::upgrade(&e, &admin, &new_wasm_hash)?;
        config::bump_instance(&e);
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_stake(e: Env, party: Address, index: u32) -> Result<StakeRecord, StakeError> {
        ledger::load(&e, &party, index)
    }

    /// All records of `party` in insertion order, closed ones included.
    pub fn get_stakes(e: Env, party: Address) -> Result<Vec<StakeRecord>, StakeError> {
        ledger::list(&e, &party)
    }

    /// Records `start..start + limit` of `party`, clipped to what exists.
    pub fn get_stakes_page(
        e: Env,
        party: Address,
        start: u32,
        limit: u32,
    ) -> Result<Vec<StakeRecord>, StakeError> {
        ledger::page(&e, &party, start, limit)
    }

    pub fn stake_count(e: Env, party: Address) -> u32 {
        ledger::stake_count(&e, &party)
    }

    /// Amounts a close of record `index` would pay right now.
    pub fn stake_info(e: Env, party: Address, index: u32) -> Result<StakeInfo, StakeError> {
        let record = ledger::load(&e, &party, index)?;
        let config = config::load(&e)?;
        rewards::preview_exit(&e, &config, &record)
    }

    pub fn get_reward(e: Env, amount: i128) -> Result<i128, StakeError> {
        rewards::reward(&e, &config::load(&e)?, amount)
    }

    pub fn get_fee(e: Env, amount: i128) -> Result<i128, StakeError> {
        rewards::fee(&config::load(&e)?, amount)
    }

    pub fn get_config(e: Env) -> Result<StakeConfig, StakeError> {
        config::load(&e)
    }

    pub fn capacity_used(e: Env) -> i128 {
        capacity::used(&e)
    }

    /// Number of records still open across all parties.
    pub fn open_stake_count(e: Env) -> u64 {
        capacity::open_stakes(&e)
    }

    /// Funded reward escrow not yet paid out or defunded.
    pub fn reward_balance(e: Env) -> i128 {
        capacity::reward_escrow(&e)
    }

    pub fn admin(e: Env) -> Result<Address, StakeError> {
        config::admin(&e)
    }

    pub fn is_paused(e: Env) -> bool {
        pausable::is_paused(&e)
    }

    pub fn defund_policy(e: Env) -> Result<DefundPolicy, StakeError> {
        config::defund_policy(&e)
    }

    pub fn version() -> u32 {
        CONTRACT_VERSION
    }
}
