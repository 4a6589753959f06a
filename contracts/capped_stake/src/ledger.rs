//! # Stake Ledger
//!
//! Per-party, append-only list of stake records.
//!
//! ## Storage Layout
//!
//! | Key                          | Tier          | Lifecycle          |
//! |------------------------------|---------------|--------------------|
//! | `DataKey::StakeCount(party)` | `persistent()`| Per party          |
//! | `DataKey::Stake(party, idx)` | `persistent()`| Per record, forever|
//!
//! Indices are assigned in insertion order and never reused: closing a record
//! flips its `closed` flag in place, it is never removed.
//!
//! TTLs are extended on writes (open and close) only; the read views leave
//! storage untouched.

use soroban_sdk::{Address, Env, Vec};

use crate::asset_transfer;
use crate::capacity;
use crate::config;
use crate::errors::StakeError;
use crate::events;
use crate::pausable;
use crate::types::{DataKey, StakeRecord};

/// Minimum persistent TTL before a bump is requested (~1 day at 5 s/ledger).
const BUMP_THRESHOLD: u32 = 17_280;
/// Target persistent TTL after a bump (~30 days).
const BUMP_TARGET: u32 = 518_400;

pub fn stake_count(e: &Env, party: &Address) -> u32 {
    e.storage()
        .persistent()
        .get(&DataKey::StakeCount(party.clone()))
        .unwrap_or(0)
}

/// Reads record `index` of `party`. Reads never touch TTLs; every write does.
pub fn load(e: &Env, party: &Address, index: u32) -> Result<StakeRecord, StakeError> {
    e.storage()
        .persistent()
        .get(&DataKey::Stake(party.clone(), index))
        .ok_or(StakeError::NotFound)
}

/// Writes record `index` and bumps the TTL of both the record and the
/// party's counter, which must already exist.
pub(crate) fn save(e: &Env, party: &Address, index: u32, record: &StakeRecord) {
    let storage = e.storage().persistent();
    let key = DataKey::Stake(party.clone(), index);
    storage.set(&key, record);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    storage.extend_ttl(
        &DataKey::StakeCount(party.clone()),
        BUMP_THRESHOLD,
        BUMP_TARGET,
    );
}

fn append(e: &Env, party: &Address, record: &StakeRecord) -> Result<u32, StakeError> {
    let index = stake_count(e, party);
    let next = index.checked_add(1).ok_or(StakeError::ArithmeticOverflow)?;
    e.storage()
        .persistent()
        .set(&DataKey::StakeCount(party.clone()), &next);
    save(e, party, index, record);
    Ok(index)
}

/// All records of `party` in insertion order, closed ones included.
pub fn list(e: &Env, party: &Address) -> Result<Vec<StakeRecord>, StakeError> {
    page(e, party, 0, stake_count(e, party))
}

/// Up to `limit` records of `party` starting at index `start`. A window past
/// the end is clipped; a `start` beyond the last record yields an empty list.
pub fn page(e: &Env, party: &Address, start: u32, limit: u32) -> Result<Vec<StakeRecord>, StakeError> {
    let end = start.saturating_add(limit).min(stake_count(e, party));
    let mut records = Vec::new(e);
    for index in start..end {
        records.push_back(load(e, party, index)?);
    }
    Ok(records)
}

/// Locks `amount` of the staked asset for `party` and returns the new index.
///
/// Fails with `Paused`, `InvalidAmount`, `CapacityExceeded` or
/// `TransferFailed`; on failure nothing is recorded.
pub(crate) fn open(e: &Env, party: &Address, amount: i128) -> Result<u32, StakeError> {
    pausable::require_not_paused(e)?;
    if amount <= 0 {
        return Err(StakeError::InvalidAmount);
    }

    let config = config::load(e)?;
    let capacity_used = capacity::reserve(e, &config, amount)?;

    asset_transfer::pull(e, &config.staked_asset, party, amount)?;

    let record = StakeRecord {
        amount,
        opened_at: e.ledger().timestamp(),
        closed: false,
    };
    let index = append(e, party, &record)?;
    capacity::track_open(e)?;

    events::emit_stake_opened(e, party, index, amount, capacity_used);
    Ok(index)
}
