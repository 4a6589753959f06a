//! Exit state machine.
//!
//! `Open -> Closed` happens exactly once per record. Which branch ran (early or
//! mature) is not stored; only its financial effects are:
//!
//! - **Early** (`now < unlock_at`): owner receives `amount - fee`, treasury
//!   receives `fee`, no reward. The amount is released from capacity.
//! - **Mature** (`now >= unlock_at`): owner receives `amount` plus
//!   `reward(amount)` in the reward asset. Capacity is retained for good.

use soroban_sdk::{Address, Env};

use crate::access;
use crate::asset_transfer;
use crate::capacity;
use crate::config;
use crate::errors::StakeError;
use crate::events;
use crate::ledger;
use crate::pausable;
use crate::rewards;
use crate::types::ExitReceipt;

pub(crate) fn close(
    e: &Env,
    caller: &Address,
    owner: &Address,
    index: u32,
) -> Result<ExitReceipt, StakeError> {
    pausable::require_not_paused(e)?;
    access::require_owner(e, caller, owner)?;

    let mut record = ledger::load(e, owner, index)?;
    if record.closed {
        return Err(StakeError::AlreadyClosed);
    }

    let config = config::load(e)?;
    let matured = rewards::is_matured(e, &config, &record)?;

    // Flag first: the record can never pay out twice.
    record.closed = true;
    ledger::save(e, owner, index, &record);
    capacity::track_close(e)?;

    let receipt = if matured {
        let reward = rewards::reward(e, &config, record.amount)?;
        capacity::debit_reward_escrow(e, reward)?;
        asset_transfer::push(e, &config.staked_asset, owner, record.amount)?;
        asset_transfer::push(e, &config.reward_asset, owner, reward)?;
        ExitReceipt {
            index,
            matured,
            principal_paid: record.amount,
            fee: 0,
            reward,
        }
    } else {
        let fee = rewards::fee(&config, record.amount)?;
        let net = record.amount - fee;
        capacity::release(e, record.amount)?;
        asset_transfer::push(e, &config.staked_asset, owner, net)?;
        asset_transfer::push(e, &config.staked_asset, &config.treasury, fee)?;
        ExitReceipt {
            index,
            matured,
            principal_paid: net,
            fee,
            reward: 0,
        }
    };

    events::emit_stake_closed(
        e,
        owner,
        index,
        receipt.matured,
        receipt.principal_paid,
        receipt.fee,
        receipt.reward,
    );
    Ok(receipt)
}
