//! # Batch Executor
//!
//! Runs a list of operations under one caller as a single unit. All operations
//! share the invocation's storage frame, so the first error returned aborts the
//! batch and the host discards every write and transfer made before it.
//!
//! The batch grants no extra privilege: each operation performs the same role
//! and ownership checks it would as a standalone call.

use soroban_sdk::{Address, Env, Vec};

use crate::admin;
use crate::errors::StakeError;
use crate::events;
use crate::exit;
use crate::ledger;
use crate::pausable;
use crate::types::{OpOutcome, StakeOp};

fn execute(e: &Env, caller: &Address, op: StakeOp) -> Result<OpOutcome, StakeError> {
    let outcome = match op {
        StakeOp::Open(amount) => OpOutcome::Opened(ledger::open(e, caller, amount)?),
        StakeOp::Close(owner, index) => OpOutcome::Closed(exit::close(e, caller, &owner, index)?),
        StakeOp::FundRewardPool(amount) => {
            admin::fund_reward_pool(e, caller, amount)?;
            OpOutcome::Done
        }
        StakeOp::DefundRewardPool(amount) => {
            admin::defund_reward_pool(e, caller, amount)?;
            OpOutcome::Done
        }
        StakeOp::SetCapacityLimit(value) => {
            admin::set_capacity_limit(e, caller, value)?;
            OpOutcome::Done
        }
        StakeOp::SetRewardPoolTotal(value) => {
            admin::set_reward_pool_total(e, caller, value)?;
            OpOutcome::Done
        }
        StakeOp::SetLockTerm(value) => {
            admin::set_lock_term(e, caller, value)?;
            OpOutcome::Done
        }
        StakeOp::SetFeeBps(value) => {
            admin::set_fee_bps(e, caller, value)?;
            OpOutcome::Done
        }
        StakeOp::SetTreasury(treasury) => {
            admin::set_treasury(e, caller, &treasury)?;
            OpOutcome::Done
        }
        StakeOp::SetPaused(paused) => {
            pausable::set_paused(e, caller, paused)?;
            OpOutcome::Done
        }
        StakeOp::TransferAdministrator(new_admin) => {
            admin::transfer_administrator(e, caller, &new_admin)?;
            OpOutcome::Done
        }
        StakeOp::Upgrade(wasm_hash) => {
            admin::upgrade(e, caller, &wasm_hash)?;
            OpOutcome::Done
        }
    };
    Ok(outcome)
}

/// Executes `ops` in order and returns one outcome per operation.
///
/// # Errors
/// * `EmptyBatch` - `ops` is empty
/// * The first error returned by any operation, unchanged
pub(crate) fn run(e: &Env, caller: &Address, ops: Vec<StakeOp>) -> Result<Vec<OpOutcome>, StakeError> {
    if ops.is_empty() {
        return Err(StakeError::EmptyBatch);
    }

    let mut outcomes = Vec::new(e);
    for op in ops.iter() {
        outcomes.push_back(execute(e, caller, op)?);
    }

    events::emit_batch_executed(e, caller, ops.len());
    Ok(outcomes)
}
