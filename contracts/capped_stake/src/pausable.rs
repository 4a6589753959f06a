use soroban_sdk::{Address, Env};

use crate::access::{self, Role};
use crate::errors::StakeError;
use crate::events;
use crate::types::DataKey;

pub fn is_paused(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn require_not_paused(e: &Env) -> Result<(), StakeError> {
    if is_paused(e) {
        return Err(StakeError::Paused);
    }
    Ok(())
}

/// Puts a freshly initialized pool into the paused state without an event.
pub(crate) fn start_paused(e: &Env) {
    e.storage().instance().set(&DataKey::Paused, &true);
}

pub(crate) fn set_paused(e: &Env, admin: &Address, paused: bool) -> Result<(), StakeError> {
    access::require_role(e, admin, Role::Administrator)?;
    e.storage().instance().set(&DataKey::Paused, &paused);
    if paused {
        events::emit_paused(e, admin);
    } else {
        events::emit_unpaused(e, admin);
    }
    Ok(())
}
