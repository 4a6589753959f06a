//! Authorization boundary.
//!
//! Entry points authenticate the caller with `require_auth()` exactly once;
//! everything below works with an already-authenticated `caller` and only asks
//! whether that address holds a role.

use soroban_sdk::{log, Address, Env};

use crate::config;
use crate::errors::StakeError;

/// Roles recognised by the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Administrator,
}

pub fn is_authorized(e: &Env, caller: &Address, role: Role) -> Result<bool, StakeError> {
    match role {
        Role::Administrator => Ok(config::admin(e)? == *caller),
    }
}

pub fn require_role(e: &Env, caller: &Address, role: Role) -> Result<(), StakeError> {
    if !is_authorized(e, caller, role)? {
        log!(e, "caller lacks role", caller.clone());
        return Err(StakeError::Unauthorized);
    }
    Ok(())
}

/// Record owners act for themselves only.
pub fn require_owner(e: &Env, caller: &Address, owner: &Address) -> Result<(), StakeError> {
    if caller != owner {
        log!(e, "caller does not own record", caller.clone(), owner.clone());
        return Err(StakeError::Unauthorized);
    }
    Ok(())
}
