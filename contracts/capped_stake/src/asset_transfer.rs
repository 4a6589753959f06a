//! Asset movement boundary.
//!
//! Every movement goes through the token client's `try_` call so a failing
//! transfer surfaces as `TransferFailed`; returning that error from the entry
//! point rolls back the whole invocation, ledger writes included.

use soroban_sdk::token::TokenClient;
use soroban_sdk::{log, Address, Env};

use crate::errors::StakeError;
use crate::types::{AssetKind, AssetRef};

/// Moves `amount` of `asset` from `from` into the contract.
///
/// `Native` assets are transferred directly on `from`'s authorization;
/// `Fungible` assets are pulled against a prior allowance to the contract.
pub fn pull(e: &Env, asset: &AssetRef, from: &Address, amount: i128) -> Result<(), StakeError> {
    if amount < 0 {
        return Err(StakeError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }

    let contract = e.current_contract_address();
    let client = TokenClient::new(e, &asset.token);
    let moved = match asset.kind {
        AssetKind::Native => client.try_transfer(from, &contract, &amount).is_ok(),
        AssetKind::Fungible => {
            if client.allowance(from, &contract) < amount {
                log!(e, "insufficient token allowance", from.clone(), amount);
                return Err(StakeError::TransferFailed);
            }
            client
                .try_transfer_from(&contract, from, &contract, &amount)
                .is_ok()
        }
    };
    if !moved {
        log!(e, "inbound transfer failed", from.clone(), amount);
        return Err(StakeError::TransferFailed);
    }
    Ok(())
}

/// Moves `amount` of `asset` from the contract to `to`.
pub fn push(e: &Env, asset: &AssetRef, to: &Address, amount: i128) -> Result<(), StakeError> {
    if amount < 0 {
        return Err(StakeError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }

    let contract = e.current_contract_address();
    let client = TokenClient::new(e, &asset.token);
    if client.try_transfer(&contract, to, &amount).is_err() {
        log!(e, "outbound transfer failed", to.clone(), amount);
        return Err(StakeError::TransferFailed);
    }
    Ok(())
}
