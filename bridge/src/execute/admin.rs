//! Governance handlers.
//!
//! This module handles:
//! - Oracle set management (add/remove)
//! - Admin hand-over

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::access::{add_oracle, remove_oracle, require_admin};
use crate::error::ContractError;
use crate::state::CONFIG;

// ============================================================================
// Oracle Management
// ============================================================================

/// Add a new oracle.
pub fn execute_add_oracle(
    deps: DepsMut,
    info: MessageInfo,
    oracle: String,
) -> Result<Response, ContractError> {
    require_admin(deps.storage, &info.sender)?;

    let oracle_addr = deps.api.addr_validate(&oracle)?;
    let count = add_oracle(deps.storage, &oracle_addr)?;

    Ok(Response::new()
        .add_attribute("action", "add_oracle")
        .add_attribute("oracle", oracle_addr)
        .add_attribute("oracle_count", count.to_string()))
}

/// Remove an oracle. The last oracle cannot be removed.
pub fn execute_remove_oracle(
    deps: DepsMut,
    info: MessageInfo,
    oracle: String,
) -> Result<Response, ContractError> {
    require_admin(deps.storage, &info.sender)?;

    let oracle_addr = deps.api.addr_validate(&oracle)?;
    let count = remove_oracle(deps.storage, &oracle_addr)?;

    Ok(Response::new()
        .add_attribute("action", "remove_oracle")
        .add_attribute("oracle", oracle_addr)
        .add_attribute("oracle_count", count.to_string()))
}

// ============================================================================
// Admin Transfer
// ============================================================================

/// Hand governance over to a new admin.
pub fn execute_update_admin(
    deps: DepsMut,
    info: MessageInfo,
    admin: String,
) -> Result<Response, ContractError> {
    require_admin(deps.storage, &info.sender)?;

    let new_admin = deps.api.addr_validate(&admin)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.admin = new_admin.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_admin")
        .add_attribute("new_admin", new_admin))
}
