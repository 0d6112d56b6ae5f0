//! Oracle access control.
//!
//! Privileged handlers call [`require_oracle`] before touching any other state.

use cosmwasm_std::{Addr, StdResult, Storage};

use crate::error::ContractError;
use crate::state::{CONFIG, ORACLES, ORACLE_COUNT};

/// Whether `addr` is an active oracle.
pub fn is_oracle(storage: &dyn Storage, addr: &Addr) -> StdResult<bool> {
    Ok(ORACLES.may_load(storage, addr)?.unwrap_or(false))
}

/// Fail with `Unauthorized` unless `addr` is an active oracle.
pub fn require_oracle(storage: &dyn Storage, addr: &Addr) -> Result<(), ContractError> {
    if !is_oracle(storage, addr)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Fail with `UnauthorizedAdmin` unless `addr` is the configured admin.
pub fn require_admin(storage: &dyn Storage, addr: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(storage)?;
    if *addr != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }
    Ok(())
}

pub fn add_oracle(storage: &mut dyn Storage, oracle: &Addr) -> Result<u32, ContractError> {
    if is_oracle(storage, oracle)? {
        return Err(ContractError::OracleAlreadyRegistered);
    }

    ORACLES.save(storage, oracle, &true)?;
    let count = ORACLE_COUNT.may_load(storage)?.unwrap_or(0) + 1;
    ORACLE_COUNT.save(storage, &count)?;
    Ok(count)
}

pub fn remove_oracle(storage: &mut dyn Storage, oracle: &Addr) -> Result<u32, ContractError> {
    if !is_oracle(storage, oracle)? {
        return Err(ContractError::OracleNotRegistered);
    }

    let count = ORACLE_COUNT.load(storage)?;
    if count <= 1 {
        return Err(ContractError::CannotRemoveLastOracle);
    }

    ORACLES.remove(storage, oracle);
    ORACLE_COUNT.save(storage, &(count - 1))?;
    Ok(count - 1)
}
