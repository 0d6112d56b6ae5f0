//! Token registry: coin id -> wrapped token, created at most once per coin id.

use cosmwasm_std::{Addr, Api, StdError, StdResult, Storage};

use crate::error::ContractError;
use crate::hash::{address_to_hex, derive_address, hex_to_address};
use crate::state::{AssetRecord, ASSETS, DEPLOY_NONCE, INITIAL_DEPLOY_NONCE};
use crate::token;

/// Current deployment nonce of the coordinator.
pub fn deploy_nonce(storage: &dyn Storage) -> StdResult<u64> {
    Ok(DEPLOY_NONCE
        .may_load(storage)?
        .unwrap_or(INITIAL_DEPLOY_NONCE))
}

/// Address a token deployed by `coordinator` at `nonce` will receive.
pub fn predict_token_address(api: &dyn Api, coordinator: &Addr, nonce: u64) -> StdResult<String> {
    let canonical = api.addr_canonicalize(coordinator.as_str())?;
    Ok(address_to_hex(&derive_address(canonical.as_slice(), nonce)))
}

/// Look up the record for `coin_id`, failing with `UnknownAsset`.
pub fn load(storage: &dyn Storage, coin_id: u64) -> Result<AssetRecord, ContractError> {
    ASSETS
        .may_load(storage, coin_id)?
        .ok_or(ContractError::UnknownAsset { coin_id })
}

/// Reverse lookup from a token address (any hex case, `0x` optional) to its
/// registry record.
pub fn find_by_token_address(
    storage: &dyn Storage,
    token_address: &str,
) -> StdResult<Option<AssetRecord>> {
    let bytes = hex_to_address(token_address).map_err(StdError::generic_err)?;
    match token::may_load(storage, &address_to_hex(&bytes))? {
        Some(token) => ASSETS.may_load(storage, token.coin_id),
        None => Ok(None),
    }
}

/// Register `coin_id` and deploy its wrapped token at the address derived from
/// the coordinator's current nonce. Returns the record and the nonce used.
pub fn create(
    storage: &mut dyn Storage,
    api: &dyn Api,
    coordinator: &Addr,
    name: String,
    symbol: String,
    coin_id: u64,
) -> Result<(AssetRecord, u64), ContractError> {
    if ASSETS.has(storage, coin_id) {
        return Err(ContractError::TokenAlreadyExists { coin_id });
    }
    if name.trim().is_empty() {
        return Err(ContractError::InvalidTokenMetadata {
            reason: "name must not be empty".to_string(),
        });
    }
    if symbol.trim().is_empty() {
        return Err(ContractError::InvalidTokenMetadata {
            reason: "symbol must not be empty".to_string(),
        });
    }

    let nonce = deploy_nonce(storage)?;
    let token_address = predict_token_address(api, coordinator, nonce)?;

    token::deploy(storage, &token_address, coin_id, &name, &symbol, coordinator)?;

    let record = AssetRecord {
        coin_id,
        token_address,
        name,
        symbol,
    };
    ASSETS.save(storage, coin_id, &record)?;
    DEPLOY_NONCE.save(storage, &(nonce + 1))?;

    Ok((record, nonce))
}
