//! Query handlers for the wrapping bridge contract.

use cosmwasm_std::{Addr, Deps, Env, Order, StdResult};
use cw20::{BalanceResponse, TokenInfoResponse};
use cw_storage_plus::Bound;

use crate::access::is_oracle;
use crate::msg::{
    AssetRecordsResponse, ConfigResponse, DeploymentNonceResponse, EscrowBalanceResponse,
    IsOracleResponse, OraclesResponse, PredictTokenAddressResponse,
};
use crate::registry::{deploy_nonce, find_by_token_address, predict_token_address};
use crate::state::{AssetRecord, ASSETS, CONFIG, ESCROW_BALANCE, ORACLES, ORACLE_COUNT};
use crate::token;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        native_denom: config.native_denom,
        oracle_count: ORACLE_COUNT.load(deps.storage)?,
    })
}

pub fn query_is_oracle(deps: Deps, address: String) -> StdResult<IsOracleResponse> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(IsOracleResponse {
        is_oracle: is_oracle(deps.storage, &addr)?,
    })
}

pub fn query_oracles(deps: Deps) -> StdResult<OraclesResponse> {
    let oracles: Vec<Addr> = ORACLES
        .range(deps.storage, None, None, Order::Ascending)
        .filter_map(|item| match item {
            Ok((addr, true)) => Some(Ok(addr)),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(OraclesResponse { oracles })
}

pub fn query_escrow_balance(deps: Deps) -> StdResult<EscrowBalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(EscrowBalanceResponse {
        denom: config.native_denom,
        balance: ESCROW_BALANCE.load(deps.storage)?,
    })
}

// ============================================================================
// Registry Queries
// ============================================================================

pub fn query_asset_record(deps: Deps, coin_id: u64) -> StdResult<Option<AssetRecord>> {
    ASSETS.may_load(deps.storage, coin_id)
}

pub fn query_asset_by_token_address(
    deps: Deps,
    token_address: String,
) -> StdResult<Option<AssetRecord>> {
    find_by_token_address(deps.storage, &token_address)
}

/// Query paginated list of registered assets, ordered by coin id.
pub fn query_asset_records(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<AssetRecordsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let assets = ASSETS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, record)| record))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(AssetRecordsResponse { assets })
}

pub fn query_deployment_nonce(deps: Deps) -> StdResult<DeploymentNonceResponse> {
    Ok(DeploymentNonceResponse {
        nonce: deploy_nonce(deps.storage)?,
    })
}

pub fn query_predict_token_address(
    deps: Deps,
    env: Env,
    nonce: Option<u64>,
) -> StdResult<PredictTokenAddressResponse> {
    let nonce = match nonce {
        Some(nonce) => nonce,
        None => deploy_nonce(deps.storage)?,
    };

    Ok(PredictTokenAddressResponse {
        nonce,
        token_address: predict_token_address(deps.api, &env.contract.address, nonce)?,
    })
}

// ============================================================================
// Wrapped Token Queries
// ============================================================================

pub fn query_wrapped_balance(
    deps: Deps,
    coin_id: u64,
    address: String,
) -> StdResult<BalanceResponse> {
    let record = ASSETS.load(deps.storage, coin_id)?;
    let holder = deps.api.addr_validate(&address)?;
    Ok(BalanceResponse {
        balance: token::balance_of(deps.storage, &record.token_address, &holder)?,
    })
}

pub fn query_wrapped_token_info(deps: Deps, coin_id: u64) -> StdResult<TokenInfoResponse> {
    let record = ASSETS.load(deps.storage, coin_id)?;
    let info = token::load(deps.storage, &record.token_address)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: info.total_supply,
    })
}
