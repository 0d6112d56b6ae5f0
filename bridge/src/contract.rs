//! Wrapping Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::access::add_oracle;
use crate::error::ContractError;
use crate::execute::{
    execute_add_oracle, execute_burn_erc20, execute_create_token, execute_lock,
    execute_mint_erc20, execute_remove_oracle, execute_transfer_wrapped, execute_unlock,
    execute_update_admin, reply_unlock,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_asset_by_token_address, query_asset_record, query_asset_records, query_config,
    query_deployment_nonce, query_escrow_balance, query_is_oracle, query_oracles,
    query_predict_token_address, query_wrapped_balance, query_wrapped_token_info,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEPLOY_NONCE, ESCROW_BALANCE,
    INITIAL_DEPLOY_NONCE, ORACLE_COUNT, UNLOCK_REPLY_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;

    if msg.oracles.is_empty() {
        return Err(ContractError::NoOracles);
    }
    if msg.native_denom.is_empty() {
        return Err(ContractError::Std(StdError::generic_err(
            "native_denom must not be empty",
        )));
    }

    let config = Config {
        admin,
        native_denom: msg.native_denom,
    };
    CONFIG.save(deps.storage, &config)?;

    ORACLE_COUNT.save(deps.storage, &0)?;
    for oracle in &msg.oracles {
        let oracle = deps.api.addr_validate(oracle)?;
        add_oracle(deps.storage, &oracle)?;
    }

    ESCROW_BALANCE.save(deps.storage, &Uint128::zero())?;
    DEPLOY_NONCE.save(deps.storage, &INITIAL_DEPLOY_NONCE)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("native_denom", config.native_denom)
        .add_attribute("oracle_count", msg.oracles.len().to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Native escrow
        ExecuteMsg::Lock {
            dest_address,
            dest_identifier,
        } => execute_lock(deps, info, dest_address, dest_identifier),
        ExecuteMsg::Unlock {
            dest_address,
            value,
        } => execute_unlock(deps, env, info, dest_address, value),

        // Wrapped tokens
        ExecuteMsg::CreateToken {
            name,
            symbol,
            coin_id,
        } => execute_create_token(deps, env, info, name, symbol, coin_id),
        ExecuteMsg::MintErc20 { coin_id, to, value } => {
            execute_mint_erc20(deps, env, info, coin_id, to, value)
        }
        ExecuteMsg::BurnErc20 {
            coin_id,
            from,
            dest_address,
            value,
        } => execute_burn_erc20(deps, env, info, coin_id, from, dest_address, value),
        ExecuteMsg::TransferWrapped {
            coin_id,
            recipient,
            amount,
        } => execute_transfer_wrapped(deps, info, coin_id, recipient, amount),

        // Governance
        ExecuteMsg::AddOracle { oracle } => execute_add_oracle(deps, info, oracle),
        ExecuteMsg::RemoveOracle { oracle } => execute_remove_oracle(deps, info, oracle),
        ExecuteMsg::UpdateAdmin { admin } => execute_update_admin(deps, info, admin),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        UNLOCK_REPLY_ID => reply_unlock(deps, env, msg),
        id => Err(ContractError::UnknownReply { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::IsOracle { address } => to_json_binary(&query_is_oracle(deps, address)?),
        QueryMsg::Oracles {} => to_json_binary(&query_oracles(deps)?),
        QueryMsg::EscrowBalance {} => to_json_binary(&query_escrow_balance(deps)?),

        // Token registry
        QueryMsg::AssetRecord { coin_id } => to_json_binary(&query_asset_record(deps, coin_id)?),
        QueryMsg::AssetByTokenAddress { token_address } => {
            to_json_binary(&query_asset_by_token_address(deps, token_address)?)
        }
        QueryMsg::AssetRecords { start_after, limit } => {
            to_json_binary(&query_asset_records(deps, start_after, limit)?)
        }
        QueryMsg::DeploymentNonce {} => to_json_binary(&query_deployment_nonce(deps)?),
        QueryMsg::PredictTokenAddress { nonce } => {
            to_json_binary(&query_predict_token_address(deps, env, nonce)?)
        }

        // Wrapped tokens
        QueryMsg::WrappedBalance { coin_id, address } => {
            to_json_binary(&query_wrapped_balance(deps, coin_id, address)?)
        }
        QueryMsg::WrappedTokenInfo { coin_id } => {
            to_json_binary(&query_wrapped_token_info(deps, coin_id)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
