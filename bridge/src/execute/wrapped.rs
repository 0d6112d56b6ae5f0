//! Wrapped token handlers (CreateToken, MintErc20, BurnErc20, TransferWrapped).
//!
//! Supply changes go through [`crate::token`] with the bridge contract itself
//! as the minter.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::access::require_oracle;
use crate::error::ContractError;
use crate::events;
use crate::registry;
use crate::token;

/// Deploy the wrapped token for `coin_id` at the next derived address.
pub fn execute_create_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    name: String,
    symbol: String,
    coin_id: u64,
) -> Result<Response, ContractError> {
    require_oracle(deps.storage, &info.sender)?;

    let (record, nonce) = registry::create(
        deps.storage,
        deps.api,
        &env.contract.address,
        name,
        symbol,
        coin_id,
    )?;

    Ok(Response::new()
        .add_event(events::token_created(
            record.coin_id,
            &record.token_address,
            &record.name,
            &record.symbol,
            nonce,
        ))
        .add_attribute("action", "create_token")
        .add_attribute("coin_id", coin_id.to_string())
        .add_attribute("token_address", record.token_address))
}

/// Mint `value` of the wrapped token for `coin_id` to `to`.
pub fn execute_mint_erc20(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    coin_id: u64,
    to: String,
    value: Uint128,
) -> Result<Response, ContractError> {
    require_oracle(deps.storage, &info.sender)?;

    let record = registry::load(deps.storage, coin_id)?;
    let to = deps.api.addr_validate(&to)?;

    let balance = token::mint(
        deps.storage,
        &record.token_address,
        &env.contract.address,
        &to,
        value,
    )?;

    Ok(Response::new()
        .add_event(events::mint_erc20(coin_id, &to, value))
        .add_attribute("action", "mint_erc20")
        .add_attribute("balance", balance))
}

/// Burn `value` of the wrapped token for `coin_id` from `from`.
pub fn execute_burn_erc20(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    coin_id: u64,
    from: String,
    dest_address: String,
    value: Uint128,
) -> Result<Response, ContractError> {
    require_oracle(deps.storage, &info.sender)?;

    let record = registry::load(deps.storage, coin_id)?;
    let from = deps.api.addr_validate(&from)?;

    let balance = token::burn(
        deps.storage,
        &record.token_address,
        &env.contract.address,
        &from,
        value,
    )?;

    Ok(Response::new()
        .add_event(events::burn_erc20(coin_id, &from, &dest_address, value))
        .add_attribute("action", "burn_erc20")
        .add_attribute("balance", balance))
}

/// Move the sender's wrapped tokens for `coin_id` to `recipient`.
pub fn execute_transfer_wrapped(
    deps: DepsMut,
    info: MessageInfo,
    coin_id: u64,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let record = registry::load(deps.storage, coin_id)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    token::transfer(
        deps.storage,
        &record.token_address,
        &info.sender,
        &recipient,
        amount,
    )?;

    Ok(Response::new()
        .add_event(events::transfer_wrapped(
            coin_id,
            &info.sender,
            &recipient,
            amount,
        ))
        .add_attribute("action", "transfer_wrapped"))
}
