//! Bridge event log.
//!
//! Events are attached to the same `Response` as the state change they
//! describe, so they are emitted if and only if that change commits. On chain
//! each type is observed with the `wasm-` prefix (e.g. `wasm-lock`).

use cosmwasm_std::{Addr, Event, Uint128};

pub const LOCK_EVENT: &str = "lock";
pub const UNLOCK_EVENT: &str = "unlock";
pub const TOKEN_CREATED_EVENT: &str = "token_created";
pub const MINT_ERC20_EVENT: &str = "mint_erc20";
pub const BURN_ERC20_EVENT: &str = "burn_erc20";
pub const TRANSFER_WRAPPED_EVENT: &str = "transfer_wrapped";

pub fn lock(from: &Addr, value: Uint128, dest_address: &str, dest_identifier: u64) -> Event {
    Event::new(LOCK_EVENT)
        .add_attribute("from", from)
        .add_attribute("value", value)
        .add_attribute("dest_address", dest_address)
        .add_attribute("dest_identifier", dest_identifier.to_string())
}

pub fn unlock(to: &Addr, value: Uint128) -> Event {
    Event::new(UNLOCK_EVENT)
        .add_attribute("to", to)
        .add_attribute("value", value)
}

pub fn token_created(
    coin_id: u64,
    token_address: &str,
    name: &str,
    symbol: &str,
    nonce: u64,
) -> Event {
    Event::new(TOKEN_CREATED_EVENT)
        .add_attribute("coin_id", coin_id.to_string())
        .add_attribute("token_address", token_address)
        .add_attribute("name", name)
        .add_attribute("symbol", symbol)
        .add_attribute("nonce", nonce.to_string())
}

pub fn mint_erc20(coin_id: u64, to: &Addr, value: Uint128) -> Event {
    Event::new(MINT_ERC20_EVENT)
        .add_attribute("coin_id", coin_id.to_string())
        .add_attribute("to", to)
        .add_attribute("value", value)
}

pub fn burn_erc20(coin_id: u64, from: &Addr, dest_address: &str, value: Uint128) -> Event {
    Event::new(BURN_ERC20_EVENT)
        .add_attribute("coin_id", coin_id.to_string())
        .add_attribute("from", from)
        .add_attribute("dest_address", dest_address)
        .add_attribute("value", value)
}

pub fn transfer_wrapped(coin_id: u64, from: &Addr, to: &Addr, value: Uint128) -> Event {
    Event::new(TRANSFER_WRAPPED_EVENT)
        .add_attribute("coin_id", coin_id.to_string())
        .add_attribute("from", from)
        .add_attribute("to", to)
        .add_attribute("value", value)
}
