//! State definitions for the wrapping bridge contract
//!
//! The coordinator owns the configuration, the oracle set, the escrow ledger
//! and the token registry. Wrapped-token ledgers live in [`crate::token`].

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Governance address allowed to manage the oracle set
    pub admin: Addr,
    /// Denom of the native asset escrowed by `Lock`
    pub native_denom: String,
}

/// Registry entry mapping an external coin id to its wrapped token
#[cw_serde]
pub struct AssetRecord {
    pub coin_id: u64,
    /// Derived token address (0x-prefixed hex)
    pub token_address: String,
    pub name: String,
    pub symbol: String,
}

/// Unlock waiting on the outcome of its bank transfer
#[cw_serde]
pub struct PendingUnlock {
    pub recipient: Addr,
    pub amount: Uint128,
    /// Escrow balance before the debit, restored if the transfer fails
    pub escrow_before: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:wrapping-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// First deployment nonce, mirroring a freshly created EVM contract account
pub const INITIAL_DEPLOY_NONCE: u64 = 1;

/// Reply id for the unlock bank transfer
pub const UNLOCK_REPLY_ID: u64 = 1;

// ============================================================================
// Core State Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Authorized oracles
/// Key: oracle address, Value: whether active
pub const ORACLES: Map<&Addr, bool> = Map::new("oracles");

/// Number of active oracles
pub const ORACLE_COUNT: Item<u32> = Item::new("oracle_count");

/// Native value currently held in escrow
pub const ESCROW_BALANCE: Item<Uint128> = Item::new("escrow_balance");

/// In-flight unlock (present only between execute and reply)
pub const PENDING_UNLOCK: Item<PendingUnlock> = Item::new("pending_unlock");

/// Token registry
/// Key: coin id, Value: AssetRecord
pub const ASSETS: Map<u64, AssetRecord> = Map::new("assets");

/// Deployment sequence number used for the next token address
pub const DEPLOY_NONCE: Item<u64> = Item::new("deploy_nonce");
