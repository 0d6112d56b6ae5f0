//! Message types for the wrapping bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::AssetRecord;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Governance address allowed to manage the oracle set
    pub admin: String,
    /// Initial oracle addresses (at least one)
    pub oracles: Vec<String>,
    /// Denom of the escrowed native asset (e.g. "uluna")
    pub native_denom: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Native Escrow
    // ========================================================================
    /// Escrow the native funds sent with this message
    ///
    /// Authorization: Anyone
    Lock {
        /// Recipient on the destination chain
        dest_address: String,
        /// Destination chain id or remote coin id
        dest_identifier: u64,
    },

    /// Release escrowed native value
    ///
    /// Authorization: Oracle
    Unlock { dest_address: String, value: Uint128 },

    // ========================================================================
    // Wrapped Tokens
    // ========================================================================
    /// Deploy the wrapped token for a remote coin id
    ///
    /// Authorization: Oracle
    CreateToken {
        name: String,
        symbol: String,
        coin_id: u64,
    },

    /// Mint wrapped tokens for value locked on the remote chain
    ///
    /// Authorization: Oracle
    MintErc20 {
        coin_id: u64,
        to: String,
        value: Uint128,
    },

    /// Burn wrapped tokens being returned to the remote chain
    ///
    /// Authorization: Oracle
    BurnErc20 {
        coin_id: u64,
        from: String,
        /// Recipient on the remote chain, passed through to the event
        dest_address: String,
        value: Uint128,
    },

    /// Move the sender's wrapped tokens to another holder
    ///
    /// Authorization: Anyone (holder)
    TransferWrapped {
        coin_id: u64,
        recipient: String,
        amount: Uint128,
    },

    // ========================================================================
    // Governance
    // ========================================================================
    /// Authorization: Admin
    AddOracle { oracle: String },

    /// Authorization: Admin
    RemoveOracle { oracle: String },

    /// Authorization: Admin
    UpdateAdmin { admin: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(IsOracleResponse)]
    IsOracle { address: String },

    #[returns(OraclesResponse)]
    Oracles {},

    #[returns(EscrowBalanceResponse)]
    EscrowBalance {},

    /// Registry entry for a coin id, `None` if not registered
    #[returns(Option<AssetRecord>)]
    AssetRecord { coin_id: u64 },

    /// Registry entry owning a derived token address, `None` if unknown
    #[returns(Option<AssetRecord>)]
    AssetByTokenAddress { token_address: String },

    #[returns(AssetRecordsResponse)]
    AssetRecords {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Nonce the next `CreateToken` will deploy at
    #[returns(DeploymentNonceResponse)]
    DeploymentNonce {},

    /// Address a token will receive at `nonce` (defaults to the current nonce)
    #[returns(PredictTokenAddressResponse)]
    PredictTokenAddress { nonce: Option<u64> },

    #[returns(cw20::BalanceResponse)]
    WrappedBalance { coin_id: u64, address: String },

    #[returns(cw20::TokenInfoResponse)]
    WrappedTokenInfo { coin_id: u64 },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub native_denom: String,
    pub oracle_count: u32,
}

#[cw_serde]
pub struct IsOracleResponse {
    pub is_oracle: bool,
}

#[cw_serde]
pub struct OraclesResponse {
    pub oracles: Vec<Addr>,
}

#[cw_serde]
pub struct EscrowBalanceResponse {
    pub denom: String,
    pub balance: Uint128,
}

#[cw_serde]
pub struct AssetRecordsResponse {
    pub assets: Vec<AssetRecord>,
}

#[cw_serde]
pub struct DeploymentNonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct PredictTokenAddressResponse {
    pub nonce: u64,
    pub token_address: String,
}
