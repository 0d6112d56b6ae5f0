//! Error types for the wrapping bridge contract
//!
//! Every failure aborts the triggering call as a whole; no variant leaves
//! partial state behind.

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller is not an oracle")]
    Unauthorized,

    #[error("Unauthorized: only admin can perform this action")]
    UnauthorizedAdmin,

    #[error("Unauthorized: only the token minter can mint or burn")]
    NotMinter,

    // ========================================================================
    // Oracle Set Errors
    // ========================================================================

    #[error("Oracle already registered")]
    OracleAlreadyRegistered,

    #[error("Oracle not registered")]
    OracleNotRegistered,

    #[error("Cannot remove last oracle")]
    CannotRemoveLastOracle,

    #[error("At least one oracle required")]
    NoOracles,

    // ========================================================================
    // Escrow Errors
    // ========================================================================

    #[error("Insufficient escrow: available {available}, requested {requested}")]
    InsufficientEscrow {
        available: Uint128,
        requested: Uint128,
    },

    #[error("Native transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("Invalid funds: only {denom} is accepted")]
    InvalidFunds { denom: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid recipient: {address}")]
    InvalidRecipient { address: String },

    #[error("Unlock already in flight")]
    UnlockInFlight,

    #[error("Unknown reply id: {id}")]
    UnknownReply { id: u64 },

    // ========================================================================
    // Token Registry Errors
    // ========================================================================

    #[error("Token already exists for coin id {coin_id}")]
    TokenAlreadyExists { coin_id: u64 },

    #[error("Unknown asset: no token registered for coin id {coin_id}")]
    UnknownAsset { coin_id: u64 },

    #[error("Derived token address already in use: {address}")]
    TokenAddressTaken { address: String },

    #[error("Invalid token metadata: {reason}")]
    InvalidTokenMetadata { reason: String },

    // ========================================================================
    // Wrapped Token Errors
    // ========================================================================

    #[error("Insufficient balance: balance {balance}, required {required}")]
    InsufficientBalance { balance: Uint128, required: Uint128 },
}
