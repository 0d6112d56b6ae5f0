//! Wrapping Bridge Contract - Native Escrow and Wrapped Token Registry
//!
//! This contract escrows a native asset for transfer to other chains and
//! represents assets from other chains as wrapped tokens minted here.
//!
//! # Outgoing Flow (Lock)
//! 1. User calls `Lock` with native funds attached
//! 2. Escrow balance grows and a `lock` event is emitted
//! 3. Oracles observe the event and release value on the destination chain
//!
//! # Incoming Flow (Unlock)
//! 1. An oracle calls `Unlock` after attesting a remote deposit
//! 2. Escrow is debited and the bank transfer dispatched
//! 3. The transfer reply commits (`unlock` event) or restores the escrow
//!
//! # Wrapped Assets
//! - `CreateToken` deploys one token per remote coin id at an address derived
//!   from the contract's canonical address and its public deployment nonce
//! - `MintErc20` / `BurnErc20` change supply, oracle only
//!
//! # Security
//! - Every privileged call checks the oracle set before touching state
//! - A coin id can be registered once; duplicates fail instead of overwriting
//! - Escrow and supply arithmetic is checked, never wrapping

pub mod access;
pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod hash;
pub mod msg;
mod query;
pub mod registry;
pub mod state;
pub mod token;

pub use crate::error::ContractError;
pub use crate::hash::{derive_address, keccak256};
