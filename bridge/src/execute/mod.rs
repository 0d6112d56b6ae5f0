//! Execute handlers for the wrapping bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `escrow` - Lock, Unlock and the unlock transfer reply
//! - `wrapped` - CreateToken, MintErc20, BurnErc20, TransferWrapped
//! - `admin` - Oracle set management and admin hand-over

mod admin;
mod escrow;
mod wrapped;

pub use admin::*;
pub use escrow::*;
pub use wrapped::*;
