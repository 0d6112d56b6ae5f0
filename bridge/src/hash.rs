//! Deterministic wrapped-token address derivation
//!
//! Token addresses follow the EVM `CREATE` rule so that any off-chain party can
//! compute the address of the next wrapped token before the creating
//! transaction is observed:
//!
//! ```text
//! address = keccak256(rlp([deployer, nonce]))[12..32]
//! ```
//!
//! # RLP Layout
//! - byte string, 1 byte < 0x80:   the byte itself
//! - byte string, len <= 55:       0x80 + len, bytes
//! - byte string, len > 55:        0xb7 + len_of_len, len (big-endian), bytes
//! - list, payload <= 55:          0xc0 + len, payload
//! - list, payload > 55:           0xf7 + len_of_len, len (big-endian), payload
//!
//! The nonce is a scalar: its minimal big-endian byte string, so `0` is the
//! empty string `0x80`.

use tiny_keccak::{Hasher, Keccak};

/// Length of a derived token address in bytes
pub const ADDRESS_LENGTH: usize = 20;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Derive the address of the token deployed by `deployer` at `nonce`.
///
/// `deployer` is the canonical byte form of the coordinator's address. For a
/// 20-byte deployer this matches the address Ethereum assigns to a contract
/// created with `CREATE` from the same account and nonce.
pub fn derive_address(deployer: &[u8], nonce: u64) -> [u8; ADDRESS_LENGTH] {
    let mut payload = rlp_encode_bytes(deployer);
    payload.extend_from_slice(&rlp_encode_u64(nonce));

    let digest = keccak256(&rlp_encode_list(&payload));

    let mut address = [0u8; ADDRESS_LENGTH];
    address.copy_from_slice(&digest[32 - ADDRESS_LENGTH..]);
    address
}

/// Render a token address as `0x`-prefixed lowercase hex
pub fn address_to_hex(address: &[u8; ADDRESS_LENGTH]) -> String {
    format!("0x{}", hex::encode(address))
}

/// Parse hex string (with or without 0x prefix) to a 20-byte address
pub fn hex_to_address(hex_str: &str) -> Result<[u8; ADDRESS_LENGTH], &'static str> {
    let hex_str = hex_str
        .strip_prefix("0x")
        .or_else(|| hex_str.strip_prefix("0X"))
        .unwrap_or(hex_str);
    if hex_str.len() != ADDRESS_LENGTH * 2 {
        return Err("Invalid hex length: expected 40 characters");
    }

    let mut result = [0u8; ADDRESS_LENGTH];
    hex::decode_to_slice(hex_str, &mut result).map_err(|_| "Invalid hex character")?;
    Ok(result)
}

// ============================================================================
// RLP helpers
// ============================================================================

fn rlp_encode_bytes(bytes: &[u8]) -> Vec<u8> {
    if bytes.len() == 1 && bytes[0] < 0x80 {
        return vec![bytes[0]];
    }

    let mut out = rlp_length_prefix(0x80, bytes.len());
    out.extend_from_slice(bytes);
    out
}

fn rlp_encode_u64(value: u64) -> Vec<u8> {
    let be = value.to_be_bytes();
    let first_non_zero = be.iter().position(|b| *b != 0).unwrap_or(be.len());
    rlp_encode_bytes(&be[first_non_zero..])
}

fn rlp_encode_list(payload: &[u8]) -> Vec<u8> {
    let mut out = rlp_length_prefix(0xc0, payload.len());
    out.extend_from_slice(payload);
    out
}

/// Short form `offset + len`, long form `offset + 55 + len_of_len` followed by
/// the big-endian length.
fn rlp_length_prefix(offset: u8, len: usize) -> Vec<u8> {
    if len <= 55 {
        return vec![offset + len as u8];
    }

    let be = (len as u64).to_be_bytes();
    let first_non_zero = be.iter().position(|b| *b != 0).unwrap_or(be.len() - 1);
    let len_bytes = &be[first_non_zero..];

    let mut out = Vec::with_capacity(1 + len_bytes.len());
    out.push(offset + 55 + len_bytes.len() as u8);
    out.extend_from_slice(len_bytes);
    out
}
