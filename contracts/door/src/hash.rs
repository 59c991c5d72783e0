//! Bridge id computation
//!
//! A bridge id is the keccak256 hash of a canonical byte encoding of its
//! configuration, so it does not depend on JSON field order or whitespace.
//!
//! # Byte Layout
//! Each string is written as a 4-byte big-endian length followed by its
//! UTF-8 bytes. Each issuer is prefixed by a marker byte:
//! - `0x00` native (no issuer bytes follow)
//! - `0x01` issued (length-prefixed issuer follows)
//!
//! Field order: locking door, locking issuer, locking currency, issuing
//! door, issuing issuer, issuing currency.

use tiny_keccak::{Hasher, Keccak};

use crate::bridge::{Issue, XChainBridge};

/// 32-byte bridge identifier
pub type BridgeId = [u8; 32];

const NATIVE_MARKER: u8 = 0x00;
const ISSUED_MARKER: u8 = 0x01;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the stable id of a bridge configuration.
pub fn compute_bridge_id(bridge: &XChainBridge) -> BridgeId {
    let mut data = Vec::with_capacity(256);
    write_str(&mut data, &bridge.locking_door);
    write_issue(&mut data, &bridge.locking_issue);
    write_str(&mut data, &bridge.issuing_door);
    write_issue(&mut data, &bridge.issuing_issue);
    keccak256(&data)
}

/// Render a bridge id as 0x-prefixed hex (for attributes and queries)
pub fn bridge_id_to_hex(id: &BridgeId) -> String {
    format!("0x{}", hex::encode(id))
}

/// Parse a 0x-prefixed (or bare) hex bridge id
pub fn hex_to_bridge_id(s: &str) -> Result<BridgeId, &'static str> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s).map_err(|_| "Invalid hex character")?;
    bytes
        .try_into()
        .map_err(|_| "Invalid hex length: expected 64 characters")
}

fn write_str(data: &mut Vec<u8>, s: &str) {
    data.extend_from_slice(&(s.len() as u32).to_be_bytes());
    data.extend_from_slice(s.as_bytes());
}

fn write_issue(data: &mut Vec<u8>, issue: &Issue) {
    match &issue.issuer {
        None => data.push(NATIVE_MARKER),
        Some(issuer) => {
            data.push(ISSUED_MARKER);
            write_str(data, issuer);
        }
    }
    write_str(data, &issue.currency);
}
