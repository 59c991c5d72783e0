//! Execute handlers for the XChain door contract.
//!
//! - `registry` - CreateBridge, CreateBridgeRequest and the wrapped token reply
//! - `claim` - Claim ids, commits, claim attestations and Claim
//! - `account` - Account creation commits and attestations
//! - `admin` - Pause, unpause and the governor escape hatch

mod account;
mod admin;
mod claim;
mod registry;
mod settle;

pub use account::*;
pub use admin::*;
pub use claim::*;
pub use registry::*;

use cosmwasm_std::{MessageInfo, Uint128};

/// Native funds of `denom` attached to the call
fn native_sent(info: &MessageInfo, denom: &str) -> Uint128 {
    info.funds
        .iter()
        .filter(|coin| coin.denom == denom)
        .map(|coin| coin.amount)
        .sum()
}
