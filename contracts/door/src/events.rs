//! Typed events emitted by the door.
//!
//! Relayers and witnesses follow these; on chain they are prefixed with
//! `wasm-`.

use cosmwasm_std::{Addr, Event, Uint128};

use crate::hash::{bridge_id_to_hex, BridgeId};

pub fn create_bridge_request(token: &Addr, reward: Uint128) -> Event {
    Event::new("create_bridge_request")
        .add_attribute("token", token)
        .add_attribute("reward", reward)
}

pub fn create_claim(bridge_id: &BridgeId, claim_id: u64, creator: &Addr) -> Event {
    Event::new("create_claim")
        .add_attribute("bridge_id", bridge_id_to_hex(bridge_id))
        .add_attribute("claim_id", claim_id.to_string())
        .add_attribute("creator", creator)
}

pub fn commit(
    bridge_id: &BridgeId,
    claim_id: u64,
    sender: &Addr,
    receiver: Option<&str>,
    amount: Uint128,
) -> Event {
    let mut event = Event::new("commit")
        .add_attribute("bridge_id", bridge_id_to_hex(bridge_id))
        .add_attribute("claim_id", claim_id.to_string())
        .add_attribute("sender", sender);
    if let Some(receiver) = receiver {
        event = event.add_attribute("receiver", receiver);
    }
    event.add_attribute("amount", amount)
}

pub fn create_account_commit(
    bridge_id: &BridgeId,
    creator: &Addr,
    destination: &str,
    amount: Uint128,
    reward: Uint128,
    create_count: u64,
) -> Event {
    Event::new("create_account_commit")
        .add_attribute("bridge_id", bridge_id_to_hex(bridge_id))
        .add_attribute("creator", creator)
        .add_attribute("destination", destination)
        .add_attribute("amount", amount)
        .add_attribute("reward", reward)
        .add_attribute("create_count", create_count.to_string())
}

/// What a credit settles: a claim or an account creation.
pub enum CreditSubject<'a> {
    Claim(u64),
    Account(&'a Addr),
}

pub fn credit(
    bridge_id: &BridgeId,
    subject: CreditSubject,
    receiver: &Addr,
    amount: Uint128,
) -> Event {
    let event = Event::new("credit").add_attribute("bridge_id", bridge_id_to_hex(bridge_id));
    let event = match subject {
        CreditSubject::Claim(claim_id) => event.add_attribute("claim_id", claim_id.to_string()),
        CreditSubject::Account(destination) => event.add_attribute("destination", destination),
    };
    event
        .add_attribute("receiver", receiver)
        .add_attribute("amount", amount)
}

pub fn claim(
    bridge_id: &BridgeId,
    claim_id: u64,
    sender: &str,
    destination: &Addr,
    amount: Uint128,
) -> Event {
    Event::new("claim")
        .add_attribute("bridge_id", bridge_id_to_hex(bridge_id))
        .add_attribute("claim_id", claim_id.to_string())
        .add_attribute("sender", sender)
        .add_attribute("destination", destination)
        .add_attribute("amount", amount)
}

pub fn create_account(
    bridge_id: &BridgeId,
    destination: &Addr,
    nonce: u64,
    amount: Uint128,
) -> Event {
    Event::new("create_account")
        .add_attribute("bridge_id", bridge_id_to_hex(bridge_id))
        .add_attribute("destination", destination)
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("amount", amount)
}
