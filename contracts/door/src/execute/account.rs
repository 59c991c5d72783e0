//! Account creation handlers (native bridges only).
//!
//! The committing door hands out a sequential create count per bridge.
//! Witnesses relay it as the attestation nonce. The receiving door credits
//! each destination at most once, with the first `(amount, nonce)` pair to
//! gather a quorum of matching votes.

use cosmwasm_std::{DepsMut, MessageInfo, Response, StdError, Uint128};

use crate::authority::{Governor, WitnessAuthority};
use crate::bridge::{BridgeKind, XChainBridge};
use crate::error::ContractError;
use crate::events::{self, CreditSubject};
use crate::hash::bridge_id_to_hex;
use crate::state::{
    load_active_config, load_bridge, AccountCreateRequest, AccountVote, CREATED_ACCOUNTS,
    CREATE_COUNTERS, CREATE_REQUESTS,
};
use crate::tally::{Tally, TallyOutcome};
use crate::token::escrow_native;

use super::native_sent;
use super::settle::settlement_msgs;

/// Escrow value for an account to be created on the other chain.
pub fn execute_create_account_commit(
    deps: DepsMut,
    info: MessageInfo,
    bridge: XChainBridge,
    destination: String,
    amount: Uint128,
    reward: Uint128,
) -> Result<Response, ContractError> {
    let config = load_active_config(deps.storage)?;
    let (bridge_id, record) = load_bridge(deps.storage, &bridge)?;

    if record.kind != BridgeKind::Native {
        return Err(ContractError::CreateAccountOnTokenBridge);
    }
    if amount < record.params.min_create_amount {
        return Err(ContractError::InsufficientCreateAmount {
            required: record.params.min_create_amount,
            got: amount,
        });
    }
    if reward < record.params.signature_reward {
        return Err(ContractError::InsufficientSignatureReward {
            required: record.params.signature_reward,
            got: reward,
        });
    }

    let required = amount.checked_add(reward).map_err(StdError::from)?;
    let sent = native_sent(&info, &config.native_denom);
    if sent < required {
        return Err(ContractError::InsufficientAmountSent {
            expected: required,
            got: sent,
        });
    }

    let create_count = CREATE_COUNTERS
        .may_load(deps.storage, bridge_id.as_slice())?
        .unwrap_or(0)
        + 1;
    CREATE_COUNTERS.save(deps.storage, bridge_id.as_slice(), &create_count)?;

    Ok(Response::new()
        .add_messages(escrow_native(&config.governor, &config.native_denom, sent))
        .add_event(events::create_account_commit(
            &bridge_id,
            &info.sender,
            &destination,
            amount,
            reward,
            create_count,
        ))
        .add_attribute("action", "create_account_commit")
        .add_attribute("bridge_id", bridge_id_to_hex(&bridge_id))
        .add_attribute("create_count", create_count.to_string()))
}

/// Record a witness vote on an account creation; creates it on quorum.
pub fn execute_add_create_account_attestation(
    deps: DepsMut,
    info: MessageInfo,
    bridge: XChainBridge,
    destination: String,
    amount: Uint128,
    nonce: u64,
) -> Result<Response, ContractError> {
    let config = load_active_config(deps.storage)?;
    let authority = Governor::new(deps.querier, &config.governor);
    authority.ensure_witness(&info.sender)?;

    let (bridge_id, record) = load_bridge(deps.storage, &bridge)?;
    if record.kind != BridgeKind::Native {
        return Err(ContractError::CreateAccountOnTokenBridge);
    }
    if amount < record.params.min_create_amount {
        return Err(ContractError::InsufficientCreateAmount {
            required: record.params.min_create_amount,
            got: amount,
        });
    }

    let destination = deps.api.addr_validate(&destination)?;
    let key = (bridge_id.as_slice(), &destination);
    if CREATED_ACCOUNTS.has(deps.storage, key) {
        return Err(ContractError::AlreadyCreated {
            destination: destination.to_string(),
        });
    }

    let mut request = CREATE_REQUESTS
        .may_load(deps.storage, key)?
        .unwrap_or_else(|| AccountCreateRequest {
            reward: record.params.signature_reward,
            tally: Tally::new(),
        });

    request.tally.prune(|witness| authority.is_witness(witness))?;
    let threshold = authority.threshold()?;

    let response = Response::new()
        .add_attribute("action", "add_create_account_attestation")
        .add_attribute("bridge_id", bridge_id_to_hex(&bridge_id))
        .add_attribute("destination", destination.as_str())
        .add_attribute("witness", info.sender.as_str());

    let vote = AccountVote { amount, nonce };
    match request.tally.record(info.sender, vote, threshold) {
        TallyOutcome::Pending { matching } => {
            CREATE_REQUESTS.save(deps.storage, key, &request)?;
            Ok(response.add_attribute("matching", matching.to_string()))
        }
        TallyOutcome::Decided { value, witnesses } => {
            CREATE_REQUESTS.remove(deps.storage, key);
            CREATED_ACCOUNTS.save(deps.storage, key, &value.nonce)?;

            let msgs = settlement_msgs(
                &config,
                &record,
                &destination,
                value.amount,
                request.reward,
                &witnesses,
            )?;
            Ok(response
                .add_attribute("status", "created")
                .add_messages(msgs)
                .add_event(events::credit(
                    &bridge_id,
                    CreditSubject::Account(&destination),
                    &destination,
                    value.amount,
                ))
                .add_event(events::create_account(
                    &bridge_id,
                    &destination,
                    value.nonce,
                    value.amount,
                )))
        }
    }
}
