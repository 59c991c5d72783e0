//! Claim ledger handlers.
//!
//! A claim is reserved on the receiving chain before the sender commits on
//! the sending chain. Witnesses then attest the commit here; the first
//! `(amount, destination)` tuple to gather a quorum of matching votes wins.

use cosmwasm_std::{
    from_json, to_json_binary, Addr, DepsMut, MessageInfo, Response, Storage, Uint128,
};
use cw20::Cw20ReceiveMsg;

use crate::authority::{Governor, WitnessAuthority};
use crate::bridge::{BridgeKind, XChainBridge};
use crate::error::ContractError;
use crate::events::{self, CreditSubject};
use crate::hash::{bridge_id_to_hex, BridgeId};
use crate::msg::ReceiveMsg;
use crate::state::{
    load_active_config, load_bridge, BridgeRecord, Claim, ClaimStatus, ClaimVote, Config,
    CLAIMS, CLAIM_COUNTERS,
};
use crate::tally::{Tally, TallyOutcome};
use crate::token::{escrow_cw20, escrow_native};

use super::native_sent;
use super::settle::settlement_msgs;

// ============================================================================
// Claim Ids
// ============================================================================

/// Reserve the next claim id. The attached native funds are the reward.
pub fn execute_create_claim_id(
    deps: DepsMut,
    info: MessageInfo,
    bridge: XChainBridge,
    expected_sender: String,
) -> Result<Response, ContractError> {
    let config = load_active_config(deps.storage)?;
    let (bridge_id, record) = load_bridge(deps.storage, &bridge)?;

    let reward = native_sent(&info, &config.native_denom);
    if reward < record.params.signature_reward {
        return Err(ContractError::InsufficientSignatureReward {
            required: record.params.signature_reward,
            got: reward,
        });
    }

    let claim_id = CLAIM_COUNTERS
        .may_load(deps.storage, bridge_id.as_slice())?
        .unwrap_or(0)
        + 1;
    CLAIM_COUNTERS.save(deps.storage, bridge_id.as_slice(), &claim_id)?;

    CLAIMS.save(
        deps.storage,
        (bridge_id.as_slice(), claim_id),
        &Claim {
            claim_id,
            creator: info.sender.clone(),
            expected_sender,
            reward,
            status: ClaimStatus::Pending,
            tally: Tally::new(),
        },
    )?;

    Ok(Response::new()
        .add_messages(escrow_native(&config.governor, &config.native_denom, reward))
        .add_event(events::create_claim(&bridge_id, claim_id, &info.sender))
        .set_data(to_json_binary(&claim_id)?)
        .add_attribute("action", "create_claim_id")
        .add_attribute("bridge_id", bridge_id_to_hex(&bridge_id))
        .add_attribute("claim_id", claim_id.to_string()))
}

// ============================================================================
// Commits
// ============================================================================

/// Commit native value on a native bridge.
pub fn execute_commit(
    deps: DepsMut,
    info: MessageInfo,
    bridge: XChainBridge,
    receiver: Option<String>,
    claim_id: u64,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = load_active_config(deps.storage)?;
    let (bridge_id, record) = load_bridge(deps.storage, &bridge)?;

    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    if record.kind != BridgeKind::Native {
        return Err(ContractError::WrongAsset {
            expected: record.asset.to_string(),
            got: config.native_denom,
        });
    }

    let sent = native_sent(&info, &config.native_denom);
    if sent != amount {
        return Err(ContractError::InsufficientAmountSent {
            expected: amount,
            got: sent,
        });
    }

    Ok(Response::new()
        .add_messages(escrow_native(&config.governor, &config.native_denom, sent))
        .add_event(events::commit(
            &bridge_id,
            claim_id,
            &info.sender,
            receiver.as_deref(),
            amount,
        ))
        .add_attribute("action", "commit")
        .add_attribute("claim_id", claim_id.to_string())
        .add_attribute("amount", amount))
}

/// CW20 receive hook: token commits on token bridges.
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = load_active_config(deps.storage)?;
    let token = info.sender;
    let sender = deps.api.addr_validate(&cw20_msg.sender)?;
    let amount = cw20_msg.amount;

    let (bridge, receiver, claim_id) = match from_json::<ReceiveMsg>(&cw20_msg.msg)? {
        ReceiveMsg::Commit {
            bridge,
            receiver,
            claim_id,
        } => (bridge, Some(receiver), claim_id),
        ReceiveMsg::CommitWithoutAddress { bridge, claim_id } => (bridge, None, claim_id),
    };
    let (bridge_id, record) = load_bridge(deps.storage, &bridge)?;

    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    if record.asset.cw20_addr() != Some(&token) {
        return Err(ContractError::WrongAsset {
            expected: record.asset.to_string(),
            got: token.to_string(),
        });
    }

    let escrow = escrow_cw20(&record.kind, &token, &config.governor, amount)?;

    Ok(Response::new()
        .add_message(escrow)
        .add_event(events::commit(
            &bridge_id,
            claim_id,
            &sender,
            receiver.as_deref(),
            amount,
        ))
        .add_attribute("action", "commit")
        .add_attribute("claim_id", claim_id.to_string())
        .add_attribute("token", token)
        .add_attribute("amount", amount))
}

// ============================================================================
// Attestations & Settlement
// ============================================================================

/// Record a witness vote on a claim; settles or decides it on quorum.
pub fn execute_add_claim_attestation(
    deps: DepsMut,
    info: MessageInfo,
    bridge: XChainBridge,
    claim_id: u64,
    amount: Uint128,
    sender: String,
    destination: Option<String>,
) -> Result<Response, ContractError> {
    let config = load_active_config(deps.storage)?;
    let authority = Governor::new(deps.querier, &config.governor);
    authority.ensure_witness(&info.sender)?;

    let (bridge_id, record) = load_bridge(deps.storage, &bridge)?;
    let mut claim = CLAIMS
        .may_load(deps.storage, (bridge_id.as_slice(), claim_id))?
        .ok_or(ContractError::ClaimNotFound { claim_id })?;
    if claim.expected_sender != sender {
        return Err(ContractError::SenderMismatch {
            expected: claim.expected_sender,
            got: sender,
        });
    }
    let destination = destination
        .map(|d| deps.api.addr_validate(&d))
        .transpose()?;

    claim.tally.prune(|witness| authority.is_witness(witness))?;
    let threshold = authority.threshold()?;
    let vote = ClaimVote {
        amount,
        destination,
    };

    let response = Response::new()
        .add_attribute("action", "add_claim_attestation")
        .add_attribute("bridge_id", bridge_id_to_hex(&bridge_id))
        .add_attribute("claim_id", claim_id.to_string())
        .add_attribute("witness", info.sender.as_str());

    match claim.tally.record(info.sender, vote, threshold) {
        TallyOutcome::Pending { matching } => {
            CLAIMS.save(deps.storage, (bridge_id.as_slice(), claim_id), &claim)?;
            Ok(response.add_attribute("matching", matching.to_string()))
        }
        TallyOutcome::Decided { value, witnesses } if claim.status.conflicts(value.amount) => {
            // The decided amount is final; a competing quorum only records votes
            CLAIMS.save(deps.storage, (bridge_id.as_slice(), claim_id), &claim)?;
            Ok(response.add_attribute("matching", witnesses.len().to_string()))
        }
        TallyOutcome::Decided { value, witnesses } => match value.destination {
            None => {
                claim.status = ClaimStatus::Decided {
                    amount: value.amount,
                };
                CLAIMS.save(deps.storage, (bridge_id.as_slice(), claim_id), &claim)?;
                Ok(response
                    .add_attribute("status", "decided")
                    .add_attribute("amount", value.amount))
            }
            Some(destination) => {
                let settled = settle_claim(
                    deps.storage,
                    &config,
                    &bridge_id,
                    &record,
                    claim,
                    &destination,
                    value.amount,
                    &witnesses,
                )?;
                Ok(response
                    .add_attribute("status", "settled")
                    .add_submessages(settled.messages)
                    .add_events(settled.events))
            }
        },
    }
}

/// Settle a decided claim to `receiver` (claim creator only).
pub fn execute_claim(
    deps: DepsMut,
    info: MessageInfo,
    bridge: XChainBridge,
    claim_id: u64,
    amount: Uint128,
    receiver: String,
) -> Result<Response, ContractError> {
    let config = load_active_config(deps.storage)?;
    let (bridge_id, record) = load_bridge(deps.storage, &bridge)?;

    let mut claim = CLAIMS
        .may_load(deps.storage, (bridge_id.as_slice(), claim_id))?
        .ok_or(ContractError::ClaimNotFound { claim_id })?;
    if claim.creator != info.sender {
        return Err(ContractError::NotClaimCreator);
    }

    let decided = match claim.status {
        ClaimStatus::Decided { amount } => amount,
        ClaimStatus::Pending => return Err(ContractError::ClaimNotDecided { claim_id }),
    };
    if amount != decided {
        return Err(ContractError::AmountMismatch {
            expected: decided,
            got: amount,
        });
    }
    let receiver = deps.api.addr_validate(&receiver)?;

    let authority = Governor::new(deps.querier, &config.governor);
    claim.tally.prune(|witness| authority.is_witness(witness))?;
    let witnesses = claim.tally.matching(&ClaimVote {
        amount: decided,
        destination: None,
    });

    let settled = settle_claim(
        deps.storage,
        &config,
        &bridge_id,
        &record,
        claim,
        &receiver,
        decided,
        &witnesses,
    )?;
    Ok(Response::new()
        .add_submessages(settled.messages)
        .add_events(settled.events)
        .add_attribute("action", "claim")
        .add_attribute("bridge_id", bridge_id_to_hex(&bridge_id))
        .add_attribute("claim_id", claim_id.to_string())
        .add_attribute("receiver", receiver)
        .add_attribute("amount", amount))
}

#[allow(clippy::too_many_arguments)]
fn settle_claim(
    storage: &mut dyn Storage,
    config: &Config,
    bridge_id: &BridgeId,
    record: &BridgeRecord,
    claim: Claim,
    receiver: &Addr,
    amount: Uint128,
    witnesses: &[Addr],
) -> Result<Response, ContractError> {
    CLAIMS.remove(storage, (bridge_id.as_slice(), claim.claim_id));

    let msgs = settlement_msgs(config, record, receiver, amount, claim.reward, witnesses)?;

    Ok(Response::new()
        .add_messages(msgs)
        .add_event(events::credit(
            bridge_id,
            CreditSubject::Claim(claim.claim_id),
            receiver,
            amount,
        ))
        .add_event(events::claim(
            bridge_id,
            claim.claim_id,
            &claim.expected_sender,
            receiver,
            amount,
        )))
}
