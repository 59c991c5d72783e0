//! Query handlers for the XChain door contract.

use cosmwasm_std::{Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::bridge::XChainBridge;
use crate::hash::{bridge_id_to_hex, compute_bridge_id, hex_to_bridge_id, BridgeId};
use crate::msg::{
    AccountCreatedResponse, BridgeIdResponse, BridgeResponse, BridgesResponse, ClaimResponse,
    ClaimsResponse, ConfigResponse, CreateAccountRequestResponse, NextClaimIdResponse,
};
use crate::state::{
    BridgeRecord, Claim, BRIDGES, CLAIMS, CLAIM_COUNTERS, CONFIG, CREATED_ACCOUNTS,
    CREATE_REQUESTS,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        governor: config.governor,
        paused: config.paused,
        native_denom: config.native_denom,
        native_issuing_door: config.native_issuing_door,
        wrapped_token_code_id: config.wrapped_token_code_id,
        min_create_bridge_reward: config.min_create_bridge_reward,
    })
}

pub fn query_bridge_id(bridge: XChainBridge) -> StdResult<BridgeIdResponse> {
    Ok(BridgeIdResponse {
        bridge_id: bridge_id_to_hex(&compute_bridge_id(&bridge)),
    })
}

pub fn query_bridge(deps: Deps, bridge: XChainBridge) -> StdResult<BridgeResponse> {
    let (bridge_id, record) = load_record(deps, &bridge)?;
    Ok(bridge_response(&bridge_id, record))
}

pub fn query_bridges(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<BridgesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_id = start_after
        .map(|s| hex_to_bridge_id(&s).map_err(StdError::generic_err))
        .transpose()?;
    let start = start_id.as_ref().map(|id| Bound::exclusive(id.as_slice()));

    let bridges = BRIDGES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (key, record) = item?;
            let bridge_id: BridgeId = key
                .try_into()
                .map_err(|_| StdError::generic_err("corrupt bridge id key"))?;
            Ok(bridge_response(&bridge_id, record))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(BridgesResponse { bridges })
}

pub fn query_claim(deps: Deps, bridge: XChainBridge, claim_id: u64) -> StdResult<ClaimResponse> {
    let (bridge_id, _) = load_record(deps, &bridge)?;
    let claim = CLAIMS.load(deps.storage, (bridge_id.as_slice(), claim_id))?;
    Ok(claim_response(claim))
}

pub fn query_claims(
    deps: Deps,
    bridge: XChainBridge,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ClaimsResponse> {
    let (bridge_id, _) = load_record(deps, &bridge)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let claims = CLAIMS
        .prefix(bridge_id.as_slice())
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, claim)| claim_response(claim)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ClaimsResponse { claims })
}

pub fn query_next_claim_id(deps: Deps, bridge: XChainBridge) -> StdResult<NextClaimIdResponse> {
    let (bridge_id, _) = load_record(deps, &bridge)?;
    let last = CLAIM_COUNTERS
        .may_load(deps.storage, bridge_id.as_slice())?
        .unwrap_or(0);
    Ok(NextClaimIdResponse {
        next_claim_id: last + 1,
    })
}

pub fn query_create_account_request(
    deps: Deps,
    bridge: XChainBridge,
    destination: String,
) -> StdResult<CreateAccountRequestResponse> {
    let (bridge_id, _) = load_record(deps, &bridge)?;
    let destination = deps.api.addr_validate(&destination)?;
    let request = CREATE_REQUESTS.load(deps.storage, (bridge_id.as_slice(), &destination))?;
    Ok(CreateAccountRequestResponse {
        destination,
        reward: request.reward,
        attestations: request.tally.votes,
    })
}

pub fn query_account_created(
    deps: Deps,
    bridge: XChainBridge,
    destination: String,
) -> StdResult<AccountCreatedResponse> {
    let (bridge_id, _) = load_record(deps, &bridge)?;
    let destination = deps.api.addr_validate(&destination)?;
    let nonce = CREATED_ACCOUNTS.may_load(deps.storage, (bridge_id.as_slice(), &destination))?;
    Ok(AccountCreatedResponse {
        created: nonce.is_some(),
        nonce,
    })
}

fn load_record(deps: Deps, bridge: &XChainBridge) -> StdResult<(BridgeId, BridgeRecord)> {
    let bridge_id = compute_bridge_id(bridge);
    let record = BRIDGES
        .may_load(deps.storage, bridge_id.as_slice())?
        .ok_or_else(|| StdError::not_found("bridge"))?;
    Ok((bridge_id, record))
}

fn bridge_response(bridge_id: &BridgeId, record: BridgeRecord) -> BridgeResponse {
    BridgeResponse {
        bridge_id: bridge_id_to_hex(bridge_id),
        bridge: record.bridge,
        kind: record.kind,
        params: record.params,
        asset: record.asset,
    }
}

fn claim_response(claim: Claim) -> ClaimResponse {
    ClaimResponse {
        claim_id: claim.claim_id,
        creator: claim.creator,
        expected_sender: claim.expected_sender,
        reward: claim.reward,
        status: claim.status,
        attestations: claim.tally.votes,
    }
}
