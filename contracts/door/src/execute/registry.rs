//! Bridge registry handlers.

use cosmwasm_std::{Addr, DepsMut, Env, MessageInfo, Reply, Response, StdError, Storage};

use common::AssetInfo;

use crate::authority::{Governor, WitnessAuthority};
use crate::bridge::{classify, BridgeKind, BridgeParams, ConfigViolation, XChainBridge};
use crate::error::ContractError;
use crate::events;
use crate::hash::{bridge_id_to_hex, compute_bridge_id, BridgeId};
use crate::state::{
    load_active_config, BridgeRecord, PendingWrapped, BOUND_TOKENS, BRIDGES, CLAIM_COUNTERS,
    CREATE_COUNTERS, PENDING_WRAPPED,
};
use crate::token::{escrow_native, instantiate_wrapped_msg, query_symbol};

use super::native_sent;

/// Register a bridge (owner only).
pub fn execute_create_bridge(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    bridge: XChainBridge,
    params: BridgeParams,
) -> Result<Response, ContractError> {
    let config = load_active_config(deps.storage)?;
    Governor::new(deps.querier, &config.governor).ensure_owner(&info.sender)?;

    let kind = classify(
        &bridge,
        &params,
        &env.contract.address,
        &config.native_issuing_door,
    )
    .map_err(|reason| ContractError::InvalidBridgeConfig { reason })?;

    let bridge_id = compute_bridge_id(&bridge);
    if BRIDGES.has(deps.storage, bridge_id.as_slice()) {
        return Err(ContractError::AlreadyRegistered);
    }

    let response = Response::new()
        .add_attribute("action", "create_bridge")
        .add_attribute("bridge_id", bridge_id_to_hex(&bridge_id))
        .add_attribute("kind", kind.as_str());

    match kind {
        BridgeKind::Native => {
            let asset = AssetInfo::Native {
                denom: config.native_denom,
            };
            register(deps.storage, bridge_id, bridge, kind, params, asset)?;
            Ok(response)
        }
        BridgeKind::LockingToken => {
            let issuer = bridge
                .locking_issue
                .issuer
                .as_deref()
                .ok_or(ContractError::InvalidBridgeConfig {
                    reason: ConfigViolation::IssuerMarker,
                })?;
            let token = deps.api.addr_validate(issuer)?;
            ensure_unbound(deps.storage, &token)?;

            let symbol = query_symbol(&deps.querier, &token)?;
            if symbol != bridge.locking_issue.currency {
                return Err(ContractError::InvalidBridgeConfig {
                    reason: ConfigViolation::CurrencySymbolMismatch,
                });
            }

            BOUND_TOKENS.save(deps.storage, &token, &bridge_id)?;
            let asset = AssetInfo::Cw20 {
                contract_addr: token.clone(),
            };
            register(deps.storage, bridge_id, bridge, kind, params, asset)?;
            Ok(response.add_attribute("token", token))
        }
        BridgeKind::IssuingToken => {
            let submsg = instantiate_wrapped_msg(
                config.wrapped_token_code_id,
                &bridge.issuing_issue.currency,
                &env.contract.address,
                &config.governor,
            )?;
            PENDING_WRAPPED.save(
                deps.storage,
                &PendingWrapped {
                    bridge_id,
                    bridge,
                    params,
                },
            )?;
            Ok(response.add_submessage(submsg))
        }
    }
}

/// Record the wrapped token of a pending issuing bridge and register it.
pub fn reply_instantiate_wrapped(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let pending = PENDING_WRAPPED.load(deps.storage)?;
    PENDING_WRAPPED.remove(deps.storage);

    let result = msg.result.into_result().map_err(StdError::generic_err)?;
    let token = result
        .events
        .iter()
        .filter(|event| event.ty == "instantiate")
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == "_contract_address")
        .map(|attr| attr.value.clone())
        .ok_or(ContractError::WrappedTokenMissing)?;
    let token = deps.api.addr_validate(&token)?;
    ensure_unbound(deps.storage, &token)?;

    BOUND_TOKENS.save(deps.storage, &token, &pending.bridge_id)?;
    let asset = AssetInfo::Cw20 {
        contract_addr: token.clone(),
    };
    register(
        deps.storage,
        pending.bridge_id,
        pending.bridge,
        BridgeKind::IssuingToken,
        pending.params,
        asset,
    )?;

    Ok(Response::new()
        .add_attribute("action", "register_wrapped_token")
        .add_attribute("bridge_id", bridge_id_to_hex(&pending.bridge_id))
        .add_attribute("token", token))
}

/// Propose a bridge for a CW20 token. Only escrows the reward and emits an
/// event for governance.
pub fn execute_create_bridge_request(
    deps: DepsMut,
    info: MessageInfo,
    token_address: String,
) -> Result<Response, ContractError> {
    let config = load_active_config(deps.storage)?;
    let token = deps.api.addr_validate(&token_address)?;

    let reward = native_sent(&info, &config.native_denom);
    if reward < config.min_create_bridge_reward {
        return Err(ContractError::InsufficientReward {
            required: config.min_create_bridge_reward,
            got: reward,
        });
    }
    ensure_unbound(deps.storage, &token)?;

    Ok(Response::new()
        .add_messages(escrow_native(&config.governor, &config.native_denom, reward))
        .add_event(events::create_bridge_request(&token, reward))
        .add_attribute("action", "create_bridge_request")
        .add_attribute("token", token)
        .add_attribute("reward", reward))
}

fn ensure_unbound(storage: &dyn Storage, token: &Addr) -> Result<(), ContractError> {
    if BOUND_TOKENS.has(storage, token) {
        return Err(ContractError::TokenAlreadyRegistered {
            token: token.to_string(),
        });
    }
    Ok(())
}

fn register(
    storage: &mut dyn Storage,
    bridge_id: BridgeId,
    bridge: XChainBridge,
    kind: BridgeKind,
    params: BridgeParams,
    asset: AssetInfo,
) -> Result<(), ContractError> {
    BRIDGES.save(
        storage,
        bridge_id.as_slice(),
        &BridgeRecord {
            bridge,
            kind,
            params,
            asset,
        },
    )?;
    CLAIM_COUNTERS.save(storage, bridge_id.as_slice(), &0)?;
    CREATE_COUNTERS.save(storage, bridge_id.as_slice(), &0)?;
    Ok(())
}
