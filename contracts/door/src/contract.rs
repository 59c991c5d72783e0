//! XChain Door Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_claim_attestation, execute_add_create_account_attestation, execute_claim,
    execute_commit, execute_create_account_commit, execute_create_bridge,
    execute_create_bridge_request, execute_create_claim_id, execute_execute, execute_pause,
    execute_receive, execute_unpause, reply_instantiate_wrapped,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_account_created, query_bridge, query_bridge_id, query_bridges, query_claim,
    query_claims, query_config, query_create_account_request, query_next_claim_id,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, INSTANTIATE_WRAPPED_REPLY_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let governor = deps.api.addr_validate(&msg.governor)?;

    let config = Config {
        governor,
        paused: false,
        native_denom: msg.native_denom,
        native_issuing_door: msg.native_issuing_door,
        wrapped_token_code_id: msg.wrapped_token_code_id,
        min_create_bridge_reward: msg.min_create_bridge_reward,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("governor", config.governor)
        .add_attribute("native_denom", config.native_denom))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Bridge registry
        ExecuteMsg::CreateBridge { bridge, params } => {
            execute_create_bridge(deps, env, info, bridge, params)
        }
        ExecuteMsg::CreateBridgeRequest { token_address } => {
            execute_create_bridge_request(deps, info, token_address)
        }

        // Claims
        ExecuteMsg::CreateClaimId {
            bridge,
            expected_sender,
        } => execute_create_claim_id(deps, info, bridge, expected_sender),
        ExecuteMsg::Commit {
            bridge,
            receiver,
            claim_id,
            amount,
        } => execute_commit(deps, info, bridge, Some(receiver), claim_id, amount),
        ExecuteMsg::CommitWithoutAddress {
            bridge,
            claim_id,
            amount,
        } => execute_commit(deps, info, bridge, None, claim_id, amount),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),
        ExecuteMsg::AddClaimAttestation {
            bridge,
            claim_id,
            amount,
            sender,
            destination,
        } => execute_add_claim_attestation(
            deps,
            info,
            bridge,
            claim_id,
            amount,
            sender,
            destination,
        ),
        ExecuteMsg::Claim {
            bridge,
            claim_id,
            amount,
            receiver,
        } => execute_claim(deps, info, bridge, claim_id, amount, receiver),

        // Account creation
        ExecuteMsg::CreateAccountCommit {
            bridge,
            destination,
            amount,
            reward,
        } => execute_create_account_commit(deps, info, bridge, destination, amount, reward),
        ExecuteMsg::AddCreateAccountAttestation {
            bridge,
            destination,
            amount,
            nonce,
        } => execute_add_create_account_attestation(deps, info, bridge, destination, amount, nonce),

        // Owner operations
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::Execute {
            target,
            value,
            data,
        } => execute_execute(deps, info, target, value, data),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INSTANTIATE_WRAPPED_REPLY_ID => reply_instantiate_wrapped(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::BridgeId { bridge } => to_json_binary(&query_bridge_id(bridge)?),
        QueryMsg::Bridge { bridge } => to_json_binary(&query_bridge(deps, bridge)?),
        QueryMsg::Bridges { start_after, limit } => {
            to_json_binary(&query_bridges(deps, start_after, limit)?)
        }
        QueryMsg::Claim { bridge, claim_id } => {
            to_json_binary(&query_claim(deps, bridge, claim_id)?)
        }
        QueryMsg::Claims {
            bridge,
            start_after,
            limit,
        } => to_json_binary(&query_claims(deps, bridge, start_after, limit)?),
        QueryMsg::NextClaimId { bridge } => to_json_binary(&query_next_claim_id(deps, bridge)?),
        QueryMsg::CreateAccountRequest {
            bridge,
            destination,
        } => to_json_binary(&query_create_account_request(deps, bridge, destination)?),
        QueryMsg::AccountCreated {
            bridge,
            destination,
        } => to_json_binary(&query_account_created(deps, bridge, destination)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
