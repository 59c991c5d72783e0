//! Owner operations handlers.
//!
//! The owner is the governor contract, so these are reached through
//! governance proposals executed by the governor.
//! - Pause/unpause the door
//! - Release escrowed value (escape hatch)

use cosmwasm_std::{
    BankMsg, Binary, Coin, CosmosMsg, DepsMut, MessageInfo, Response, Uint128, WasmMsg,
};

use common::governor::release_msg;

use crate::authority::{Governor, WitnessAuthority};
use crate::error::ContractError;
use crate::state::CONFIG;

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the door (stops every bridge operation).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps, info, true)
}

/// Unpause the door.
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps, info, false)
}

fn set_paused(deps: DepsMut, info: MessageInfo, paused: bool) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    Governor::new(deps.querier, &config.governor).ensure_owner(&info.sender)?;

    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", if paused { "pause" } else { "unpause" }))
}

// ============================================================================
// Escape Hatch
// ============================================================================

/// Have the governor send `value` of the native denom to `target`, or
/// execute `data` on `target` with `value` attached.
pub fn execute_execute(
    deps: DepsMut,
    info: MessageInfo,
    target: String,
    value: Uint128,
    data: Option<Binary>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Governor::new(deps.querier, &config.governor).ensure_owner(&info.sender)?;

    let target = deps.api.addr_validate(&target)?;
    let funds = if value.is_zero() {
        vec![]
    } else {
        vec![Coin {
            denom: config.native_denom.clone(),
            amount: value,
        }]
    };

    let msg = match data {
        Some(data) => CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: target.to_string(),
            msg: data,
            funds,
        }),
        None => {
            if funds.is_empty() {
                return Err(ContractError::ZeroAmount);
            }
            CosmosMsg::Bank(BankMsg::Send {
                to_address: target.to_string(),
                amount: funds,
            })
        }
    };

    Ok(Response::new()
        .add_message(release_msg(&config.governor, vec![msg])?)
        .add_attribute("action", "execute")
        .add_attribute("target", target)
        .add_attribute("value", value))
}
