//! XChain Governor - Entry Points
//!
//! Admin calls manage witnesses, the quorum threshold and the doors enabled
//! as modules. Enabled doors release escrow through `ExecuteFromModule`.

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Order,
    Response, StdResult, Storage,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    AdminResponse, ExecuteMsg, InstantiateMsg, IsModuleResponse, IsWitnessResponse, MigrateMsg,
    QueryMsg, ThresholdResponse, WitnessesResponse,
};
use crate::state::{
    ADMIN, CONTRACT_NAME, CONTRACT_VERSION, MODULES, THRESHOLD, WITNESSES, WITNESS_COUNT,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

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

    let admin = deps.api.addr_validate(&msg.admin)?;
    ADMIN.save(deps.storage, &admin)?;

    let mut count = 0u32;
    for witness in &msg.witnesses {
        let addr = deps.api.addr_validate(witness)?;
        if WITNESSES.has(deps.storage, &addr) {
            return Err(ContractError::WitnessAlreadyRegistered {
                address: witness.clone(),
            });
        }
        WITNESSES.save(deps.storage, &addr, &true)?;
        count += 1;
    }
    WITNESS_COUNT.save(deps.storage, &count)?;

    validate_threshold(msg.threshold, count)?;
    THRESHOLD.save(deps.storage, &msg.threshold)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("witness_count", count.to_string())
        .add_attribute("threshold", msg.threshold.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddWitness { address } => execute_add_witness(deps, info, address),
        ExecuteMsg::RemoveWitness { address } => execute_remove_witness(deps, info, address),
        ExecuteMsg::SetThreshold { threshold } => execute_set_threshold(deps, info, threshold),
        ExecuteMsg::EnableModule { module } => execute_set_module(deps, info, module, true),
        ExecuteMsg::DisableModule { module } => execute_set_module(deps, info, module, false),
        ExecuteMsg::Execute { msgs } => execute_admin_dispatch(deps, info, msgs),
        ExecuteMsg::ExecuteFromModule { msgs } => execute_module_dispatch(deps, info, msgs),
    }
}

// ============================================================================
// Guards
// ============================================================================

fn ensure_admin(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    let admin = ADMIN.load(storage)?;
    if *sender != admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn validate_threshold(threshold: u32, witnesses: u32) -> Result<(), ContractError> {
    if threshold == 0 || threshold > witnesses {
        return Err(ContractError::InvalidThreshold {
            threshold,
            witnesses,
        });
    }
    Ok(())
}

// ============================================================================
// Witness Set
// ============================================================================

fn execute_add_witness(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;

    let addr = deps.api.addr_validate(&address)?;
    if WITNESSES.has(deps.storage, &addr) {
        return Err(ContractError::WitnessAlreadyRegistered { address });
    }
    WITNESSES.save(deps.storage, &addr, &true)?;
    let count = WITNESS_COUNT.update(deps.storage, |c| -> StdResult<_> { Ok(c + 1) })?;

    Ok(Response::new()
        .add_attribute("action", "add_witness")
        .add_attribute("witness", addr)
        .add_attribute("witness_count", count.to_string()))
}

fn execute_remove_witness(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;

    let addr = deps.api.addr_validate(&address)?;
    if !WITNESSES.has(deps.storage, &addr) {
        return Err(ContractError::WitnessNotRegistered { address });
    }

    // The remaining set must still be able to reach quorum
    let count = WITNESS_COUNT.load(deps.storage)? - 1;
    validate_threshold(THRESHOLD.load(deps.storage)?, count)?;

    WITNESSES.remove(deps.storage, &addr);
    WITNESS_COUNT.save(deps.storage, &count)?;

    Ok(Response::new()
        .add_attribute("action", "remove_witness")
        .add_attribute("witness", addr)
        .add_attribute("witness_count", count.to_string()))
}

fn execute_set_threshold(
    deps: DepsMut,
    info: MessageInfo,
    threshold: u32,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;

    validate_threshold(threshold, WITNESS_COUNT.load(deps.storage)?)?;
    THRESHOLD.save(deps.storage, &threshold)?;

    Ok(Response::new()
        .add_attribute("action", "set_threshold")
        .add_attribute("threshold", threshold.to_string()))
}

// ============================================================================
// Modules
// ============================================================================

fn execute_set_module(
    deps: DepsMut,
    info: MessageInfo,
    module: String,
    enabled: bool,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;

    let addr = deps.api.addr_validate(&module)?;
    if enabled {
        MODULES.save(deps.storage, &addr, &true)?;
    } else {
        MODULES.remove(deps.storage, &addr);
    }

    Ok(Response::new()
        .add_attribute(
            "action",
            if enabled {
                "enable_module"
            } else {
                "disable_module"
            },
        )
        .add_attribute("module", addr))
}

// ============================================================================
// Dispatch
// ============================================================================

fn execute_admin_dispatch(
    deps: DepsMut,
    info: MessageInfo,
    msgs: Vec<CosmosMsg>,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "execute")
        .add_attribute("msg_count", msgs.len().to_string())
        .add_messages(msgs))
}

fn execute_module_dispatch(
    deps: DepsMut,
    info: MessageInfo,
    msgs: Vec<CosmosMsg>,
) -> Result<Response, ContractError> {
    let enabled = MODULES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(false);
    if !enabled {
        return Err(ContractError::NotModule);
    }

    Ok(Response::new()
        .add_attribute("action", "execute_from_module")
        .add_attribute("module", info.sender)
        .add_attribute("msg_count", msgs.len().to_string())
        .add_messages(msgs))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IsWitness { address } => to_json_binary(&query_is_witness(deps, address)?),
        QueryMsg::Threshold {} => to_json_binary(&query_threshold(deps)?),
        QueryMsg::Witnesses { start_after, limit } => {
            to_json_binary(&query_witnesses(deps, start_after, limit)?)
        }
        QueryMsg::Admin {} => to_json_binary(&AdminResponse {
            admin: ADMIN.load(deps.storage)?,
        }),
        QueryMsg::IsModule { address } => to_json_binary(&query_is_module(deps, address)?),
    }
}

fn query_is_witness(deps: Deps, address: String) -> StdResult<IsWitnessResponse> {
    // Unparseable addresses are simply not witnesses
    let is_witness = match deps.api.addr_validate(&address) {
        Ok(addr) => WITNESSES.may_load(deps.storage, &addr)?.unwrap_or(false),
        Err(_) => false,
    };
    Ok(IsWitnessResponse { is_witness })
}

fn query_threshold(deps: Deps) -> StdResult<ThresholdResponse> {
    Ok(ThresholdResponse {
        threshold: THRESHOLD.load(deps.storage)?,
        witness_count: WITNESS_COUNT.load(deps.storage)?,
    })
}

fn query_witnesses(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<WitnessesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let witnesses = WITNESSES
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    Ok(WitnessesResponse { witnesses })
}

fn query_is_module(deps: Deps, address: String) -> StdResult<IsModuleResponse> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(IsModuleResponse {
        is_module: MODULES.may_load(deps.storage, &addr)?.unwrap_or(false),
    })
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
