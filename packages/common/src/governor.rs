//! Governing module interface.
//!
//! The governor owns the witness set and quorum threshold, holds escrowed
//! value, and releases it only on request of an enabled module (a door).
//! Doors consume it through these messages and never touch its storage.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, WasmMsg};

#[cw_serde]
pub struct InstantiateMsg {
    /// Governance account allowed to change witnesses, threshold and modules
    pub admin: String,
    /// Initial witness accounts
    pub witnesses: Vec<String>,
    /// Number of matching witness votes required for quorum
    pub threshold: u32,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register a witness (admin only)
    AddWitness { address: String },
    /// Deregister a witness (admin only)
    RemoveWitness { address: String },
    /// Change the quorum threshold (admin only)
    SetThreshold { threshold: u32 },
    /// Allow a door to release escrowed funds (admin only)
    EnableModule { module: String },
    /// Revoke a door's release permission (admin only)
    DisableModule { module: String },
    /// Dispatch arbitrary messages as the governor (admin only).
    ///
    /// This is how governance calls owner-only door entry points.
    Execute { msgs: Vec<CosmosMsg> },
    /// Dispatch messages on behalf of an enabled module (module only)
    ExecuteFromModule { msgs: Vec<CosmosMsg> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(IsWitnessResponse)]
    IsWitness { address: String },

    #[returns(ThresholdResponse)]
    Threshold {},

    /// Paginated witness list (default 10, max 30)
    #[returns(WitnessesResponse)]
    Witnesses {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(AdminResponse)]
    Admin {},

    #[returns(IsModuleResponse)]
    IsModule { address: String },
}

#[cw_serde]
pub struct IsWitnessResponse {
    pub is_witness: bool,
}

#[cw_serde]
pub struct ThresholdResponse {
    pub threshold: u32,
    pub witness_count: u32,
}

#[cw_serde]
pub struct WitnessesResponse {
    pub witnesses: Vec<Addr>,
}

#[cw_serde]
pub struct AdminResponse {
    pub admin: Addr,
}

#[cw_serde]
pub struct IsModuleResponse {
    pub is_module: bool,
}

/// Wrap `msgs` into a module release call on `governor`.
pub fn release_msg(governor: &Addr, msgs: Vec<CosmosMsg>) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: governor.to_string(),
        msg: to_json_binary(&ExecuteMsg::ExecuteFromModule { msgs })?,
        funds: vec![],
    }))
}
