use cosmwasm_schema::cw_serde;

pub use common::governor::{
    AdminResponse, ExecuteMsg, InstantiateMsg, IsModuleResponse, IsWitnessResponse, QueryMsg,
    ThresholdResponse, WitnessesResponse,
};

#[cw_serde]
pub struct MigrateMsg {}
