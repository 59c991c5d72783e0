//! Token binding.
//!
//! Resolves the asset a bridge moves on this chain and builds the messages
//! that move it:
//! - escrow: native value and locked CW20s go to the governor, wrapped
//!   CW20s are burned by the door
//! - credit: native value and locked CW20s are released by the governor,
//!   wrapped CW20s are minted by the door

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, Empty, QuerierWrapper, StdResult, SubMsg,
    Uint128, WasmMsg,
};
use cw20::{Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse, TokenInfoResponse};

use common::{Asset, AssetInfo};

use crate::bridge::BridgeKind;
use crate::state::{INSTANTIATE_WRAPPED_REPLY_ID, WRAPPED_TOKEN_DECIMALS};

/// Instantiate message understood by cw20-base compatible token codes
#[cw_serde]
pub struct WrappedTokenInstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_balances: Vec<Cw20Coin>,
    pub mint: Option<MinterResponse>,
    pub marketing: Option<Empty>,
}

/// Query the CW20 symbol of `token`.
pub fn query_symbol(querier: &QuerierWrapper, token: &Addr) -> StdResult<String> {
    let info: TokenInfoResponse = querier.query_wasm_smart(token, &Cw20QueryMsg::TokenInfo {})?;
    Ok(info.symbol)
}

/// Sub-message instantiating the wrapped token for an issuing bridge.
///
/// The door is the sole minter; the governor is the wasm admin.
pub fn instantiate_wrapped_msg(
    code_id: u64,
    currency: &str,
    door: &Addr,
    governor: &Addr,
) -> StdResult<SubMsg> {
    let msg = WrappedTokenInstantiateMsg {
        name: format!("Wrapped {}", currency),
        symbol: currency.to_string(),
        decimals: WRAPPED_TOKEN_DECIMALS,
        initial_balances: vec![],
        mint: Some(MinterResponse {
            minter: door.to_string(),
            cap: None,
        }),
        marketing: None,
    };

    Ok(SubMsg::reply_on_success(
        WasmMsg::Instantiate {
            admin: Some(governor.to_string()),
            code_id,
            msg: to_json_binary(&msg)?,
            funds: vec![],
            label: format!("xchain-wrapped-{}", currency),
        },
        INSTANTIATE_WRAPPED_REPLY_ID,
    ))
}

/// Forward native value held by the door to the governor.
pub fn escrow_native(governor: &Addr, denom: &str, amount: Uint128) -> Option<CosmosMsg> {
    if amount.is_zero() {
        return None;
    }
    Some(CosmosMsg::Bank(BankMsg::Send {
        to_address: governor.to_string(),
        amount: vec![Coin {
            denom: denom.to_string(),
            amount,
        }],
    }))
}

/// Move CW20 tokens the door just received into escrow.
///
/// Locked tokens go to the governor; wrapped tokens are burned.
pub fn escrow_cw20(
    kind: &BridgeKind,
    token: &Addr,
    governor: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    let msg = match kind {
        BridgeKind::IssuingToken => Cw20ExecuteMsg::Burn { amount },
        _ => Cw20ExecuteMsg::Transfer {
            recipient: governor.to_string(),
            amount,
        },
    };
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&msg)?,
        funds: vec![],
    }))
}

/// How a credit is carried out.
#[derive(Debug, Clone, PartialEq)]
pub enum Credit {
    /// The governor sends from escrow (include in a release batch)
    Release(CosmosMsg),
    /// The door dispatches directly (mint)
    Direct(CosmosMsg),
}

/// Credit `recipient` with `amount` of the bridge asset.
pub fn credit(
    kind: &BridgeKind,
    asset: &AssetInfo,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<Credit> {
    match (kind, asset) {
        (BridgeKind::IssuingToken, AssetInfo::Cw20 { contract_addr }) => {
            Ok(Credit::Direct(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Mint {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            })))
        }
        _ => Ok(Credit::Release(
            Asset::new(asset.clone(), amount).transfer_msg(recipient)?,
        )),
    }
}
