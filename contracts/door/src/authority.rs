//! Witness authority.
//!
//! Witness membership, the quorum threshold and ownership belong to the
//! governing module. The door only reads them, on every call, through this
//! trait.

use cosmwasm_std::{Addr, QuerierWrapper, StdResult};

use common::governor::{IsWitnessResponse, QueryMsg as GovernorQueryMsg, ThresholdResponse};

use crate::error::ContractError;

pub trait WitnessAuthority {
    fn is_witness(&self, account: &Addr) -> StdResult<bool>;

    fn threshold(&self) -> StdResult<u32>;

    fn owner(&self) -> &Addr;

    fn ensure_witness(&self, account: &Addr) -> Result<(), ContractError> {
        if !self.is_witness(account)? {
            return Err(ContractError::NotAWitness);
        }
        Ok(())
    }

    fn ensure_owner(&self, account: &Addr) -> Result<(), ContractError> {
        if account != self.owner() {
            return Err(ContractError::NotOwner);
        }
        Ok(())
    }
}

/// Authority backed by the governor contract.
pub struct Governor<'a> {
    querier: QuerierWrapper<'a>,
    addr: &'a Addr,
}

impl<'a> Governor<'a> {
    pub fn new(querier: QuerierWrapper<'a>, addr: &'a Addr) -> Self {
        Self { querier, addr }
    }
}

impl WitnessAuthority for Governor<'_> {
    fn is_witness(&self, account: &Addr) -> StdResult<bool> {
        let res: IsWitnessResponse = self.querier.query_wasm_smart(
            self.addr,
            &GovernorQueryMsg::IsWitness {
                address: account.to_string(),
            },
        )?;
        Ok(res.is_witness)
    }

    fn threshold(&self) -> StdResult<u32> {
        let res: ThresholdResponse = self
            .querier
            .query_wasm_smart(self.addr, &GovernorQueryMsg::Threshold {})?;
        Ok(res.threshold)
    }

    fn owner(&self) -> &Addr {
        self.addr
    }
}
