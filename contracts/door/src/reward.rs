//! Signature reward distribution.
//!
//! The escrowed reward is split evenly among the witnesses whose vote
//! matched the winning value. Integer division remainders are retained by
//! the escrow holder and never redistributed.

use cosmwasm_std::{Addr, BankMsg, Coin, CosmosMsg, Uint128};

#[derive(Debug, Clone, PartialEq)]
pub struct RewardSplit {
    pub per_witness: Uint128,
    pub retained: Uint128,
    pub recipients: Vec<Addr>,
}

impl RewardSplit {
    /// Total amount actually paid out.
    pub fn paid(&self) -> Uint128 {
        self.per_witness * Uint128::from(self.recipients.len() as u128)
    }

    /// Bank sends paying each recipient, skipping zero payouts.
    pub fn payout_msgs(&self, denom: &str) -> Vec<CosmosMsg> {
        if self.per_witness.is_zero() {
            return vec![];
        }
        self.recipients
            .iter()
            .map(|witness| {
                CosmosMsg::Bank(BankMsg::Send {
                    to_address: witness.to_string(),
                    amount: vec![Coin {
                        denom: denom.to_string(),
                        amount: self.per_witness,
                    }],
                })
            })
            .collect()
    }
}

/// Split `reward` among `witnesses`.
pub fn split_reward(reward: Uint128, witnesses: &[Addr]) -> RewardSplit {
    if witnesses.is_empty() {
        return RewardSplit {
            per_witness: Uint128::zero(),
            retained: reward,
            recipients: vec![],
        };
    }

    let count = Uint128::from(witnesses.len() as u128);
    let per_witness = reward / count;
    RewardSplit {
        per_witness,
        retained: reward - per_witness * count,
        recipients: witnesses.to_vec(),
    }
}
