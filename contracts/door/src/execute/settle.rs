//! Settlement shared by claims and account creations.

use cosmwasm_std::{Addr, CosmosMsg, StdResult, Uint128};

use common::governor::release_msg;

use crate::reward::split_reward;
use crate::state::{BridgeRecord, Config};
use crate::token::{credit, Credit};

/// Messages crediting `receiver` with `amount` and paying `reward` to the
/// matching `witnesses`.
///
/// Everything the governor has to send goes out in a single release call.
pub(super) fn settlement_msgs(
    config: &Config,
    record: &BridgeRecord,
    receiver: &Addr,
    amount: Uint128,
    reward: Uint128,
    witnesses: &[Addr],
) -> StdResult<Vec<CosmosMsg>> {
    let mut msgs = vec![];
    let mut release = vec![];

    if !amount.is_zero() {
        match credit(&record.kind, &record.asset, receiver, amount)? {
            Credit::Release(msg) => release.push(msg),
            Credit::Direct(msg) => msgs.push(msg),
        }
    }

    release.extend(split_reward(reward, witnesses).payout_msgs(&config.native_denom));

    if !release.is_empty() {
        msgs.push(release_msg(&config.governor, release)?);
    }
    Ok(msgs)
}
