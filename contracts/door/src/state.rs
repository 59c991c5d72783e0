//! State definitions for the XChain door contract
//!
//! All per-bridge state is keyed by the 32-byte bridge id so bridges are
//! fully independent of each other.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Storage, Uint128};
use cw_storage_plus::{Item, Map};

use common::AssetInfo;

use crate::bridge::{BridgeKind, BridgeParams, XChainBridge};
use crate::error::ContractError;
use crate::hash::{compute_bridge_id, BridgeId};
use crate::tally::Tally;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Governing module: owner, witness authority and escrow holder
    pub governor: Addr,
    /// Whether the door is currently paused
    pub paused: bool,
    /// Native denom moved by native bridges and used for rewards
    pub native_denom: String,
    /// The only issuing door accepted for native bridges
    pub native_issuing_door: String,
    /// CW20 code instantiated for wrapped tokens on issuing bridges
    pub wrapped_token_code_id: u64,
    /// Minimum reward escrowed with a bridge creation request
    pub min_create_bridge_reward: Uint128,
}

// ============================================================================
// Bridges
// ============================================================================

/// Registered bridge
#[cw_serde]
pub struct BridgeRecord {
    pub bridge: XChainBridge,
    pub kind: BridgeKind,
    pub params: BridgeParams,
    /// Asset moved by this bridge on this chain
    pub asset: AssetInfo,
}

/// IssuingToken bridge awaiting its wrapped token instantiation reply
#[cw_serde]
pub struct PendingWrapped {
    pub bridge_id: [u8; 32],
    pub bridge: XChainBridge,
    pub params: BridgeParams,
}

// ============================================================================
// Claims
// ============================================================================

/// A witness vote on a claim
#[cw_serde]
pub struct ClaimVote {
    pub amount: Uint128,
    /// `None` defers the destination to the claim creator
    pub destination: Option<Addr>,
}

#[cw_serde]
pub enum ClaimStatus {
    /// Collecting votes
    Pending,
    /// Quorum agreed on an amount without a destination; awaiting `Claim`
    Decided { amount: Uint128 },
}

impl ClaimStatus {
    /// Whether `amount` contradicts an already decided amount.
    pub fn conflicts(&self, amount: Uint128) -> bool {
        matches!(self, ClaimStatus::Decided { amount: decided } if *decided != amount)
    }
}

/// Pending cross-chain credit. Deleted on settlement.
#[cw_serde]
pub struct Claim {
    pub claim_id: u64,
    pub creator: Addr,
    /// Sender on the other chain that must commit for this claim
    pub expected_sender: String,
    /// Escrowed signature reward
    pub reward: Uint128,
    pub status: ClaimStatus,
    pub tally: Tally<ClaimVote>,
}

// ============================================================================
// Account Creation
// ============================================================================

/// A witness vote on an account creation
#[cw_serde]
pub struct AccountVote {
    pub amount: Uint128,
    /// Create count emitted by the committing door
    pub nonce: u64,
}

/// Account creation awaiting witness quorum. Deleted on settlement.
#[cw_serde]
pub struct AccountCreateRequest {
    /// Reward snapshot taken when the request opened
    pub reward: Uint128,
    pub tally: Tally<AccountVote>,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:xchain-door";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for wrapped token instantiation
pub const INSTANTIATE_WRAPPED_REPLY_ID: u64 = 1;

/// Decimals of wrapped tokens minted by issuing doors
pub const WRAPPED_TOKEN_DECIMALS: u8 = 6;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Key: bridge id, Value: BridgeRecord
pub const BRIDGES: Map<&[u8], BridgeRecord> = Map::new("bridges");

/// CW20 tokens bound to a bridge
/// Key: token contract, Value: bridge id
pub const BOUND_TOKENS: Map<&Addr, [u8; 32]> = Map::new("bound_tokens");

pub const PENDING_WRAPPED: Item<PendingWrapped> = Item::new("pending_wrapped");

/// Last allocated claim id per bridge (0 = none yet)
/// Key: bridge id
pub const CLAIM_COUNTERS: Map<&[u8], u64> = Map::new("claim_counters");

/// Key: (bridge id, claim id), Value: Claim
pub const CLAIMS: Map<(&[u8], u64), Claim> = Map::new("claims");

/// Last create count issued by `CreateAccountCommit` per bridge
/// Key: bridge id
pub const CREATE_COUNTERS: Map<&[u8], u64> = Map::new("create_counters");

/// Key: (bridge id, destination), Value: AccountCreateRequest
pub const CREATE_REQUESTS: Map<(&[u8], &Addr), AccountCreateRequest> =
    Map::new("create_requests");

/// Settled account creations; a destination here can never be reopened
/// Key: (bridge id, destination), Value: nonce it was created with
pub const CREATED_ACCOUNTS: Map<(&[u8], &Addr), u64> = Map::new("created_accounts");

// ============================================================================
// Helpers
// ============================================================================

/// Load a registered bridge by its configuration.
pub fn load_bridge(
    storage: &dyn Storage,
    bridge: &XChainBridge,
) -> Result<(BridgeId, BridgeRecord), ContractError> {
    let bridge_id = compute_bridge_id(bridge);
    let record = BRIDGES
        .may_load(storage, bridge_id.as_slice())?
        .ok_or(ContractError::BridgeNotFound)?;
    Ok((bridge_id, record))
}

/// Load the config, failing while the door is paused.
pub fn load_active_config(storage: &dyn Storage) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if config.paused {
        return Err(ContractError::Paused);
    }
    Ok(config)
}
