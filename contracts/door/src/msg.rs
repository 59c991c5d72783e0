//! Message types for the XChain door contract
//!
//! Bridges are always addressed by their full configuration; the door
//! derives the bridge id itself.

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

pub use crate::bridge::{BridgeKind, BridgeParams, Issue, XChainBridge};
pub use crate::state::{AccountVote, ClaimStatus, ClaimVote};
pub use crate::tally::WitnessVote;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Governor contract: owner, witness authority and escrow holder
    pub governor: String,
    /// Native denom moved by native bridges and used for rewards
    pub native_denom: String,
    /// The only issuing door accepted for native bridges
    pub native_issuing_door: String,
    /// CW20 code id used for wrapped tokens
    pub wrapped_token_code_id: u64,
    /// Minimum reward for `CreateBridgeRequest`
    pub min_create_bridge_reward: Uint128,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Bridge Registry
    // ========================================================================
    /// Register a bridge (owner only)
    ///
    /// For issuing token bridges the wrapped token is instantiated first and
    /// the bridge becomes usable once its reply is processed.
    CreateBridge {
        bridge: XChainBridge,
        params: BridgeParams,
    },

    /// Propose a bridge for a CW20 token (permissionless)
    ///
    /// The attached native funds are the reward, forwarded to the governor.
    CreateBridgeRequest { token_address: String },

    // ========================================================================
    // Claims
    // ========================================================================
    /// Reserve the next claim id on this bridge.
    ///
    /// The attached native funds are the signature reward. The id is
    /// returned in the response data.
    CreateClaimId {
        bridge: XChainBridge,
        /// Account on the other chain expected to commit for this claim
        expected_sender: String,
    },

    /// Commit native value to be credited to `receiver` on the other chain
    Commit {
        bridge: XChainBridge,
        receiver: String,
        claim_id: u64,
        amount: Uint128,
    },

    /// Commit native value; the claim creator picks the receiver later
    CommitWithoutAddress {
        bridge: XChainBridge,
        claim_id: u64,
        amount: Uint128,
    },

    /// Token commits (CW20 send hook)
    Receive(cw20::Cw20ReceiveMsg),

    /// Attest a commit observed on the other chain (witness only)
    AddClaimAttestation {
        bridge: XChainBridge,
        claim_id: u64,
        amount: Uint128,
        /// Committing account on the other chain
        sender: String,
        /// `None` leaves the destination to the claim creator
        destination: Option<String>,
    },

    /// Settle a decided claim (claim creator only)
    Claim {
        bridge: XChainBridge,
        claim_id: u64,
        amount: Uint128,
        receiver: String,
    },

    // ========================================================================
    // Account Creation (native bridges only)
    // ========================================================================
    /// Fund a new account on the other chain
    ///
    /// Attached native funds must cover `amount + reward`.
    CreateAccountCommit {
        bridge: XChainBridge,
        destination: String,
        amount: Uint128,
        reward: Uint128,
    },

    /// Attest an account creation observed on the other chain (witness only)
    AddCreateAccountAttestation {
        bridge: XChainBridge,
        destination: String,
        amount: Uint128,
        /// Create count emitted by the committing door
        nonce: u64,
    },

    // ========================================================================
    // Owner Operations
    // ========================================================================
    Pause {},
    Unpause {},

    /// Ask the governor to release escrowed native value to `target`,
    /// optionally as a wasm execute carrying `data`
    Execute {
        target: String,
        value: Uint128,
        data: Option<Binary>,
    },
}

/// CW20 receive hook payloads
#[cw_serde]
pub enum ReceiveMsg {
    Commit {
        bridge: XChainBridge,
        receiver: String,
        claim_id: u64,
    },
    CommitWithoutAddress { bridge: XChainBridge, claim_id: u64 },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Compute the id of a bridge configuration (registered or not)
    #[returns(BridgeIdResponse)]
    BridgeId { bridge: XChainBridge },

    #[returns(BridgeResponse)]
    Bridge { bridge: XChainBridge },

    /// Registered bridges ordered by id (`start_after` is a hex id)
    #[returns(BridgesResponse)]
    Bridges {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(ClaimResponse)]
    Claim { bridge: XChainBridge, claim_id: u64 },

    /// Open claims on a bridge ordered by id
    #[returns(ClaimsResponse)]
    Claims {
        bridge: XChainBridge,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(NextClaimIdResponse)]
    NextClaimId { bridge: XChainBridge },

    #[returns(CreateAccountRequestResponse)]
    CreateAccountRequest {
        bridge: XChainBridge,
        destination: String,
    },

    #[returns(AccountCreatedResponse)]
    AccountCreated {
        bridge: XChainBridge,
        destination: String,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub governor: Addr,
    pub paused: bool,
    pub native_denom: String,
    pub native_issuing_door: String,
    pub wrapped_token_code_id: u64,
    pub min_create_bridge_reward: Uint128,
}

#[cw_serde]
pub struct BridgeIdResponse {
    pub bridge_id: String,
}

#[cw_serde]
pub struct BridgeResponse {
    pub bridge_id: String,
    pub bridge: XChainBridge,
    pub kind: BridgeKind,
    pub params: BridgeParams,
    pub asset: AssetInfo,
}

#[cw_serde]
pub struct BridgesResponse {
    pub bridges: Vec<BridgeResponse>,
}

#[cw_serde]
pub struct ClaimResponse {
    pub claim_id: u64,
    pub creator: Addr,
    pub expected_sender: String,
    pub reward: Uint128,
    pub status: ClaimStatus,
    pub attestations: Vec<WitnessVote<ClaimVote>>,
}

#[cw_serde]
pub struct ClaimsResponse {
    pub claims: Vec<ClaimResponse>,
}

#[cw_serde]
pub struct NextClaimIdResponse {
    pub next_claim_id: u64,
}

#[cw_serde]
pub struct CreateAccountRequestResponse {
    pub destination: Addr,
    pub reward: Uint128,
    pub attestations: Vec<WitnessVote<AccountVote>>,
}

#[cw_serde]
pub struct AccountCreatedResponse {
    pub created: bool,
    /// Nonce the account was created with
    pub nonce: Option<u64>,
}
