//! Error types for the XChain door contract
//!
//! Every error aborts the whole transaction, so a rejected call leaves
//! bridges, claims, tallies and balances exactly as they were.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

use crate::bridge::ConfigViolation;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Invalid bridge config: {reason}")]
    InvalidBridgeConfig { reason: ConfigViolation },

    #[error("Bridge already registered")]
    AlreadyRegistered,

    #[error("Token already registered: {token}")]
    TokenAlreadyRegistered { token: String },

    #[error("Bridge not found")]
    BridgeNotFound,

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller is not a witness")]
    NotAWitness,

    #[error("Unauthorized: only the claim creator can claim")]
    NotClaimCreator,

    #[error("Unauthorized: only owner can perform this action")]
    NotOwner,

    // ========================================================================
    // Claim & Account State Errors
    // ========================================================================

    #[error("Claim not found: {claim_id}")]
    ClaimNotFound { claim_id: u64 },

    #[error("Claim not decided: {claim_id}")]
    ClaimNotDecided { claim_id: u64 },

    #[error("Account already created: {destination}")]
    AlreadyCreated { destination: String },

    #[error("Amount mismatch: expected {expected}, got {got}")]
    AmountMismatch { expected: Uint128, got: Uint128 },

    #[error("Sender mismatch: expected {expected}, got {got}")]
    SenderMismatch { expected: String, got: String },

    #[error("Cannot create accounts on a token bridge")]
    CreateAccountOnTokenBridge,

    #[error("Wrong asset: expected {expected}, got {got}")]
    WrongAsset { expected: String, got: String },

    // ========================================================================
    // Funds Errors
    // ========================================================================

    #[error("Insufficient amount sent: expected {expected}, got {got}")]
    InsufficientAmountSent { expected: Uint128, got: Uint128 },

    #[error("Insufficient signature reward: required {required}, got {got}")]
    InsufficientSignatureReward { required: Uint128, got: Uint128 },

    #[error("Insufficient create amount: required {required}, got {got}")]
    InsufficientCreateAmount { required: Uint128, got: Uint128 },

    #[error("Insufficient reward: required {required}, got {got}")]
    InsufficientReward { required: Uint128, got: Uint128 },

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Door is paused")]
    Paused,

    // ========================================================================
    // Reply Errors
    // ========================================================================

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("Wrapped token address missing from instantiate reply")]
    WrappedTokenMissing,
}
