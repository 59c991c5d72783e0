//! XChain Door - Witness-Attested Cross-Chain Bridge for CosmWasm
//!
//! A door is one side of a bridge between two chains. Value committed on one
//! side is credited on the other once a quorum of witnesses attests to it.
//!
//! # Claim Flow
//! 1. The receiver reserves a claim id on the receiving door (`CreateClaimId`)
//! 2. The sender commits on the sending door, quoting that claim id
//! 3. Witnesses attest the commit on the receiving door
//! 4. On quorum the receiver is credited and the reward is split among the
//!    witnesses whose vote matched
//!
//! # Account Creation Flow (native bridges)
//! 1. `CreateAccountCommit` on the sending door escrows amount and reward
//! 2. Witnesses attest `(destination, amount, nonce)` on the receiving door
//! 3. On quorum the destination is funded; it can never be created again
//!
//! # Custody
//! The governor contract owns the door, decides who the witnesses are, and
//! holds every escrowed coin. The door releases funds through it.

pub mod authority;
pub mod bridge;
pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod hash;
pub mod msg;
mod query;
pub mod reward;
pub mod state;
pub mod tally;
pub mod token;

pub use crate::error::ContractError;
pub use crate::hash::{compute_bridge_id, keccak256, BridgeId};
