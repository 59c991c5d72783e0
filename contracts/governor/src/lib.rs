//! XChain Governor - Governing Module for Bridge Doors
//!
//! The governor is the authority every door trusts:
//! - owns the witness set and the quorum threshold doors read on each vote
//! - holds the value escrowed by doors (commits, rewards, account creates)
//! - releases escrow only when an enabled door module asks for it
//! - lets governance dispatch owner-only calls (pause, create bridge) to doors

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
