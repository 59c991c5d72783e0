//! Common - Shared Types for XChain Bridge Contracts
//!
//! This package provides the asset definitions and the governing module's
//! message interface used by both the door and the governor contracts.

pub mod asset;
pub mod governor;

pub use asset::{Asset, AssetInfo};
