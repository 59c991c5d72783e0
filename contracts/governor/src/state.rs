use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:xchain-governor";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ADMIN: Item<Addr> = Item::new("admin");

/// witness address => registered
pub const WITNESSES: Map<&Addr, bool> = Map::new("witnesses");

pub const WITNESS_COUNT: Item<u32> = Item::new("witness_count");

/// Matching witness votes required for quorum
pub const THRESHOLD: Item<u32> = Item::new("threshold");

/// door address => allowed to release escrow
pub const MODULES: Map<&Addr, bool> = Map::new("modules");
