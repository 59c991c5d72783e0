//! Bridge configuration and classification.
//!
//! A bridge is identified by its two doors and the asset issued on each
//! side. From this door's point of view every accepted bridge has exactly
//! one shape:
//!
//! | Kind           | Issuers             | This door   | Asset moved                  |
//! |----------------|---------------------|-------------|------------------------------|
//! | `Native`       | both native markers | either side | native denom                 |
//! | `LockingToken` | CW20 on locking     | locking     | existing CW20 (locked)       |
//! | `IssuingToken` | CW20 on issuing     | issuing     | wrapped CW20 (minted/burned) |

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use thiserror::Error;

/// Asset issued on one side of a bridge.
#[cw_serde]
pub struct Issue {
    /// Issuing account or token contract. `None` is the native marker.
    pub issuer: Option<String>,
    /// Currency code (the CW20 symbol for token issues)
    pub currency: String,
}

impl Issue {
    pub fn native(currency: impl Into<String>) -> Self {
        Self {
            issuer: None,
            currency: currency.into(),
        }
    }

    pub fn token(issuer: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            issuer: Some(issuer.into()),
            currency: currency.into(),
        }
    }

    pub fn is_native(&self) -> bool {
        self.issuer.is_none()
    }
}

/// Bridge configuration. Immutable once registered.
#[cw_serde]
pub struct XChainBridge {
    pub locking_door: String,
    pub locking_issue: Issue,
    pub issuing_door: String,
    pub issuing_issue: Issue,
}

/// Per-bridge parameters supplied at creation.
#[cw_serde]
pub struct BridgeParams {
    /// Minimum amount for account creation (native bridges only, must be 0 otherwise)
    pub min_create_amount: Uint128,
    /// Minimum reward escrowed per claim or account creation
    pub signature_reward: Uint128,
}

#[cw_serde]
pub enum BridgeKind {
    Native,
    LockingToken,
    IssuingToken,
}

impl BridgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BridgeKind::Native => "native",
            BridgeKind::LockingToken => "locking_token",
            BridgeKind::IssuingToken => "issuing_token",
        }
    }
}

/// Reason a bridge configuration is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("issuer marker mismatch")]
    IssuerMarker,

    #[error("issuing door is not the trusted native issuing door")]
    UntrustedIssuingDoor,

    #[error("native bridge requires a non-zero min create amount")]
    ZeroCreateAmount,

    #[error("door/issuer mismatch")]
    DoorIssuerMismatch,

    #[error("currency does not match token symbol")]
    CurrencySymbolMismatch,

    #[error("token bridge cannot have a min create amount")]
    CreateAmountOnTokenBridge,

    #[error("door is neither the locking nor the issuing door")]
    UnrecognizedRole,
}

/// Classify `bridge` for the door at `door`.
///
/// Token symbol checks need a querier and are left to the caller for
/// `LockingToken` results.
pub fn classify(
    bridge: &XChainBridge,
    params: &BridgeParams,
    door: &Addr,
    trusted_issuing_door: &str,
) -> Result<BridgeKind, ConfigViolation> {
    let is_locking = bridge.locking_door == door.as_str();
    let is_issuing = bridge.issuing_door == door.as_str();
    let locking_native = bridge.locking_issue.is_native();
    let issuing_native = bridge.issuing_issue.is_native();

    if locking_native || issuing_native {
        if !(locking_native && issuing_native) {
            return Err(ConfigViolation::IssuerMarker);
        }
        if !is_locking && !is_issuing {
            return Err(ConfigViolation::UnrecognizedRole);
        }
        if bridge.issuing_door != trusted_issuing_door {
            return Err(ConfigViolation::UntrustedIssuingDoor);
        }
        if params.min_create_amount.is_zero() {
            return Err(ConfigViolation::ZeroCreateAmount);
        }
        return Ok(BridgeKind::Native);
    }

    if !params.min_create_amount.is_zero() {
        return Err(ConfigViolation::CreateAmountOnTokenBridge);
    }

    if is_locking {
        if bridge.locking_issue.issuer.as_deref() == Some(bridge.locking_door.as_str()) {
            return Err(ConfigViolation::DoorIssuerMismatch);
        }
        Ok(BridgeKind::LockingToken)
    } else if is_issuing {
        if bridge.issuing_issue.issuer.as_deref() != Some(bridge.issuing_door.as_str()) {
            return Err(ConfigViolation::DoorIssuerMismatch);
        }
        Ok(BridgeKind::IssuingToken)
    } else {
        Err(ConfigViolation::UnrecognizedRole)
    }
}
