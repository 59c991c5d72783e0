use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: caller is not an enabled module")]
    NotModule,

    #[error("Witness already registered: {address}")]
    WitnessAlreadyRegistered { address: String },

    #[error("Witness not registered: {address}")]
    WitnessNotRegistered { address: String },

    #[error("Invalid threshold {threshold}: must be between 1 and {witnesses}")]
    InvalidThreshold { threshold: u32, witnesses: u32 },
}
