use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: only {role} can perform this action")]
    Unauthorized { role: String },

    #[error("contract is paused")]
    Paused,

    #[error("contract is not paused")]
    NotPaused,

    #[error("{kind} record already exists at {address}")]
    AlreadyExists { kind: String, address: String },

    #[error("{kind} record not found at {address}")]
    RecordNotFound { kind: String, address: String },

    #[error("campaign {campaign_id} not found")]
    CampaignNotFound { campaign_id: u8 },

    #[error("invalid challenge id {challenge_id}: expected 1..={max}")]
    InvalidChallengeId { challenge_id: u8, max: u8 },

    #[error("collection {collection} is not bound to this campaign")]
    InvalidCollection { collection: String },

    #[error("challenge {challenge_id} has not been completed")]
    NotCompleted { challenge_id: u8 },

    #[error("reward already issued: {token_id}")]
    AlreadyRewarded { token_id: String },

    #[error("record address mismatch: expected {expected}, supplied {supplied}")]
    AddressMismatch { expected: String, supplied: String },

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,
}
