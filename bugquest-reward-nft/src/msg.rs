use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Timestamp;

use crate::state::Trait;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub minter: String,
    pub name: String,
    pub symbol: String,
    pub soulbound: bool,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint a reward with a caller-chosen token id (minter only)
    Mint {
        token_id: String,
        owner: String,
        name: String,
        token_uri: Option<String>,
        attributes: Vec<Trait>,
    },
    /// Transfer a reward; fails on a soulbound collection
    TransferNft { recipient: String, token_id: String },
    /// Send a reward to a contract; fails on a soulbound collection
    SendNft {
        contract: String,
        token_id: String,
        msg: cosmwasm_std::Binary,
    },
    /// Destroy a reward (token owner only)
    Burn { token_id: String },
    /// Point minting at a new address, e.g. a redeployed campaign (owner only)
    UpdateMinter { minter: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Config)]
    Config {},
    #[returns(NftInfoResponse)]
    NftInfo { token_id: String },
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: String },
    /// Token ids held by an address
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(TokensResponse)]
    AllTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Number of live (unburned) tokens
    #[returns(NumTokensResponse)]
    NumTokens {},
}

#[cw_serde]
pub struct NftInfoResponse {
    pub token_id: String,
    pub owner: String,
    pub name: String,
    pub token_uri: Option<String>,
    pub attributes: Vec<Trait>,
    pub minted_at: Timestamp,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<String>,
}

#[cw_serde]
pub struct NumTokensResponse {
    pub count: u64,
}

#[cw_serde]
pub struct MigrateMsg {}
