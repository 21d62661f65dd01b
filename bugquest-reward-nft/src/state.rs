use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use cw_storage_plus::{Item, Map};

/// Collection-level configuration
#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Only this address may mint; normally the campaign contract
    pub minter: Addr,
    pub name: String,
    pub symbol: String,
    /// Soulbound collections reject every transfer and send
    pub soulbound: bool,
}

/// Display trait attached to a reward (CW-721 metadata convention)
#[cw_serde]
pub struct Trait {
    pub trait_type: String,
    pub value: String,
}

#[cw_serde]
pub struct TokenData {
    pub owner: Addr,
    pub name: String,
    pub token_uri: Option<String>,
    pub attributes: Vec<Trait>,
    /// Block time of the mint
    pub minted_at: Timestamp,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const TOKEN_COUNT: Item<u64> = Item::new("token_count");

/// token_id -> TokenData. Token ids are chosen by the minter.
pub const TOKENS: Map<&str, TokenData> = Map::new("reward_tokens");

/// (owner_addr, token_id) -> bool
pub const OWNER_TOKENS: Map<(&Addr, &str), bool> = Map::new("owner_tokens");
