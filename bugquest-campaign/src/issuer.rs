//! Seam between the completion ledger and whatever actually mints reward
//! tokens. The ledger hands over a fully-formed request and only records the
//! token once the issuer has accepted it.

use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, WasmMsg};

use bugquest_reward_nft::msg::ExecuteMsg as RewardExecuteMsg;
use bugquest_reward_nft::state::Trait;

use crate::error::ContractError;

#[derive(Clone, Debug, PartialEq)]
pub struct RewardRequest {
    pub collection: Addr,
    pub owner: Addr,
    pub token_id: String,
    pub name: String,
    pub uri: String,
    pub attributes: Vec<Trait>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IssuedReward {
    pub token_id: String,
    /// Messages the host must run for the mint to happen
    pub messages: Vec<CosmosMsg>,
}

pub trait RewardIssuer {
    fn issue(&self, request: &RewardRequest) -> Result<IssuedReward, ContractError>;
}

/// Mints through a `bugquest-reward-nft` collection whose minter is this contract.
#[derive(Clone, Copy, Debug, Default)]
pub struct CollectionMinter;

impl RewardIssuer for CollectionMinter {
    fn issue(&self, request: &RewardRequest) -> Result<IssuedReward, ContractError> {
        let mint = RewardExecuteMsg::Mint {
            token_id: request.token_id.clone(),
            owner: request.owner.to_string(),
            name: request.name.clone(),
            token_uri: Some(request.uri.clone()),
            attributes: request.attributes.clone(),
        };
        let msg = WasmMsg::Execute {
            contract_addr: request.collection.to_string(),
            msg: to_json_binary(&mint)?,
            funds: vec![],
        };

        Ok(IssuedReward {
            token_id: request.token_id.clone(),
            messages: vec![msg.into()],
        })
    }
}
