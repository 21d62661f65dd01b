use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult,
    WasmMsg,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::helpers::{
    assert_minter, assert_owner, assert_transferable, load_owned_token, reject_funds,
};
use crate::msg::*;
use crate::state::*;

const CONTRACT_NAME: &str = "crates.io:bugquest-reward-nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_QUERY_LIMIT: u32 = 30;
const MAX_QUERY_LIMIT: u32 = 100;

// ─── Instantiate ────────────────────────────────────────────────────────────

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        minter: deps.api.addr_validate(&msg.minter)?,
        name: msg.name,
        symbol: msg.symbol,
        soulbound: msg.soulbound,
    };
    CONFIG.save(deps.storage, &config)?;
    TOKEN_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("minter", config.minter.as_str())
        .add_attribute("soulbound", config.soulbound.to_string()))
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint {
            token_id,
            owner,
            name,
            token_uri,
            attributes,
        } => execute_mint(deps, env, info, token_id, owner, name, token_uri, attributes),
        ExecuteMsg::TransferNft {
            recipient,
            token_id,
        } => execute_transfer_nft(deps, env, info, recipient, token_id),
        ExecuteMsg::SendNft {
            contract,
            token_id,
            msg,
        } => execute_send_nft(deps, env, info, contract, token_id, msg),
        ExecuteMsg::Burn { token_id } => execute_burn(deps, env, info, token_id),
        ExecuteMsg::UpdateMinter { minter } => execute_update_minter(deps, env, info, minter),
    }
}

// ─── Execute: Minting ───────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_id: String,
    owner: String,
    name: String,
    token_uri: Option<String>,
    attributes: Vec<Trait>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_minter(deps.as_ref(), &info.sender)?;

    if TOKENS.has(deps.storage, &token_id) {
        return Err(ContractError::TokenExists { token_id });
    }

    let owner = deps.api.addr_validate(&owner)?;
    let data = TokenData {
        owner: owner.clone(),
        name,
        token_uri,
        attributes,
        minted_at: env.block.time,
    };
    TOKENS.save(deps.storage, &token_id, &data)?;
    OWNER_TOKENS.save(deps.storage, (&owner, &token_id), &true)?;
    TOKEN_COUNT.update(deps.storage, |count| -> StdResult<_> { Ok(count + 1) })?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("token_id", &token_id)
        .add_attribute("owner", owner.as_str()))
}

// ─── Execute: Transfers ─────────────────────────────────────────────────────

pub fn execute_transfer_nft(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    token_id: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let recipient = deps.api.addr_validate(&recipient)?;
    let previous = reassign(deps, &info.sender, &token_id, &recipient)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_nft")
        .add_attribute("token_id", &token_id)
        .add_attribute("from", previous.as_str())
        .add_attribute("to", recipient.as_str()))
}

/// Hand the token to `contract`, then notify it with a `Cw721ReceiveMsg`.
pub fn execute_send_nft(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    contract: String,
    token_id: String,
    msg: Binary,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let receiver = deps.api.addr_validate(&contract)?;
    let previous = reassign(deps, &info.sender, &token_id, &receiver)?;

    let notify = WasmMsg::Execute {
        contract_addr: receiver.to_string(),
        msg: to_json_binary(&cw721::receiver::Cw721ReceiveMsg {
            sender: info.sender.to_string(),
            token_id: token_id.clone(),
            msg,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(notify)
        .add_attribute("action", "send_nft")
        .add_attribute("token_id", &token_id)
        .add_attribute("from", previous.as_str())
        .add_attribute("to", receiver.as_str()))
}

/// Move `token_id` from `sender` to `to`, keeping the owner index in step.
/// Returns the previous owner.
fn reassign(
    deps: DepsMut,
    sender: &Addr,
    token_id: &str,
    to: &Addr,
) -> Result<Addr, ContractError> {
    assert_transferable(deps.as_ref())?;
    let mut token = load_owned_token(deps.as_ref(), token_id, sender)?;
    let previous = std::mem::replace(&mut token.owner, to.clone());

    OWNER_TOKENS.remove(deps.storage, (&previous, token_id));
    OWNER_TOKENS.save(deps.storage, (to, token_id), &true)?;
    TOKENS.save(deps.storage, token_id, &token)?;
    Ok(previous)
}

pub fn execute_burn(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_id: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let token = load_owned_token(deps.as_ref(), &token_id, &info.sender)?;

    OWNER_TOKENS.remove(deps.storage, (&token.owner, &token_id));
    TOKENS.remove(deps.storage, &token_id);
    TOKEN_COUNT.update(deps.storage, |count| -> StdResult<_> {
        Ok(count.saturating_sub(1))
    })?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("token_id", &token_id))
}

// ─── Execute: Admin ─────────────────────────────────────────────────────────

pub fn execute_update_minter(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    minter: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    let minter = deps.api.addr_validate(&minter)?;
    let mut config = CONFIG.load(deps.storage)?;
    let previous = std::mem::replace(&mut config.minter, minter.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_minter")
        .add_attribute("from", previous.as_str())
        .add_attribute("to", minter.as_str()))
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::NftInfo { token_id } => query_nft_info(deps, token_id),
        QueryMsg::OwnerOf { token_id } => query_owner_of(deps, token_id),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => query_tokens(deps, owner, start_after, limit),
        QueryMsg::AllTokens { start_after, limit } => query_all_tokens(deps, start_after, limit),
        QueryMsg::NumTokens {} => query_num_tokens(deps),
    }
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&CONFIG.load(deps.storage)?)
}

pub fn query_nft_info(deps: Deps, token_id: String) -> StdResult<Binary> {
    let token = TOKENS.load(deps.storage, &token_id)?;
    to_json_binary(&NftInfoResponse {
        token_id,
        owner: token.owner.to_string(),
        name: token.name,
        token_uri: token.token_uri,
        attributes: token.attributes,
        minted_at: token.minted_at,
    })
}

pub fn query_owner_of(deps: Deps, token_id: String) -> StdResult<Binary> {
    let owner = TOKENS.load(deps.storage, &token_id)?.owner;
    to_json_binary(&OwnerOfResponse {
        owner: owner.into_string(),
    })
}

pub fn query_tokens(
    deps: Deps,
    owner: String,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let owner = deps.api.addr_validate(&owner)?;
    let (start, limit) = page(start_after.as_deref(), limit);
    let tokens = OWNER_TOKENS
        .prefix(&owner)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&TokensResponse { tokens })
}

pub fn query_all_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let (start, limit) = page(start_after.as_deref(), limit);
    let tokens = TOKENS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&TokensResponse { tokens })
}

pub fn query_num_tokens(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&NumTokensResponse {
        count: TOKEN_COUNT.load(deps.storage)?,
    })
}

fn page(start_after: Option<&str>, limit: Option<u32>) -> (Option<Bound<'_, &str>>, usize) {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    (start_after.map(Bound::exclusive), limit)
}

// ─── Migrate ────────────────────────────────────────────────────────────────

pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
