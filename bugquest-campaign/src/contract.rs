use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, Event, HexBinary, MessageInfo, Response,
    StdResult,
};
use cw2::set_contract_version;

use bugquest_reward_nft::state::Trait;

use crate::address::{
    campaign_address, collection_address, completion_address, ensure_address, progress_address,
    reward_token_id, RecordAddress,
};
use crate::error::ContractError;
use crate::helpers::{
    assert_campaign_authority, assert_not_paused, assert_owner, load_campaign, reject_funds,
    render_template, validate_challenge_id,
};
use crate::issuer::{CollectionMinter, RewardIssuer, RewardRequest};
use crate::msg::*;
use crate::state::*;

const CONTRACT_NAME: &str = "crates.io:bugquest-campaign";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const SECONDS_PER_DAY: u64 = 86_400;

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
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("owner", config.owner.as_str()))
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::InitializeCampaign {
            campaign_id,
            record_address,
        } => execute_initialize_campaign(deps, env, info, campaign_id, record_address),
        ExecuteMsg::CreateCollection {
            campaign_id,
            collection,
            args,
            record_address,
        } => execute_create_collection(
            deps,
            env,
            info,
            campaign_id,
            collection,
            args,
            record_address,
        ),
        ExecuteMsg::StartChallenge {
            campaign_id,
            challenge_id,
            record_address,
        } => execute_start_challenge(deps, env, info, campaign_id, challenge_id, record_address),
        ExecuteMsg::CompleteChallenge {
            campaign_id,
            challenge_id,
            record_address,
        } => {
            execute_complete_challenge(deps, env, info, campaign_id, challenge_id, record_address)
        }
        ExecuteMsg::IssueReward {
            campaign_id,
            challenge_id,
            collection,
            reward_name,
            reward_uri,
            record_address,
        } => execute_issue_reward(
            deps,
            env,
            info,
            &CollectionMinter,
            campaign_id,
            challenge_id,
            collection,
            reward_name,
            reward_uri,
            record_address,
        ),
        ExecuteMsg::GetPlayerProgress {
            campaign_id,
            record_address,
        } => execute_get_player_progress(deps, env, info, campaign_id, record_address),
        ExecuteMsg::HasCompletedChallenge {
            campaign_id,
            challenge_id,
            record_address,
        } => execute_has_completed_challenge(
            deps,
            env,
            info,
            campaign_id,
            challenge_id,
            record_address,
        ),
        ExecuteMsg::GetCampaignStats {
            campaign_id,
            record_address,
        } => execute_get_campaign_stats(deps, env, info, campaign_id, record_address),
        ExecuteMsg::Pause {} => execute_pause(deps, env, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, env, info),
    }
}

// ─── Execute: Campaign Registry ─────────────────────────────────────────────

pub fn execute_initialize_campaign(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    campaign_id: u8,
    record_address: Option<HexBinary>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let address = campaign_address(campaign_id);
    ensure_address(record_address.as_ref(), &address)?;
    assert_not_paused(deps.as_ref())?;

    if CAMPAIGNS.has(deps.storage, address.as_bytes()) {
        return Err(already_exists("campaign", &address));
    }

    let campaign = Campaign {
        campaign_id,
        authority: info.sender.clone(),
        total_completions: 0,
    };
    CAMPAIGNS.save(deps.storage, address.as_bytes(), &campaign)?;

    Ok(Response::new()
        .add_attribute("action", "initialize_campaign")
        .add_attribute("campaign_id", campaign_id.to_string())
        .add_attribute("authority", info.sender.as_str())
        .add_attribute("record_address", address.to_hex()))
}

// ─── Execute: Collection Registry ───────────────────────────────────────────

pub fn execute_create_collection(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    campaign_id: u8,
    collection: String,
    args: CreateCollectionArgs,
    record_address: Option<HexBinary>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let collection = deps.api.addr_validate(&collection)?;
    let address = collection_address(&collection);
    ensure_address(record_address.as_ref(), &address)?;
    assert_not_paused(deps.as_ref())?;

    let campaign = load_campaign(deps.as_ref(), campaign_id)?;
    assert_campaign_authority(&campaign, &info.sender)?;

    if COLLECTIONS.has(deps.storage, address.as_bytes()) {
        return Err(already_exists("collection", &address));
    }

    let record = Collection {
        collection: collection.clone(),
        campaign_id,
        creator: info.sender.clone(),
        name: args.name,
        uri: args.uri,
        reward_name: args.reward_name,
        reward_uri: args.reward_uri,
    };
    COLLECTIONS.save(deps.storage, address.as_bytes(), &record)?;

    Ok(Response::new()
        .add_attribute("action", "create_collection")
        .add_attribute("campaign_id", campaign_id.to_string())
        .add_attribute("collection", collection.as_str())
        .add_attribute("creator", info.sender.as_str()))
}

// ─── Execute: Completion Ledger ─────────────────────────────────────────────

pub fn execute_start_challenge(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    campaign_id: u8,
    challenge_id: u8,
    record_address: Option<HexBinary>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    validate_challenge_id(challenge_id)?;
    let address = completion_address(campaign_id, &info.sender, challenge_id);
    ensure_address(record_address.as_ref(), &address)?;
    assert_not_paused(deps.as_ref())?;

    load_campaign(deps.as_ref(), campaign_id)?;

    // Covers restarts after completion too: state is never reset.
    if COMPLETIONS.has(deps.storage, address.as_bytes()) {
        return Err(already_exists("completion", &address));
    }

    let record = CompletionRecord {
        player: info.sender.clone(),
        campaign_id,
        challenge_id,
        started_at: env.block.time,
        ended_at: None,
        completed_at: None,
        reward_token_id: None,
        reward_collection: None,
    };
    COMPLETIONS.save(deps.storage, address.as_bytes(), &record)?;

    Ok(Response::new()
        .add_attribute("action", "start_challenge")
        .add_attribute("campaign_id", campaign_id.to_string())
        .add_attribute("challenge_id", challenge_id.to_string())
        .add_attribute("player", info.sender.as_str())
        .add_attribute("started_at", env.block.time.seconds().to_string()))
}

pub fn execute_complete_challenge(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    campaign_id: u8,
    challenge_id: u8,
    record_address: Option<HexBinary>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    validate_challenge_id(challenge_id)?;
    let address = completion_address(campaign_id, &info.sender, challenge_id);
    ensure_address(record_address.as_ref(), &address)?;
    assert_not_paused(deps.as_ref())?;

    let mut campaign = load_campaign(deps.as_ref(), campaign_id)?;
    let mut record = COMPLETIONS
        .may_load(deps.storage, address.as_bytes())?
        .ok_or_else(|| not_found("completion", &address))?;

    let res = Response::new()
        .add_attribute("action", "complete_challenge")
        .add_attribute("campaign_id", campaign_id.to_string())
        .add_attribute("challenge_id", challenge_id.to_string())
        .add_attribute("player", info.sender.as_str());

    if record.is_completed() {
        return Ok(res.add_attribute("already_completed", "true"));
    }

    let now = env.block.time;
    record.ended_at = Some(now);
    record.completed_at = Some(now);
    COMPLETIONS.save(deps.storage, address.as_bytes(), &record)?;

    let progress_key = progress_address(campaign_id, &info.sender);
    let mut progress = PROGRESS
        .may_load(deps.storage, progress_key.as_bytes())?
        .unwrap_or_else(|| PlayerProgress {
            player: info.sender.clone(),
            campaign_id,
            completed: ChallengeSet::default(),
        });
    if progress.completed.insert(challenge_id) {
        campaign.total_completions += 1;
        CAMPAIGNS.save(
            deps.storage,
            campaign_address(campaign_id).as_bytes(),
            &campaign,
        )?;
    }
    PROGRESS.save(deps.storage, progress_key.as_bytes(), &progress)?;

    Ok(res
        .add_attribute("already_completed", "false")
        .add_attribute("completed_at", now.seconds().to_string())
        .add_attribute("total_completed", progress.completed.len().to_string()))
}

/// Issue the reward a completed challenge unlocks. The record is written
/// only after `issuer` accepts the request.
#[allow(clippy::too_many_arguments)]
pub fn execute_issue_reward<I: RewardIssuer>(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    issuer: &I,
    campaign_id: u8,
    challenge_id: u8,
    collection: String,
    reward_name: Option<String>,
    reward_uri: Option<String>,
    record_address: Option<HexBinary>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    validate_challenge_id(challenge_id)?;
    let collection = deps.api.addr_validate(&collection)?;
    let address = completion_address(campaign_id, &info.sender, challenge_id);
    ensure_address(record_address.as_ref(), &address)?;
    assert_not_paused(deps.as_ref())?;

    load_campaign(deps.as_ref(), campaign_id)?;
    let mut record = COMPLETIONS
        .may_load(deps.storage, address.as_bytes())?
        .ok_or_else(|| not_found("completion", &address))?;
    if !record.is_completed() {
        return Err(ContractError::NotCompleted { challenge_id });
    }

    let bound = COLLECTIONS
        .may_load(deps.storage, collection_address(&collection).as_bytes())?
        .filter(|c| c.campaign_id == campaign_id)
        .ok_or_else(|| ContractError::InvalidCollection {
            collection: collection.to_string(),
        })?;

    if let Some(token_id) = &record.reward_token_id {
        return Err(ContractError::AlreadyRewarded {
            token_id: token_id.clone(),
        });
    }

    let request = RewardRequest {
        collection: bound.collection.clone(),
        owner: info.sender.clone(),
        token_id: reward_token_id(&address),
        name: reward_name.unwrap_or_else(|| render_template(&bound.reward_name, challenge_id)),
        uri: reward_uri.unwrap_or_else(|| render_template(&bound.reward_uri, challenge_id)),
        attributes: vec![
            reward_trait("Creator", bound.creator.as_str()),
            reward_trait("Minter", info.sender.as_str()),
            reward_trait("Collection", bound.collection.as_str()),
            reward_trait("Mint Timestamp", &env.block.time.seconds().to_string()),
            reward_trait("Challenge ID", &challenge_id.to_string()),
        ],
    };
    let issued = issuer.issue(&request)?;

    record.reward_token_id = Some(issued.token_id.clone());
    record.reward_collection = Some(bound.collection.clone());
    COMPLETIONS.save(deps.storage, address.as_bytes(), &record)?;

    Ok(Response::new()
        .add_messages(issued.messages)
        .add_attribute("action", "issue_reward")
        .add_attribute("campaign_id", campaign_id.to_string())
        .add_attribute("challenge_id", challenge_id.to_string())
        .add_attribute("player", info.sender.as_str())
        .add_attribute("collection", bound.collection.as_str())
        .add_attribute("token_id", issued.token_id))
}

// ─── Execute: Reports ───────────────────────────────────────────────────────

pub fn execute_get_player_progress(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    campaign_id: u8,
    record_address: Option<HexBinary>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let address = progress_address(campaign_id, &info.sender);
    ensure_address(record_address.as_ref(), &address)?;

    let progress = PROGRESS
        .may_load(deps.storage, address.as_bytes())?
        .ok_or_else(|| not_found("progress", &address))?;
    let report = progress_report(progress);

    let completed = report
        .completed
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let event = Event::new("player_progress")
        .add_attribute("player", report.player.as_str())
        .add_attribute("campaign_id", campaign_id.to_string())
        .add_attribute("completed", completed)
        .add_attribute("total_completed", report.total_completed.to_string());

    Ok(Response::new()
        .add_attribute("action", "get_player_progress")
        .add_event(event)
        .set_data(to_json_binary(&report)?))
}

/// Does not range-check `challenge_id`; an out-of-range id simply reports false.
pub fn execute_has_completed_challenge(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    campaign_id: u8,
    challenge_id: u8,
    record_address: Option<HexBinary>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let address = progress_address(campaign_id, &info.sender);
    ensure_address(record_address.as_ref(), &address)?;

    let progress = PROGRESS
        .may_load(deps.storage, address.as_bytes())?
        .ok_or_else(|| not_found("progress", &address))?;
    let report = CompletedChallengeEvent {
        player: info.sender.clone(),
        campaign_id,
        challenge_id,
        completed: progress.completed.contains(challenge_id),
    };

    let event = Event::new("completed_challenge")
        .add_attribute("player", info.sender.as_str())
        .add_attribute("campaign_id", campaign_id.to_string())
        .add_attribute("challenge_id", challenge_id.to_string())
        .add_attribute("completed", report.completed.to_string());

    Ok(Response::new()
        .add_attribute("action", "has_completed_challenge")
        .add_event(event)
        .set_data(to_json_binary(&report)?))
}

pub fn execute_get_campaign_stats(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    campaign_id: u8,
    record_address: Option<HexBinary>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    ensure_address(record_address.as_ref(), &campaign_address(campaign_id))?;

    let campaign = load_campaign(deps.as_ref(), campaign_id)?;
    assert_campaign_authority(&campaign, &info.sender)?;

    let report = CampaignStatsEvent {
        campaign_id,
        total_completions: campaign.total_completions,
    };
    let event = Event::new("campaign_stats")
        .add_attribute("campaign_id", campaign_id.to_string())
        .add_attribute("total_completions", report.total_completions.to_string());

    Ok(Response::new()
        .add_attribute("action", "get_campaign_stats")
        .add_event(event)
        .set_data(to_json_binary(&report)?))
}

// ─── Execute: Admin ─────────────────────────────────────────────────────────

pub fn execute_pause(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        c.paused = true;
        Ok(c)
    })?;

    Ok(Response::new().add_attribute("action", "pause"))
}

pub fn execute_unpause(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    if !config.paused {
        return Err(ContractError::NotPaused);
    }

    CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        c.paused = false;
        Ok(c)
    })?;

    Ok(Response::new().add_attribute("action", "unpause"))
}

fn already_exists(kind: &str, address: &RecordAddress) -> ContractError {
    ContractError::AlreadyExists {
        kind: kind.to_string(),
        address: address.to_hex(),
    }
}

fn not_found(kind: &str, address: &RecordAddress) -> ContractError {
    ContractError::RecordNotFound {
        kind: kind.to_string(),
        address: address.to_hex(),
    }
}

fn reward_trait(trait_type: &str, value: &str) -> Trait {
    Trait {
        trait_type: trait_type.to_string(),
        value: value.to_string(),
    }
}

fn progress_report(progress: PlayerProgress) -> PlayerProgressEvent {
    PlayerProgressEvent {
        player: progress.player,
        campaign_id: progress.campaign_id,
        completed: progress.completed.to_vec(),
        total_completed: progress.completed.len(),
    }
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::Campaign { campaign_id } => query_campaign(deps, campaign_id),
        QueryMsg::Collection { collection } => query_collection(deps, collection),
        QueryMsg::Completion {
            campaign_id,
            player,
            challenge_id,
        } => query_completion(deps, campaign_id, player, challenge_id),
        QueryMsg::PlayerProgress {
            campaign_id,
            player,
        } => query_player_progress(deps, campaign_id, player),
        QueryMsg::RecordAddress { key } => query_record_address(deps, key),
        QueryMsg::DailyChallenge {} => query_daily_challenge(env),
    }
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&CONFIG.load(deps.storage)?)
}

pub fn query_campaign(deps: Deps, campaign_id: u8) -> StdResult<Binary> {
    let campaign = CAMPAIGNS.load(deps.storage, campaign_address(campaign_id).as_bytes())?;
    to_json_binary(&campaign)
}

pub fn query_collection(deps: Deps, collection: String) -> StdResult<Binary> {
    let collection = deps.api.addr_validate(&collection)?;
    let record = COLLECTIONS.load(deps.storage, collection_address(&collection).as_bytes())?;
    to_json_binary(&record)
}

pub fn query_completion(
    deps: Deps,
    campaign_id: u8,
    player: String,
    challenge_id: u8,
) -> StdResult<Binary> {
    let player = deps.api.addr_validate(&player)?;
    let address = completion_address(campaign_id, &player, challenge_id);
    let response = COMPLETIONS
        .may_load(deps.storage, address.as_bytes())?
        .map(|record| CompletionResponse {
            record_address: address.to_hex_binary(),
            status: record.status(),
            record,
        });
    to_json_binary(&response)
}

pub fn query_player_progress(deps: Deps, campaign_id: u8, player: String) -> StdResult<Binary> {
    let player = deps.api.addr_validate(&player)?;
    let progress = PROGRESS
        .may_load(deps.storage, progress_address(campaign_id, &player).as_bytes())?
        .map(progress_report);
    to_json_binary(&progress)
}

pub fn query_record_address(deps: Deps, key: RecordKey) -> StdResult<Binary> {
    let address = match key {
        RecordKey::Campaign { campaign_id } => campaign_address(campaign_id),
        RecordKey::Collection { collection } => {
            collection_address(&deps.api.addr_validate(&collection)?)
        }
        RecordKey::Completion {
            campaign_id,
            player,
            challenge_id,
        } => completion_address(campaign_id, &deps.api.addr_validate(&player)?, challenge_id),
        RecordKey::Progress {
            campaign_id,
            player,
        } => progress_address(campaign_id, &deps.api.addr_validate(&player)?),
    };
    to_json_binary(&RecordAddressResponse {
        address: address.to_hex_binary(),
    })
}

pub fn query_daily_challenge(env: Env) -> StdResult<Binary> {
    let day = env.block.time.seconds() / SECONDS_PER_DAY;
    let challenge_id = (day % MAX_CHALLENGE_ID as u64) as u8 + 1;
    to_json_binary(&DailyChallengeResponse { challenge_id, day })
}

// ─── Migrate ────────────────────────────────────────────────────────────────

pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
