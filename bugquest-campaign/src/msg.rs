use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary};

use crate::state::{ChallengeStatus, CompletionRecord};

#[cw_serde]
pub struct InstantiateMsg {
    /// Contract owner (pause control only; campaigns have their own authority)
    pub owner: String,
}

#[cw_serde]
pub struct CreateCollectionArgs {
    pub name: String,
    pub uri: String,
    pub reward_name: String,
    pub reward_uri: String,
}

/// `record_address`, when set, must equal the derived address of the
/// message's primary record or the call fails before touching state.
#[cw_serde]
pub enum ExecuteMsg {
    /// Found a campaign; the sender becomes its authority
    InitializeCampaign {
        campaign_id: u8,
        record_address: Option<HexBinary>,
    },
    /// Bind a reward collection contract to a campaign (campaign authority only)
    CreateCollection {
        campaign_id: u8,
        collection: String,
        args: CreateCollectionArgs,
        record_address: Option<HexBinary>,
    },
    StartChallenge {
        campaign_id: u8,
        challenge_id: u8,
        record_address: Option<HexBinary>,
    },
    /// Repeating this on a completed challenge is a no-op
    CompleteChallenge {
        campaign_id: u8,
        challenge_id: u8,
        record_address: Option<HexBinary>,
    },
    /// Mint the one reward a completed challenge unlocks.
    /// Name and URI default to the collection's reward templates.
    IssueReward {
        campaign_id: u8,
        challenge_id: u8,
        collection: String,
        reward_name: Option<String>,
        reward_uri: Option<String>,
        record_address: Option<HexBinary>,
    },
    /// Emit the sender's progress as a `player_progress` event
    GetPlayerProgress {
        campaign_id: u8,
        record_address: Option<HexBinary>,
    },
    /// Emit a `completed_challenge` event for the sender
    HasCompletedChallenge {
        campaign_id: u8,
        challenge_id: u8,
        record_address: Option<HexBinary>,
    },
    /// Emit a `campaign_stats` event (campaign authority only)
    GetCampaignStats {
        campaign_id: u8,
        record_address: Option<HexBinary>,
    },
    /// Pause all mutations (owner only)
    Pause {},
    /// Unpause (owner only)
    Unpause {},
}

/// Business key of a record, for address lookups
#[cw_serde]
pub enum RecordKey {
    Campaign {
        campaign_id: u8,
    },
    Collection {
        collection: String,
    },
    Completion {
        campaign_id: u8,
        player: String,
        challenge_id: u8,
    },
    Progress {
        campaign_id: u8,
        player: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Config)]
    Config {},
    #[returns(crate::state::Campaign)]
    Campaign { campaign_id: u8 },
    #[returns(crate::state::Collection)]
    Collection { collection: String },
    #[returns(Option<CompletionResponse>)]
    Completion {
        campaign_id: u8,
        player: String,
        challenge_id: u8,
    },
    #[returns(Option<PlayerProgressEvent>)]
    PlayerProgress { campaign_id: u8, player: String },
    /// Compute the address a record lives at
    #[returns(RecordAddressResponse)]
    RecordAddress { key: RecordKey },
    /// Today's featured challenge, rotating daily through 1..=MAX_CHALLENGE_ID
    #[returns(DailyChallengeResponse)]
    DailyChallenge {},
}

#[cw_serde]
pub struct CompletionResponse {
    pub record_address: HexBinary,
    pub status: ChallengeStatus,
    pub record: CompletionRecord,
}

#[cw_serde]
pub struct RecordAddressResponse {
    pub address: HexBinary,
}

#[cw_serde]
pub struct DailyChallengeResponse {
    pub challenge_id: u8,
    /// Days since the unix epoch
    pub day: u64,
}

// ─── Report payloads (set as response data) ─────────────────────────────────

#[cw_serde]
pub struct PlayerProgressEvent {
    pub player: Addr,
    pub campaign_id: u8,
    pub completed: Vec<u8>,
    pub total_completed: u32,
}

#[cw_serde]
pub struct CompletedChallengeEvent {
    pub player: Addr,
    pub campaign_id: u8,
    pub challenge_id: u8,
    pub completed: bool,
}

#[cw_serde]
pub struct CampaignStatsEvent {
    pub campaign_id: u8,
    pub total_completions: u32,
}

#[cw_serde]
pub struct MigrateMsg {}
