use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use cw_storage_plus::{Item, Map};

/// Challenge ids run 1..=MAX_CHALLENGE_ID
pub const MAX_CHALLENGE_ID: u8 = 20;

/// Contract-level configuration
#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub paused: bool,
}

#[cw_serde]
pub struct Campaign {
    pub campaign_id: u8,
    /// Founder of the campaign; fixed at creation
    pub authority: Addr,
    /// Completion records under this campaign with `completed_at` set
    pub total_completions: u32,
}

/// A reward collection bound to a campaign. Immutable once written.
#[cw_serde]
pub struct Collection {
    pub collection: Addr,
    pub campaign_id: u8,
    pub creator: Addr,
    pub name: String,
    pub uri: String,
    /// Default reward name; `{challenge_id}` is substituted at issuance
    pub reward_name: String,
    /// Default reward URI; `{challenge_id}` is substituted at issuance
    pub reward_uri: String,
}

/// Lifecycle of one player on one challenge. Optional fields only ever go
/// from unset to set.
#[cw_serde]
pub struct CompletionRecord {
    pub player: Addr,
    pub campaign_id: u8,
    pub challenge_id: u8,
    pub started_at: Timestamp,
    pub ended_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub reward_token_id: Option<String>,
    pub reward_collection: Option<Addr>,
}

#[cw_serde]
pub enum ChallengeStatus {
    Started,
    Completed,
    Rewarded,
}

impl CompletionRecord {
    pub fn status(&self) -> ChallengeStatus {
        if self.reward_token_id.is_some() {
            ChallengeStatus::Rewarded
        } else if self.completed_at.is_some() {
            ChallengeStatus::Completed
        } else {
            ChallengeStatus::Started
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// 256-bit set of challenge ids
#[cw_serde]
#[derive(Default, Copy)]
pub struct ChallengeSet {
    bits: [u8; 32],
}

impl ChallengeSet {
    /// Returns true if the id was not already present.
    pub fn insert(&mut self, challenge_id: u8) -> bool {
        let (byte, mask) = Self::slot(challenge_id);
        let fresh = self.bits[byte] & mask == 0;
        self.bits[byte] |= mask;
        fresh
    }

    pub fn contains(&self, challenge_id: u8) -> bool {
        let (byte, mask) = Self::slot(challenge_id);
        self.bits[byte] & mask != 0
    }

    pub fn len(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|b| *b == 0)
    }

    /// Ascending
    pub fn to_vec(&self) -> Vec<u8> {
        (0..=u8::MAX).filter(|id| self.contains(*id)).collect()
    }

    fn slot(challenge_id: u8) -> (usize, u8) {
        ((challenge_id / 8) as usize, 1 << (challenge_id % 8))
    }
}

#[cw_serde]
pub struct PlayerProgress {
    pub player: Addr,
    pub campaign_id: u8,
    pub completed: ChallengeSet,
}

pub const CONFIG: Item<Config> = Item::new("config");

// All record maps are keyed by the derived record address (see `address`).

pub const CAMPAIGNS: Map<&[u8], Campaign> = Map::new("campaigns");
pub const COLLECTIONS: Map<&[u8], Collection> = Map::new("collections");
pub const COMPLETIONS: Map<&[u8], CompletionRecord> = Map::new("completions");
pub const PROGRESS: Map<&[u8], PlayerProgress> = Map::new("progress");
