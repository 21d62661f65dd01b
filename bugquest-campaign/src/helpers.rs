use cosmwasm_std::{Addr, Deps, MessageInfo};

use crate::address::campaign_address;
use crate::error::ContractError;
use crate::state::{Campaign, CAMPAIGNS, CONFIG, MAX_CHALLENGE_ID};

pub fn assert_owner(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.owner {
        return Err(ContractError::Unauthorized {
            role: "owner".to_string(),
        });
    }
    Ok(())
}

pub fn assert_not_paused(deps: Deps) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::Paused);
    }
    Ok(())
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}

/// Pure range check; runs before any record lookup.
pub fn validate_challenge_id(challenge_id: u8) -> Result<(), ContractError> {
    if !(1..=MAX_CHALLENGE_ID).contains(&challenge_id) {
        return Err(ContractError::InvalidChallengeId {
            challenge_id,
            max: MAX_CHALLENGE_ID,
        });
    }
    Ok(())
}

pub fn load_campaign(deps: Deps, campaign_id: u8) -> Result<Campaign, ContractError> {
    CAMPAIGNS
        .may_load(deps.storage, campaign_address(campaign_id).as_bytes())?
        .ok_or(ContractError::CampaignNotFound { campaign_id })
}

pub fn assert_campaign_authority(campaign: &Campaign, sender: &Addr) -> Result<(), ContractError> {
    if *sender != campaign.authority {
        return Err(ContractError::Unauthorized {
            role: "campaign authority".to_string(),
        });
    }
    Ok(())
}

/// Fill `{challenge_id}` into a collection's reward template.
pub fn render_template(template: &str, challenge_id: u8) -> String {
    template.replace("{challenge_id}", &challenge_id.to_string())
}
