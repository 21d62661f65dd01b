use cosmwasm_std::{Addr, Deps, MessageInfo};

use crate::error::ContractError;
use crate::state::{TokenData, CONFIG, TOKENS};

pub fn assert_owner(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.owner {
        return Err(ContractError::Unauthorized {
            role: "owner".to_string(),
        });
    }
    Ok(())
}

pub fn assert_minter(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.minter {
        return Err(ContractError::Unauthorized {
            role: "minter".to_string(),
        });
    }
    Ok(())
}

/// Soulbound is a collection-wide property, checked on every transfer/send path.
pub fn assert_transferable(deps: Deps) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.soulbound {
        return Err(ContractError::Soulbound);
    }
    Ok(())
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}

/// Load a token the sender must own.
pub fn load_owned_token(
    deps: Deps,
    token_id: &str,
    sender: &Addr,
) -> Result<TokenData, ContractError> {
    let token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| ContractError::TokenNotFound {
            token_id: token_id.to_string(),
        })?;
    if *sender != token.owner {
        return Err(ContractError::Unauthorized {
            role: "token owner".to_string(),
        });
    }
    Ok(token)
}
