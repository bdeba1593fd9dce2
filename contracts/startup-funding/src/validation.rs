use shared::constants::{
    MAX_FUNDING_PERCENTAGE, MAX_MILESTONES, MIN_FUNDING_PERCENTAGE, MIN_MILESTONES,
};
use shared::errors::Error;
use shared::types::{Amount, Campaign};
use soroban_sdk::{Address, Env};

use crate::storage::get_owner;

/// Validate that the caller is the platform owner
pub fn validate_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    let owner = get_owner(env)?;
    if owner == *caller {
        Ok(())
    } else {
        Err(Error::NotOwner)
    }
}

/// Validate that the caller founded the campaign
pub fn validate_founder(campaign: &Campaign, caller: &Address) -> Result<(), Error> {
    if campaign.founder == *caller {
        Ok(())
    } else {
        Err(Error::NotAuthorized)
    }
}

/// Validate the parameters of a new campaign
pub fn validate_campaign_params(
    funding_goal: Amount,
    duration: u32,
    milestone_count: u32,
) -> Result<(), Error> {
    if funding_goal <= 0 || duration == 0 {
        return Err(Error::InvalidInput);
    }
    if !(MIN_MILESTONES..=MAX_MILESTONES).contains(&milestone_count) {
        return Err(Error::InvalidInput);
    }
    Ok(())
}

/// Validate the parameters of a new milestone against its campaign
pub fn validate_milestone_params(
    campaign: &Campaign,
    milestone_id: u32,
    funding_percentage: u32,
    voting_duration: u32,
) -> Result<(), Error> {
    if milestone_id == 0 || milestone_id > campaign.milestone_count {
        return Err(Error::InvalidInput);
    }
    if !(MIN_FUNDING_PERCENTAGE..=MAX_FUNDING_PERCENTAGE).contains(&funding_percentage) {
        return Err(Error::InvalidInput);
    }
    if voting_duration == 0 {
        return Err(Error::InvalidInput);
    }
    Ok(())
}

/// Deadline `duration` ledgers after `now`
pub fn deadline_after(now: u32, duration: u32) -> Result<u32, Error> {
    now.checked_add(duration).ok_or(Error::InvalidInput)
}
