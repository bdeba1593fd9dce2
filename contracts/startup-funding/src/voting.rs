use shared::errors::Error;
use shared::types::Milestone;

/// Percentage of cast voting power in favour, rounded down. 0 without votes.
pub fn approval_rate(milestone: &Milestone) -> Result<u32, Error> {
    let total = milestone
        .votes_for
        .checked_add(milestone.votes_against)
        .ok_or(Error::InvalidInput)?;

    if total <= 0 {
        return Ok(0);
    }

    let scaled = milestone
        .votes_for
        .checked_mul(100)
        .ok_or(Error::InvalidInput)?;

    Ok((scaled / total) as u32)
}

/// Whether the tally clears the configured minimum approval rate
pub fn is_approved(milestone: &Milestone, threshold: u32) -> Result<bool, Error> {
    Ok(approval_rate(milestone)? >= threshold)
}

/// Adds a voter's power to one side of the tally
pub fn record_vote(
    milestone: &mut Milestone,
    approve: bool,
    voting_power: i128,
) -> Result<(), Error> {
    if approve {
        milestone.votes_for = milestone
            .votes_for
            .checked_add(voting_power)
            .ok_or(Error::InvalidInput)?;
    } else {
        milestone.votes_against = milestone
            .votes_against
            .checked_add(voting_power)
            .ok_or(Error::InvalidInput)?;
    }
    Ok(())
}
