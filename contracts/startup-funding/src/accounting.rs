//! Fee, equity and release arithmetic.
//!
//! Every quantity here is a non-negative integer. Operations that would
//! overflow are rejected with `InvalidInput` instead of being clamped.

use shared::constants::{BPS_DENOMINATOR, EQUITY_SCALE, MAX_FUNDING_PERCENTAGE};
use shared::errors::Error;
use shared::types::Amount;

/// Platform share of an investment: `floor(amount * fee_bps / 10000)`
pub fn platform_fee(amount: Amount, fee_bps: u32) -> Result<Amount, Error> {
    amount
        .checked_mul(fee_bps as i128)
        .map(|v| v / BPS_DENOMINATOR)
        .ok_or(Error::InvalidInput)
}

/// Splits a gross investment into `(net, fee)`
pub fn split_investment(amount: Amount, fee_bps: u32) -> Result<(Amount, Amount), Error> {
    let fee = platform_fee(amount, fee_bps)?;
    let net = amount.checked_sub(fee).ok_or(Error::InvalidInput)?;
    Ok((net, fee))
}

/// Equity tokens for a cumulative net contribution.
///
/// Derived from the cumulative amount on every write so repeated
/// contributions never accumulate rounding error.
pub fn equity_tokens(cumulative_net: Amount, funding_goal: Amount) -> Result<i128, Error> {
    if funding_goal <= 0 {
        return Err(Error::InvalidInput);
    }
    cumulative_net
        .checked_mul(EQUITY_SCALE)
        .map(|v| v / funding_goal)
        .ok_or(Error::InvalidInput)
}

/// Average net investment, 0 for a campaign without investors
pub fn average_investment(total_raised: Amount, investors: u32) -> Amount {
    if investors == 0 {
        return 0;
    }
    total_raised / investors as i128
}

/// Capital a milestone releases: `floor(total_raised * percentage / 100)`
pub fn milestone_release(total_raised: Amount, funding_percentage: u32) -> Result<Amount, Error> {
    total_raised
        .checked_mul(funding_percentage as i128)
        .map(|v| v / MAX_FUNDING_PERCENTAGE as i128)
        .ok_or(Error::InvalidInput)
}

/// Adds `release` to the released total, refusing to pay out more than was raised
pub fn checked_release(
    released_amount: Amount,
    release: Amount,
    total_raised: Amount,
) -> Result<Amount, Error> {
    let new_released = released_amount
        .checked_add(release)
        .ok_or(Error::InvalidInput)?;

    if new_released > total_raised {
        return Err(Error::InsufficientFunds);
    }

    Ok(new_released)
}
