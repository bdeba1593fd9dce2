use shared::constants::{DEFAULT_APPROVAL_THRESHOLD, DEFAULT_PLATFORM_FEE_BPS};
use shared::errors::Error;
use shared::types::{
    Amount, Campaign, CampaignStats, Investment, InvestorPortfolio, Milestone, Vote,
};
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the funding contract
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Platform owner address
    Owner,
    /// Token used for investments and releases
    Token,
    /// Number of campaigns ever created
    CampaignCount,
    /// Platform fee in basis points
    PlatformFee,
    /// Pause flag for campaign creation and investment
    Paused,
    /// Fees collected and not yet withdrawn
    FeePool,
    /// Minimum approval rate for milestone completion
    ApprovalThreshold,
    Campaign(u64),
    Investment(u64, Address),
    Milestone(u64, u32),
    Vote(u64, u32, Address),
    Portfolio(Address),
    Stats(u64),
}

// ==================== Platform Scalars ====================

/// Check if the owner is set
pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

/// Store platform owner
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

/// Retrieve platform owner
pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInit)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInit)
}

/// Retrieve the campaign counter, defaults to 0
pub fn get_campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

pub fn set_campaign_count(env: &Env, count: u64) {
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &count);
}

/// Retrieve the platform fee, defaults to 2.5%
pub fn get_platform_fee(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::PlatformFee)
        .unwrap_or(DEFAULT_PLATFORM_FEE_BPS)
}

pub fn set_platform_fee(env: &Env, fee_bps: u32) {
    env.storage()
        .instance()
        .set(&DataKey::PlatformFee, &fee_bps);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

/// Retrieve the withdrawable fee pool
pub fn get_fee_pool(env: &Env) -> Amount {
    env.storage().instance().get(&DataKey::FeePool).unwrap_or(0)
}

pub fn set_fee_pool(env: &Env, amount: Amount) {
    env.storage().instance().set(&DataKey::FeePool, &amount);
}

pub fn get_approval_threshold(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ApprovalThreshold)
        .unwrap_or(DEFAULT_APPROVAL_THRESHOLD)
}

pub fn set_approval_threshold(env: &Env, threshold: u32) {
    env.storage()
        .instance()
        .set(&DataKey::ApprovalThreshold, &threshold);
}

/// Read every process-wide setting at once
pub fn get_config(env: &Env) -> Result<shared::types::PlatformConfig, Error> {
    Ok(shared::types::PlatformConfig {
        owner: get_owner(env)?,
        token: get_token(env)?,
        platform_fee_bps: get_platform_fee(env),
        paused: is_paused(env),
        approval_threshold: get_approval_threshold(env),
    })
}

// ==================== Campaigns ====================

pub fn set_campaign(env: &Env, campaign_id: u64, campaign: &Campaign) {
    env.storage()
        .persistent()
        .set(&DataKey::Campaign(campaign_id), campaign);
}

pub fn get_campaign(env: &Env, campaign_id: u64) -> Result<Campaign, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(campaign_id))
        .ok_or(Error::CampaignNotFound)
}

pub fn set_stats(env: &Env, campaign_id: u64, stats: &CampaignStats) {
    env.storage()
        .persistent()
        .set(&DataKey::Stats(campaign_id), stats);
}

pub fn get_stats(env: &Env, campaign_id: u64) -> Option<CampaignStats> {
    env.storage().persistent().get(&DataKey::Stats(campaign_id))
}

// ==================== Investments ====================

pub fn set_investment(env: &Env, campaign_id: u64, investor: &Address, investment: &Investment) {
    let key = DataKey::Investment(campaign_id, investor.clone());
    env.storage().persistent().set(&key, investment);
}

pub fn get_investment(env: &Env, campaign_id: u64, investor: &Address) -> Option<Investment> {
    let key = DataKey::Investment(campaign_id, investor.clone());
    env.storage().persistent().get(&key)
}

pub fn set_portfolio(env: &Env, investor: &Address, portfolio: &InvestorPortfolio) {
    env.storage()
        .persistent()
        .set(&DataKey::Portfolio(investor.clone()), portfolio);
}

pub fn get_portfolio(env: &Env, investor: &Address) -> Option<InvestorPortfolio> {
    env.storage()
        .persistent()
        .get(&DataKey::Portfolio(investor.clone()))
}

// ==================== Milestones & Votes ====================

pub fn set_milestone(env: &Env, campaign_id: u64, milestone_id: u32, milestone: &Milestone) {
    env.storage()
        .persistent()
        .set(&DataKey::Milestone(campaign_id, milestone_id), milestone);
}

pub fn get_milestone(env: &Env, campaign_id: u64, milestone_id: u32) -> Result<Milestone, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Milestone(campaign_id, milestone_id))
        .ok_or(Error::MilestoneNotFound)
}

pub fn milestone_exists(env: &Env, campaign_id: u64, milestone_id: u32) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Milestone(campaign_id, milestone_id))
}

/// Record an investor's vote on a milestone
pub fn set_vote(env: &Env, campaign_id: u64, milestone_id: u32, voter: &Address, vote: &Vote) {
    let key = DataKey::Vote(campaign_id, milestone_id, voter.clone());
    env.storage().persistent().set(&key, vote);
}

pub fn get_vote(env: &Env, campaign_id: u64, milestone_id: u32, voter: &Address) -> Option<Vote> {
    let key = DataKey::Vote(campaign_id, milestone_id, voter.clone());
    env.storage().persistent().get(&key)
}

/// Check if an investor has already voted on a milestone
pub fn has_vote(env: &Env, campaign_id: u64, milestone_id: u32, voter: &Address) -> bool {
    let key = DataKey::Vote(campaign_id, milestone_id, voter.clone());
    env.storage().persistent().has(&key)
}
