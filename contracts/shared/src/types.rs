use soroban_sdk::{contracttype, Address, String};

/// Token amount in the smallest currency unit
pub type Amount = i128;

/// Ledger sequence number used as the logical clock
pub type BlockHeight = u32;

/// A fundraising campaign registered by a founder
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub founder: Address,
    pub title: String,
    pub description: String,
    pub funding_goal: Amount,
    /// Raised capital net of platform fees
    pub total_raised: Amount,
    pub deadline: BlockHeight,
    pub active: bool,
    pub completed: bool,
    pub milestone_count: u32,
    /// Capital already paid out to the founder through milestones
    pub released_amount: Amount,
}

/// An investor's cumulative position in one campaign
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Investment {
    /// Cumulative net contribution
    pub amount: Amount,
    /// Ledger sequence of the most recent contribution
    pub timestamp: BlockHeight,
    pub equity_tokens: i128,
}

/// A fund-release tranche declared by the founder and gated by investor vote
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Milestone {
    pub title: String,
    pub description: String,
    /// Share of the campaign's raised capital released on completion (1-100)
    pub funding_percentage: u32,
    pub completed: bool,
    pub votes_for: i128,
    pub votes_against: i128,
    pub voting_deadline: BlockHeight,
    pub funds_released: bool,
}

/// A single investor's vote on a milestone
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vote {
    pub vote: bool,
    pub timestamp: BlockHeight,
    /// Equity tokens held by the voter when the vote was cast
    pub voting_power: i128,
}

/// Aggregate view of an investor across all campaigns
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestorPortfolio {
    pub total_invested: Amount,
    /// Number of distinct campaigns the investor has contributed to
    pub active_campaigns: u32,
    pub total_returns: Amount,
}

/// Aggregate view of the investors in one campaign
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignStats {
    pub total_investors: u32,
    pub average_investment: Amount,
    pub last_update: BlockHeight,
}

/// Snapshot of the process-wide settings
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformConfig {
    pub owner: Address,
    pub token: Address,
    pub platform_fee_bps: u32,
    pub paused: bool,
    pub approval_threshold: u32,
}
