#![no_std]

use shared::{
    constants::{DEFAULT_APPROVAL_THRESHOLD, DEFAULT_PLATFORM_FEE_BPS, MAX_PLATFORM_FEE_BPS},
    errors::Error,
    events::*,
    types::{Amount, Campaign, CampaignStats, Investment, InvestorPortfolio, Milestone, Vote},
    MAX_APPROVAL_THRESHOLD, MIN_APPROVAL_THRESHOLD,
};
use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Env, String};

mod accounting;
mod storage;
mod validation;
mod voting;

#[cfg(test)]
mod test_admin;

use storage::*;

#[contract]
pub struct StartupFundingContract;

#[contractimpl]
impl StartupFundingContract {
    /// Initialize the platform with its owner and the funding token
    ///
    /// # Arguments
    /// * `owner` - Address allowed to run administrative operations
    /// * `token` - Token used for investments and milestone releases
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), Error> {
        if has_owner(&env) {
            return Err(Error::AlreadyInit);
        }
        owner.require_auth();

        set_owner(&env, &owner);
        set_token(&env, &token);
        set_platform_fee(&env, DEFAULT_PLATFORM_FEE_BPS);
        set_paused(&env, false);
        set_campaign_count(&env, 0);
        set_fee_pool(&env, 0);
        set_approval_threshold(&env, DEFAULT_APPROVAL_THRESHOLD);

        env.events().publish((INITIALIZED,), (owner, token));

        Ok(())
    }

    // ==================== Campaign Lifecycle ====================

    /// Register a new fundraising campaign
    ///
    /// # Arguments
    /// * `founder` - Address creating the campaign
    /// * `title` - Campaign title
    /// * `description` - Campaign description
    /// * `funding_goal` - Target amount, must be positive
    /// * `duration` - Ledgers until the investment deadline, must be positive
    /// * `milestone_count` - Number of milestones, between 1 and 10
    ///
    /// # Returns
    /// * `Result<u64, Error>` - The new campaign id
    pub fn create_campaign(
        env: Env,
        founder: Address,
        title: String,
        description: String,
        funding_goal: Amount,
        duration: u32,
        milestone_count: u32,
    ) -> Result<u64, Error> {
        founder.require_auth();

        let config = storage::get_config(&env)?;
        if config.paused {
            return Err(Error::InvalidInput);
        }

        validation::validate_campaign_params(funding_goal, duration, milestone_count)?;

        let now = env.ledger().sequence();
        let deadline = validation::deadline_after(now, duration)?;

        let campaign_id = get_campaign_count(&env)
            .checked_add(1)
            .ok_or(Error::InvalidInput)?;

        let campaign = Campaign {
            founder: founder.clone(),
            title,
            description,
            funding_goal,
            total_raised: 0,
            deadline,
            active: true,
            completed: false,
            milestone_count,
            released_amount: 0,
        };

        set_campaign(&env, campaign_id, &campaign);
        set_campaign_count(&env, campaign_id);
        set_stats(
            &env,
            campaign_id,
            &CampaignStats {
                total_investors: 0,
                average_investment: 0,
                last_update: now,
            },
        );

        env.events().publish(
            (CAMPAIGN_CREATED,),
            (campaign_id, founder, funding_goal, deadline),
        );

        Ok(campaign_id)
    }

    /// Invest in an active campaign
    ///
    /// The platform fee is kept in the contract's fee pool; the campaign and
    /// the investor are credited with the net amount only.
    ///
    /// # Arguments
    /// * `investor` - Address investing
    /// * `campaign_id` - Campaign identifier
    /// * `amount` - Gross amount transferred from the investor
    pub fn invest_in_campaign(
        env: Env,
        investor: Address,
        campaign_id: u64,
        amount: Amount,
    ) -> Result<bool, Error> {
        investor.require_auth();

        let config = storage::get_config(&env)?;
        let mut campaign = get_campaign(&env, campaign_id)?;

        let now = env.ledger().sequence();
        if !campaign.active || now >= campaign.deadline {
            return Err(Error::CampaignClosed);
        }

        if amount <= 0 {
            return Err(Error::InvalidInput);
        }

        if config.paused {
            return Err(Error::InvalidInput);
        }

        let (net, fee) = accounting::split_investment(amount, config.platform_fee_bps)?;

        campaign.total_raised = campaign
            .total_raised
            .checked_add(net)
            .ok_or(Error::InvalidInput)?;

        // Accumulate into the existing record, if any
        let previous = get_investment(&env, campaign_id, &investor);
        let first_investment = previous.is_none();
        let cumulative = previous
            .map(|i| i.amount)
            .unwrap_or(0)
            .checked_add(net)
            .ok_or(Error::InvalidInput)?;

        let investment = Investment {
            amount: cumulative,
            timestamp: now,
            equity_tokens: accounting::equity_tokens(cumulative, campaign.funding_goal)?,
        };

        let mut stats = get_stats(&env, campaign_id).unwrap_or(CampaignStats {
            total_investors: 0,
            average_investment: 0,
            last_update: now,
        });
        let mut portfolio = get_portfolio(&env, &investor).unwrap_or(InvestorPortfolio {
            total_invested: 0,
            active_campaigns: 0,
            total_returns: 0,
        });

        if first_investment {
            stats.total_investors = stats
                .total_investors
                .checked_add(1)
                .ok_or(Error::InvalidInput)?;
            portfolio.active_campaigns = portfolio
                .active_campaigns
                .checked_add(1)
                .ok_or(Error::InvalidInput)?;
        }
        stats.average_investment =
            accounting::average_investment(campaign.total_raised, stats.total_investors);
        stats.last_update = now;

        portfolio.total_invested = portfolio
            .total_invested
            .checked_add(net)
            .ok_or(Error::InvalidInput)?;

        let fee_pool = get_fee_pool(&env)
            .checked_add(fee)
            .ok_or(Error::InvalidInput)?;

        // Move the gross amount into escrow
        let token_client = TokenClient::new(&env, &config.token);
        token_client.transfer(&investor, &env.current_contract_address(), &amount);

        set_campaign(&env, campaign_id, &campaign);
        set_investment(&env, campaign_id, &investor, &investment);
        set_stats(&env, campaign_id, &stats);
        set_portfolio(&env, &investor, &portfolio);
        set_fee_pool(&env, fee_pool);

        log!(&env, "investment accepted", campaign_id, net, fee);

        env.events().publish(
            (INVESTMENT_MADE,),
            (campaign_id, investor, net, investment.equity_tokens),
        );

        Ok(true)
    }

    /// Close a campaign once its deadline has passed or its goal is reached
    ///
    /// # Arguments
    /// * `founder` - Must be the campaign founder
    /// * `campaign_id` - Campaign identifier
    pub fn close_campaign(env: Env, founder: Address, campaign_id: u64) -> Result<bool, Error> {
        founder.require_auth();
        Self::require_initialized(&env)?;

        let mut campaign = get_campaign(&env, campaign_id)?;
        validation::validate_founder(&campaign, &founder)?;

        if !campaign.active {
            return Err(Error::CampaignClosed);
        }

        let now = env.ledger().sequence();
        let deadline_passed = now >= campaign.deadline;
        let goal_reached = campaign.total_raised >= campaign.funding_goal;
        if !deadline_passed && !goal_reached {
            return Err(Error::InvalidInput);
        }

        campaign.active = false;
        campaign.completed = true;
        set_campaign(&env, campaign_id, &campaign);

        env.events().publish(
            (CAMPAIGN_CLOSED,),
            (campaign_id, campaign.total_raised, goal_reached),
        );

        Ok(true)
    }

    // ==================== Milestones ====================

    /// Declare a milestone on a closed campaign
    ///
    /// # Arguments
    /// * `founder` - Must be the campaign founder
    /// * `campaign_id` - Campaign identifier
    /// * `milestone_id` - Milestone number, between 1 and the campaign's milestone count
    /// * `title` - Milestone title
    /// * `description` - Milestone description
    /// * `funding_percentage` - Share of the raised capital to release (1-100)
    /// * `voting_duration` - Ledgers investors have to vote
    pub fn create_milestone(
        env: Env,
        founder: Address,
        campaign_id: u64,
        milestone_id: u32,
        title: String,
        description: String,
        funding_percentage: u32,
        voting_duration: u32,
    ) -> Result<bool, Error> {
        founder.require_auth();
        Self::require_initialized(&env)?;

        let campaign = get_campaign(&env, campaign_id)?;
        validation::validate_founder(&campaign, &founder)?;
        validation::validate_milestone_params(
            &campaign,
            milestone_id,
            funding_percentage,
            voting_duration,
        )?;

        if campaign.active {
            return Err(Error::CampaignActive);
        }

        if milestone_exists(&env, campaign_id, milestone_id) {
            return Err(Error::MilestoneExists);
        }

        let now = env.ledger().sequence();
        let voting_deadline = validation::deadline_after(now, voting_duration)?;

        let milestone = Milestone {
            title,
            description,
            funding_percentage,
            completed: false,
            votes_for: 0,
            votes_against: 0,
            voting_deadline,
            funds_released: false,
        };
        set_milestone(&env, campaign_id, milestone_id, &milestone);

        env.events().publish(
            (MILESTONE_CREATED,),
            (campaign_id, milestone_id, voting_deadline),
        );

        Ok(true)
    }

    /// Vote on a milestone with the caller's equity as voting power
    ///
    /// # Arguments
    /// * `voter` - Address of an investor in the campaign
    /// * `campaign_id` - Campaign identifier
    /// * `milestone_id` - Milestone identifier
    /// * `approve` - True to approve, false to reject
    pub fn vote_on_milestone(
        env: Env,
        voter: Address,
        campaign_id: u64,
        milestone_id: u32,
        approve: bool,
    ) -> Result<bool, Error> {
        voter.require_auth();
        Self::require_initialized(&env)?;

        get_campaign(&env, campaign_id)?;
        let investment = get_investment(&env, campaign_id, &voter).ok_or(Error::NotAuthorized)?;
        let mut milestone = get_milestone(&env, campaign_id, milestone_id)?;

        let now = env.ledger().sequence();
        if milestone.completed || now >= milestone.voting_deadline {
            return Err(Error::VotingPeriod);
        }

        if has_vote(&env, campaign_id, milestone_id, &voter) {
            return Err(Error::AlreadyVoted);
        }

        // Power is fixed at vote time; later investments do not change it
        let voting_power = investment.equity_tokens;
        voting::record_vote(&mut milestone, approve, voting_power)?;

        set_vote(
            &env,
            campaign_id,
            milestone_id,
            &voter,
            &Vote {
                vote: approve,
                timestamp: now,
                voting_power,
            },
        );
        set_milestone(&env, campaign_id, milestone_id, &milestone);

        env.events().publish(
            (MILESTONE_VOTED,),
            (campaign_id, milestone_id, voter, approve, voting_power),
        );

        Ok(true)
    }

    /// Approval rate of a milestone in percent of cast voting power
    ///
    /// # Arguments
    /// * `campaign_id` - Campaign identifier
    /// * `milestone_id` - Milestone identifier
    pub fn calc_milestone_approval_rate(
        env: Env,
        campaign_id: u64,
        milestone_id: u32,
    ) -> Result<u32, Error> {
        let milestone = get_milestone(&env, campaign_id, milestone_id)?;
        voting::approval_rate(&milestone)
    }

    /// Complete an approved milestone after its voting period and release its funds
    ///
    /// # Arguments
    /// * `founder` - Must be the campaign founder
    /// * `campaign_id` - Campaign identifier
    /// * `milestone_id` - Milestone identifier
    ///
    /// # Returns
    /// * `Result<Amount, Error>` - Amount transferred to the founder
    pub fn complete_milestone(
        env: Env,
        founder: Address,
        campaign_id: u64,
        milestone_id: u32,
    ) -> Result<Amount, Error> {
        founder.require_auth();
        let config = storage::get_config(&env)?;

        let mut campaign = get_campaign(&env, campaign_id)?;
        validation::validate_founder(&campaign, &founder)?;
        let mut milestone = get_milestone(&env, campaign_id, milestone_id)?;

        let now = env.ledger().sequence();
        if now < milestone.voting_deadline {
            return Err(Error::VotingPeriod);
        }

        if milestone.funds_released {
            return Err(Error::FundsAlreadyReleased);
        }

        if !voting::is_approved(&milestone, config.approval_threshold)? {
            return Err(Error::InsufficientApproval);
        }

        let released = release_milestone_funds(
            &env,
            &config.token,
            campaign_id,
            &mut campaign,
            milestone_id,
            &mut milestone,
        )?;

        let tally = (milestone.votes_for, milestone.votes_against);
        env.events()
            .publish((MILESTONE_COMPLETED,), (campaign_id, milestone_id, tally));

        Ok(released)
    }

    // ==================== Administration ====================

    /// Set the platform fee for future investments (owner only)
    ///
    /// # Arguments
    /// * `owner` - Must be the platform owner
    /// * `fee_bps` - New fee in basis points, at most 1000 (10%)
    pub fn set_platform_fee(env: Env, owner: Address, fee_bps: u32) -> Result<bool, Error> {
        validation::validate_owner(&env, &owner)?;
        owner.require_auth();

        if fee_bps > MAX_PLATFORM_FEE_BPS {
            return Err(Error::InvalidInput);
        }

        storage::set_platform_fee(&env, fee_bps);

        env.events().publish((FEE_UPDATED,), (owner, fee_bps));

        Ok(true)
    }

    /// Flip the pause flag for campaign creation and investment (owner only)
    ///
    /// # Returns
    /// * `Result<bool, Error>` - The new pause state
    pub fn toggle_pause(env: Env, owner: Address) -> Result<bool, Error> {
        validation::validate_owner(&env, &owner)?;
        owner.require_auth();

        let paused = !is_paused(&env);
        set_paused(&env, paused);

        env.events()
            .publish((PAUSE_TOGGLED,), (owner, paused, env.ledger().sequence()));

        Ok(paused)
    }

    /// Transfer the accumulated platform fees from escrow to the owner
    ///
    /// # Returns
    /// * `Result<Amount, Error>` - Amount withdrawn, 0 if the pool was empty
    pub fn withdraw_platform_fees(env: Env, owner: Address) -> Result<Amount, Error> {
        validation::validate_owner(&env, &owner)?;
        owner.require_auth();

        let amount = get_fee_pool(&env);
        if amount == 0 {
            return Ok(0);
        }

        let token = get_token(&env)?;
        let token_client = TokenClient::new(&env, &token);
        token_client.transfer(&env.current_contract_address(), &owner, &amount);

        set_fee_pool(&env, 0);

        env.events().publish((FEES_WITHDRAWN,), (owner, amount));

        Ok(amount)
    }

    /// Deactivate a campaign regardless of its deadline or goal (owner only)
    pub fn emergency_close_campaign(
        env: Env,
        owner: Address,
        campaign_id: u64,
    ) -> Result<bool, Error> {
        validation::validate_owner(&env, &owner)?;
        owner.require_auth();

        let mut campaign = get_campaign(&env, campaign_id)?;
        campaign.active = false;
        set_campaign(&env, campaign_id, &campaign);

        log!(&env, "campaign force closed", campaign_id);

        env.events()
            .publish((CAMPAIGN_FORCE_CLOSED,), (campaign_id, owner));

        Ok(true)
    }

    /// Complete a milestone and release its funds without a vote (owner only)
    ///
    /// Funds are still released at most once per milestone.
    pub fn force_milestone_completion(
        env: Env,
        owner: Address,
        campaign_id: u64,
        milestone_id: u32,
    ) -> Result<Amount, Error> {
        validation::validate_owner(&env, &owner)?;
        owner.require_auth();

        let mut campaign = get_campaign(&env, campaign_id)?;
        let mut milestone = get_milestone(&env, campaign_id, milestone_id)?;

        if milestone.funds_released {
            return Err(Error::FundsAlreadyReleased);
        }

        let token = get_token(&env)?;
        let released = release_milestone_funds(
            &env,
            &token,
            campaign_id,
            &mut campaign,
            milestone_id,
            &mut milestone,
        )?;

        env.events()
            .publish((MILESTONE_FORCED,), (campaign_id, milestone_id, owner));

        Ok(released)
    }

    /// Set the minimum approval rate for milestone completion (owner only)
    ///
    /// # Arguments
    /// * `owner` - Must be the platform owner
    /// * `rate` - Minimum approval rate in percent (1-100)
    pub fn set_approval_threshold(env: Env, owner: Address, rate: u32) -> Result<bool, Error> {
        validation::validate_owner(&env, &owner)?;
        owner.require_auth();

        if !(MIN_APPROVAL_THRESHOLD..=MAX_APPROVAL_THRESHOLD).contains(&rate) {
            return Err(Error::InvalidInput);
        }

        storage::set_approval_threshold(&env, rate);

        env.events().publish((THRESHOLD_UPDATED,), (owner, rate));

        Ok(true)
    }

    // ==================== Queries ====================

    pub fn get_campaign_details(env: Env, campaign_id: u64) -> Option<Campaign> {
        get_campaign(&env, campaign_id).ok()
    }

    pub fn get_investment_details(
        env: Env,
        campaign_id: u64,
        investor: Address,
    ) -> Option<Investment> {
        get_investment(&env, campaign_id, &investor)
    }

    pub fn get_campaign_stats(env: Env, campaign_id: u64) -> Option<CampaignStats> {
        get_stats(&env, campaign_id)
    }

    pub fn get_investor_portfolio(env: Env, investor: Address) -> Option<InvestorPortfolio> {
        get_portfolio(&env, &investor)
    }

    pub fn get_milestone_details(
        env: Env,
        campaign_id: u64,
        milestone_id: u32,
    ) -> Option<Milestone> {
        get_milestone(&env, campaign_id, milestone_id).ok()
    }

    pub fn get_milestone_vote(
        env: Env,
        campaign_id: u64,
        milestone_id: u32,
        voter: Address,
    ) -> Option<Vote> {
        get_vote(&env, campaign_id, milestone_id, &voter)
    }

    /// Whether an investor has already voted on a milestone
    pub fn has_voted(env: Env, campaign_id: u64, milestone_id: u32, voter: Address) -> bool {
        has_vote(&env, campaign_id, milestone_id, &voter)
    }

    pub fn get_total_campaigns(env: Env) -> u64 {
        get_campaign_count(&env)
    }

    /// Current platform fee in basis points
    pub fn get_platform_fee_percentage(env: Env) -> u32 {
        get_platform_fee(&env)
    }

    /// Fees collected and not yet withdrawn
    pub fn get_platform_fee_pool(env: Env) -> Amount {
        get_fee_pool(&env)
    }

    pub fn is_contract_paused(env: Env) -> bool {
        is_paused(&env)
    }

    pub fn get_approval_threshold(env: Env) -> u32 {
        storage::get_approval_threshold(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        storage::get_token(&env)
    }

    /// Check if the contract is initialized
    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !has_owner(env) {
            return Err(Error::NotInit);
        }
        Ok(())
    }
}

/// Pay a milestone's share of the raised capital to the founder and mark it done
fn release_milestone_funds(
    env: &Env,
    token: &Address,
    campaign_id: u64,
    campaign: &mut Campaign,
    milestone_id: u32,
    milestone: &mut Milestone,
) -> Result<Amount, Error> {
    let release =
        accounting::milestone_release(campaign.total_raised, milestone.funding_percentage)?;

    // Never pay out more than was raised, whatever the percentages add up to
    campaign.released_amount =
        accounting::checked_release(campaign.released_amount, release, campaign.total_raised)?;

    milestone.completed = true;
    milestone.funds_released = true;

    if release > 0 {
        let escrow = env.current_contract_address();
        TokenClient::new(env, token).transfer(&escrow, &campaign.founder, &release);
    }

    set_campaign(env, campaign_id, campaign);
    set_milestone(env, campaign_id, milestone_id, milestone);

    env.events()
        .publish((FUNDS_RELEASED,), (campaign_id, milestone_id, release));

    Ok(release)
}
