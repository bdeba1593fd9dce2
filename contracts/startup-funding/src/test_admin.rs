#![cfg(test)]

use crate::tests::setup;
use shared::errors::Error;
use soroban_sdk::{testutils::Address as _, Address};

// ==================== Platform fee ====================

#[test]
fn test_set_platform_fee() {
    let s = setup();

    assert!(s.client.set_platform_fee(&s.owner, &500));
    assert_eq!(s.client.get_platform_fee_percentage(), 500);

    // Upper bound is inclusive
    assert!(s.client.set_platform_fee(&s.owner, &1_000));
    assert!(s.client.set_platform_fee(&s.owner, &0));
    assert_eq!(s.client.get_platform_fee_percentage(), 0);
}

#[test]
fn test_set_platform_fee_too_high() {
    let s = setup();

    let result = s.client.try_set_platform_fee(&s.owner, &1_001);
    assert_eq!(result, Err(Ok(Error::InvalidInput)));
    assert_eq!(s.client.get_platform_fee_percentage(), 250);
}

#[test]
fn test_set_platform_fee_not_owner() {
    let s = setup();

    let result = s.client.try_set_platform_fee(&s.investor, &300);
    assert_eq!(result, Err(Ok(Error::NotOwner)));
}

#[test]
#[should_panic(expected = "Error(Contract, #100)")]
fn test_set_platform_fee_not_owner_panics() {
    let s = setup();
    s.client.set_platform_fee(&s.founder, &300);
}

#[test]
fn test_fee_change_applies_to_future_investments_only() {
    let s = setup();
    let campaign_id = s.create_campaign(1_000_000, 100, 3);

    s.client
        .invest_in_campaign(&s.investor, &campaign_id, &50_000);
    s.client.set_platform_fee(&s.owner, &500);
    s.client
        .invest_in_campaign(&s.investor, &campaign_id, &50_000);

    let investment = s
        .client
        .get_investment_details(&campaign_id, &s.investor)
        .unwrap();
    assert_eq!(investment.amount, 48_750 + 47_500);
    assert_eq!(s.client.get_platform_fee_pool(), 1_250 + 2_500);
}

#[test]
fn test_zero_fee_credits_full_amount() {
    let s = setup();
    let campaign_id = s.create_campaign(1_000_000, 100, 3);
    s.client.set_platform_fee(&s.owner, &0);

    s.client
        .invest_in_campaign(&s.investor, &campaign_id, &50_000);

    let campaign = s.client.get_campaign_details(&campaign_id).unwrap();
    assert_eq!(campaign.total_raised, 50_000);
    assert_eq!(s.client.get_platform_fee_pool(), 0);
}

// ==================== Pause ====================

#[test]
fn test_toggle_pause() {
    let s = setup();

    assert!(s.client.toggle_pause(&s.owner));
    assert!(s.client.is_contract_paused());

    assert!(!s.client.toggle_pause(&s.owner));
    assert!(!s.client.is_contract_paused());
}

#[test]
fn test_toggle_pause_not_owner() {
    let s = setup();

    let result = s.client.try_toggle_pause(&s.founder);
    assert_eq!(result, Err(Ok(Error::NotOwner)));
    assert!(!s.client.is_contract_paused());
}

#[test]
fn test_pause_blocks_campaign_creation() {
    let s = setup();
    s.client.toggle_pause(&s.owner);

    let result = s.client.try_create_campaign(
        &s.founder,
        &s.text("Paused Campaign"),
        &s.text("Should fail"),
        &100_000,
        &50,
        &2,
    );
    assert_eq!(result, Err(Ok(Error::InvalidInput)));
    assert_eq!(s.client.get_total_campaigns(), 0);

    s.client.toggle_pause(&s.owner);
    assert_eq!(s.create_campaign(100_000, 50, 2), 1);
}

#[test]
fn test_pause_blocks_investment() {
    let s = setup();
    let campaign_id = s.create_campaign(100_000, 50, 2);
    s.client.toggle_pause(&s.owner);

    let result = s
        .client
        .try_invest_in_campaign(&s.investor, &campaign_id, &10_000);
    assert_eq!(result, Err(Ok(Error::InvalidInput)));

    s.client.toggle_pause(&s.owner);
    assert!(s
        .client
        .invest_in_campaign(&s.investor, &campaign_id, &10_000));
}

#[test]
fn test_paused_expired_campaign_reports_closed() {
    let s = setup();
    let campaign_id = s.create_campaign(100_000, 50, 2);
    s.client.toggle_pause(&s.owner);
    s.advance(50);

    let result = s
        .client
        .try_invest_in_campaign(&s.investor, &campaign_id, &10_000);
    assert_eq!(result, Err(Ok(Error::CampaignClosed)));
}

#[test]
fn test_pause_does_not_block_governance() {
    let s = setup();
    let campaign_id = s.create_campaign(1_000_000, 50, 3);
    s.client
        .invest_in_campaign(&s.investor, &campaign_id, &1_026_000);
    s.client.toggle_pause(&s.owner);

    assert!(s.client.close_campaign(&s.founder, &campaign_id));
    s.create_milestone(campaign_id, 1, 50, 10);
    assert!(s
        .client
        .vote_on_milestone(&s.investor, &campaign_id, &1, &true));

    s.advance(10);
    assert_eq!(
        s.client.complete_milestone(&s.founder, &campaign_id, &1),
        500_175
    );
}

// ==================== Fee withdrawal ====================

#[test]
fn test_withdraw_platform_fees() {
    let s = setup();
    let campaign_id = s.create_campaign(500_000, 50, 2);
    s.client
        .invest_in_campaign(&s.investor, &campaign_id, &100_000);
    assert_eq!(s.client.get_platform_fee_pool(), 2_500);

    let withdrawn = s.client.withdraw_platform_fees(&s.owner);
    assert_eq!(withdrawn, 2_500);
    assert_eq!(s.client.get_platform_fee_pool(), 0);
    assert_eq!(s.token.balance(&s.owner), 2_500);

    // Escrow still holds the campaign's net capital
    assert_eq!(s.token.balance(&s.client.address), 97_500);
}

#[test]
fn test_withdraw_empty_pool() {
    let s = setup();

    assert_eq!(s.client.withdraw_platform_fees(&s.owner), 0);
    assert_eq!(s.token.balance(&s.owner), 0);
}

#[test]
fn test_withdraw_twice_pays_once() {
    let s = setup();
    let campaign_id = s.create_campaign(500_000, 50, 2);
    s.client
        .invest_in_campaign(&s.investor, &campaign_id, &100_000);

    assert_eq!(s.client.withdraw_platform_fees(&s.owner), 2_500);
    assert_eq!(s.client.withdraw_platform_fees(&s.owner), 0);
    assert_eq!(s.token.balance(&s.owner), 2_500);
}

#[test]
fn test_withdraw_not_owner() {
    let s = setup();
    let campaign_id = s.create_campaign(500_000, 50, 2);
    s.client
        .invest_in_campaign(&s.investor, &campaign_id, &100_000);

    let result = s.client.try_withdraw_platform_fees(&s.investor);
    assert_eq!(result, Err(Ok(Error::NotOwner)));
    assert_eq!(s.client.get_platform_fee_pool(), 2_500);
}

// ==================== Emergency close ====================

#[test]
fn test_emergency_close_campaign() {
    let s = setup();
    let campaign_id = s.create_campaign(500_000, 50, 2);

    assert!(s.client.emergency_close_campaign(&s.owner, &campaign_id));

    let campaign = s.client.get_campaign_details(&campaign_id).unwrap();
    assert!(!campaign.active);
    assert!(!campaign.completed);
}

#[test]
fn test_emergency_closed_campaign_rejects_activity() {
    let s = setup();
    let campaign_id = s.create_campaign(500_000, 50, 2);
    s.client.emergency_close_campaign(&s.owner, &campaign_id);

    let result = s
        .client
        .try_invest_in_campaign(&s.investor, &campaign_id, &10_000);
    assert_eq!(result, Err(Ok(Error::CampaignClosed)));

    s.advance(50);
    let result = s.client.try_close_campaign(&s.founder, &campaign_id);
    assert_eq!(result, Err(Ok(Error::CampaignClosed)));
}

#[test]
fn test_emergency_close_not_owner() {
    let s = setup();
    let campaign_id = s.create_campaign(500_000, 50, 2);

    let result = s
        .client
        .try_emergency_close_campaign(&s.founder, &campaign_id);
    assert_eq!(result, Err(Ok(Error::NotOwner)));

    let campaign = s.client.get_campaign_details(&campaign_id).unwrap();
    assert!(campaign.active);
}

#[test]
fn test_emergency_close_missing_campaign() {
    let s = setup();

    let result = s.client.try_emergency_close_campaign(&s.owner, &7);
    assert_eq!(result, Err(Ok(Error::CampaignNotFound)));
}

// ==================== Forced milestone completion ====================

#[test]
fn test_force_milestone_completion() {
    let s = setup();
    let campaign_id = s.create_campaign(300_000, 50, 2);

    // 308,000 gross is 300,300 net
    s.client
        .invest_in_campaign(&s.investor, &campaign_id, &308_000);
    s.client.close_campaign(&s.founder, &campaign_id);
    s.create_milestone(campaign_id, 1, 50, 10);

    let released = s
        .client
        .force_milestone_completion(&s.owner, &campaign_id, &1);
    assert_eq!(released, 150_150);

    let milestone = s.client.get_milestone_details(&campaign_id, &1).unwrap();
    assert!(milestone.completed);
    assert!(milestone.funds_released);
    assert_eq!(milestone.votes_for, 0);
    assert_eq!(s.token.balance(&s.founder), 150_150);
}

#[test]
fn test_force_completion_releases_once() {
    let s = setup();
    let campaign_id = s.funded_campaign();
    s.create_milestone(campaign_id, 1, 50, 10);

    s.client
        .force_milestone_completion(&s.owner, &campaign_id, &1);

    let result = s
        .client
        .try_force_milestone_completion(&s.owner, &campaign_id, &1);
    assert_eq!(result, Err(Ok(Error::FundsAlreadyReleased)));

    s.advance(10);
    let result = s
        .client
        .try_complete_milestone(&s.founder, &campaign_id, &1);
    assert_eq!(result, Err(Ok(Error::FundsAlreadyReleased)));

    assert_eq!(s.token.balance(&s.founder), 500_175);
}

#[test]
fn test_force_completion_after_normal_completion() {
    let s = setup();
    let campaign_id = s.funded_campaign();
    s.create_milestone(campaign_id, 1, 50, 10);
    s.client
        .vote_on_milestone(&s.investor, &campaign_id, &1, &true);
    s.advance(10);
    s.client.complete_milestone(&s.founder, &campaign_id, &1);

    let result = s
        .client
        .try_force_milestone_completion(&s.owner, &campaign_id, &1);
    assert_eq!(result, Err(Ok(Error::FundsAlreadyReleased)));
}

#[test]
fn test_releases_capped_at_total_raised() {
    let s = setup();
    let campaign_id = s.funded_campaign();
    s.create_milestone(campaign_id, 1, 60, 10);
    s.create_milestone(campaign_id, 2, 50, 10);

    assert_eq!(
        s.client
            .force_milestone_completion(&s.owner, &campaign_id, &1),
        600_210
    );

    let result = s
        .client
        .try_force_milestone_completion(&s.owner, &campaign_id, &2);
    assert_eq!(result, Err(Ok(Error::InsufficientFunds)));

    let campaign = s.client.get_campaign_details(&campaign_id).unwrap();
    assert_eq!(campaign.released_amount, 600_210);
    let milestone = s.client.get_milestone_details(&campaign_id, &2).unwrap();
    assert!(!milestone.funds_released);
    assert_eq!(s.token.balance(&s.founder), 600_210);
}

#[test]
fn test_force_completion_not_owner() {
    let s = setup();
    let campaign_id = s.funded_campaign();
    s.create_milestone(campaign_id, 1, 50, 10);

    let result = s
        .client
        .try_force_milestone_completion(&s.founder, &campaign_id, &1);
    assert_eq!(result, Err(Ok(Error::NotOwner)));
}

#[test]
fn test_force_completion_missing_milestone() {
    let s = setup();
    let campaign_id = s.funded_campaign();

    let result = s
        .client
        .try_force_milestone_completion(&s.owner, &campaign_id, &3);
    assert_eq!(result, Err(Ok(Error::MilestoneNotFound)));
}

// ==================== Approval threshold ====================

#[test]
fn test_set_approval_threshold() {
    let s = setup();

    assert!(s.client.set_approval_threshold(&s.owner, &75));
    assert_eq!(s.client.get_approval_threshold(), 75);

    assert!(s.client.set_approval_threshold(&s.owner, &1));
    assert!(s.client.set_approval_threshold(&s.owner, &100));
    assert_eq!(s.client.get_approval_threshold(), 100);
}

#[test]
fn test_set_approval_threshold_out_of_range() {
    let s = setup();

    for threshold in [0u32, 101] {
        let result = s.client.try_set_approval_threshold(&s.owner, &threshold);
        assert_eq!(result, Err(Ok(Error::InvalidInput)));
    }
    assert_eq!(s.client.get_approval_threshold(), 51);
}

#[test]
fn test_set_approval_threshold_not_owner() {
    let s = setup();
    let stranger = Address::generate(&s.env);

    let result = s.client.try_set_approval_threshold(&stranger, &60);
    assert_eq!(result, Err(Ok(Error::NotOwner)));
}

#[test]
fn test_threshold_governs_completion() {
    let s = setup();
    let campaign_id = s.create_campaign(1_000_000, 50, 3);
    let second = s.new_investor();

    // 5,850 for and 4,875 against: 54%
    s.client
        .invest_in_campaign(&s.investor, &campaign_id, &600_000);
    s.client.invest_in_campaign(&second, &campaign_id, &500_000);
    s.client.close_campaign(&s.founder, &campaign_id);
    s.create_milestone(campaign_id, 1, 20, 10);
    s.client
        .vote_on_milestone(&s.investor, &campaign_id, &1, &true);
    s.client
        .vote_on_milestone(&second, &campaign_id, &1, &false);
    s.advance(10);

    s.client.set_approval_threshold(&s.owner, &60);
    let result = s
        .client
        .try_complete_milestone(&s.founder, &campaign_id, &1);
    assert_eq!(result, Err(Ok(Error::InsufficientApproval)));

    s.client.set_approval_threshold(&s.owner, &54);
    // 20% of 1,072,500
    assert_eq!(
        s.client.complete_milestone(&s.founder, &campaign_id, &1),
        214_500
    );
}
