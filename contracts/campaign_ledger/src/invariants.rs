#![allow(dead_code)]

extern crate std;

use crate::types::{Campaign, CampaignPhase};
use crate::MAXIMUM_CAMPAIGN_LENGTH;

/// The pledged total never drops below zero.
pub fn assert_pledged_non_negative(campaign: &Campaign) {
    assert!(
        campaign.pledged >= 0,
        "campaign {} has negative pledged total ({})",
        campaign.id,
        campaign.pledged
    );
}

pub fn assert_goal_positive(campaign: &Campaign) {
    assert!(
        campaign.goal > 0,
        "campaign {} has non-positive goal ({})",
        campaign.id,
        campaign.goal
    );
}

/// `start_at < end_at` and the window fits the maximum length.
pub fn assert_window_valid(campaign: &Campaign) {
    assert!(
        campaign.start_at < campaign.end_at,
        "campaign {} ends ({}) before it starts ({})",
        campaign.id,
        campaign.end_at,
        campaign.start_at
    );
    assert!(
        campaign.end_at - campaign.start_at <= MAXIMUM_CAMPAIGN_LENGTH,
        "campaign {} window exceeds the maximum length",
        campaign.id
    );
}

/// Only a campaign that reached its goal can be claimed.
pub fn assert_claimed_implies_goal(campaign: &Campaign) {
    if campaign.claimed {
        assert!(
            campaign.pledged >= campaign.goal,
            "campaign {} claimed below its goal ({} < {})",
            campaign.id,
            campaign.pledged,
            campaign.goal
        );
    }
}

/// A contribution or withdrawal moves a value by exactly `delta`.
pub fn assert_delta(before: i128, after: i128, delta: i128) {
    assert_eq!(
        after,
        before + delta,
        "expected {} + {} but found {}",
        before,
        delta,
        after
    );
}

/// IDs are handed out sequentially starting from 1.
pub fn assert_sequential_ids(ids: &[u64]) {
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(*id, i as u64 + 1, "expected id {}, got {}", i + 1, id);
    }
}

/// Tokens held by the contract match the outstanding pledges.
pub fn assert_escrow_covers_pledges(escrow_balance: i128, pledges: &[i128]) {
    let outstanding: i128 = pledges.iter().sum();
    assert_eq!(
        escrow_balance, outstanding,
        "escrow holds {} but pledges add up to {}",
        escrow_balance, outstanding
    );
}

/// Phases only move forward:
///   Pending -> Active -> Succeeded -> Claimed
///   Pending -> Active -> Failed
pub fn assert_valid_phase_transition(from: CampaignPhase, to: CampaignPhase) {
    use CampaignPhase::*;

    let valid = from == to
        || matches!(
            (from, to),
            (Pending, Active)
                | (Pending, Succeeded)
                | (Pending, Failed)
                | (Active, Succeeded)
                | (Active, Failed)
                | (Active, Claimed)
                | (Succeeded, Claimed)
        );

    assert!(
        valid,
        "invalid phase transition from {:?} to {:?}",
        from, to
    );
}

/// Fields fixed at launch stay unchanged.
pub fn assert_immutable_fields(original: &Campaign, current: &Campaign) {
    assert_eq!(original.id, current.id, "campaign id changed");
    assert_eq!(original.creator, current.creator, "campaign creator changed");
    assert_eq!(original.goal, current.goal, "campaign goal changed");
    assert_eq!(original.start_at, current.start_at, "campaign start_at changed");
    assert_eq!(original.end_at, current.end_at, "campaign end_at changed");
}

/// Run all stateless campaign invariants.
pub fn assert_all_campaign_invariants(campaign: &Campaign) {
    assert_pledged_non_negative(campaign);
    assert_goal_positive(campaign);
    assert_window_valid(campaign);
    assert_claimed_implies_goal(campaign);
}
