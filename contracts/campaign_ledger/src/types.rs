//! # Types
//!
//! Shared data structures used across all modules of the campaign ledger.
//!
//! ## Config / State split
//!
//! A `Campaign` is stored as two separate ledger entries:
//!
//! - [`CampaignConfig`] — written once at launch; never mutated.
//! - [`CampaignState`] — rewritten on every contribution, withdrawal and claim.
//!
//! The public API exposes the reconstructed [`Campaign`] struct.
//!
//! ## Phases
//!
//! [`CampaignPhase`] is never stored. It is derived from the campaign record
//! and the ledger timestamp:
//!
//! ```text
//! Pending ──► Active ──► Succeeded ──► Claimed
//!    │           └─────► Failed
//!    └──► (cancelled: record removed)
//! ```

use soroban_sdk::{contracttype, Address};

/// Immutable campaign parameters, written once by `launch`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    pub creator: Address,
    pub goal: i128,
    pub start_at: u64,
    pub end_at: u64,
}

/// Mutable campaign state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    pub pledged: i128,
    pub claimed: bool,
}

/// Full representation of a campaign, returned by `get_campaign`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Sequential ID, starting at 1.
    pub id: u64,
    /// Address that launched the campaign and may claim its funds.
    pub creator: Address,
    /// Amount of tokens required for the campaign to succeed.
    pub goal: i128,
    /// Net amount contributed. Refunds leave it untouched, so after a failed
    /// campaign it keeps the total that was raised.
    pub pledged: i128,
    /// First ledger timestamp at which contributions are accepted.
    pub start_at: u64,
    /// First ledger timestamp at which the campaign is over.
    pub end_at: u64,
    /// Set once the creator has claimed the funds.
    pub claimed: bool,
}

impl Campaign {
    pub(crate) fn from_parts(config: CampaignConfig, state: CampaignState) -> Self {
        Campaign {
            id: config.id,
            creator: config.creator,
            goal: config.goal,
            pledged: state.pledged,
            start_at: config.start_at,
            end_at: config.end_at,
            claimed: state.claimed,
        }
    }

    /// Whether the pledged total covers the goal.
    pub fn goal_reached(&self) -> bool {
        self.pledged >= self.goal
    }

    /// Lifecycle phase of the campaign at ledger time `now`.
    pub fn phase_at(&self, now: u64) -> CampaignPhase {
        if now < self.start_at {
            CampaignPhase::Pending
        } else if now < self.end_at {
            CampaignPhase::Active
        } else if !self.goal_reached() {
            CampaignPhase::Failed
        } else if self.claimed {
            CampaignPhase::Claimed
        } else {
            CampaignPhase::Succeeded
        }
    }
}

/// Lifecycle phase of a campaign.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignPhase {
    /// Launched, not yet started. The creator may still cancel it.
    Pending,
    /// Accepting contributions and withdrawals.
    Active,
    /// Ended with the goal reached; the creator can claim.
    Succeeded,
    /// Ended with the goal reached and the funds claimed.
    Claimed,
    /// Ended below the goal; contributors can refund.
    Failed,
}
