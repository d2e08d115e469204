//! # Campaign Ledger Contract
//!
//! A crowdfunding escrow. Creators launch campaigns with a goal and a time
//! window, contributors pledge tokens while the campaign runs, and once it ends
//! the funds either go to the creator (goal met) or back to the contributors
//! (goal missed).
//!
//! | Phase        | Entry Point(s)                                   |
//! |--------------|--------------------------------------------------|
//! | Bootstrap    | `__constructor`                                  |
//! | Setup        | [`CampaignLedger::launch`], [`CampaignLedger::cancel`] |
//! | Funding      | [`CampaignLedger::contribute`], [`CampaignLedger::withdraw`] |
//! | Settlement   | [`CampaignLedger::claim`], [`CampaignLedger::refund`] |
//! | Queries      | `get_campaign`, `get_pledge`, `get_phase`, `campaign_count`, `token`, `max_campaign_length` |
//!
//! ## Architecture
//!
//! Storage access is delegated to [`storage`] and token movements to
//! [`token_ledger`]. This file holds the entry points: their checks, state
//! updates and event emissions.
//!
//! Every entry point validates all of its preconditions before mutating
//! anything and reports the first one that fails. Returning an [`Error`]
//! aborts the invocation, so a failed token transfer also discards the state
//! changes made before it.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env};

pub mod events;
mod storage;
mod token_ledger;
mod types;

#[cfg(test)]
mod invariants;

pub use types::{Campaign, CampaignPhase};

/// Longest allowed campaign window: 90 days, in seconds.
pub const MAXIMUM_CAMPAIGN_LENGTH: u64 = 90 * 24 * 60 * 60;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotFound = 1,
    Unauthorized = 2,
    InvalidGoal = 3,
    InvalidAmount = 4,
    InvalidStartTime = 5,
    InvalidEndTime = 6,
    ExcessiveLength = 7,
    NotStarted = 8,
    Ended = 9,
    NotEnded = 10,
    AlreadyStarted = 11,
    GoalNotReached = 12,
    GoalReached = 13,
    AlreadyClaimed = 14,
    InsufficientPledge = 15,
    NoBalance = 16,
    /// The token contract rejected a transfer.
    TransferFailed = 17,
    /// Checked arithmetic on an ID or amount overflowed.
    Overflow = 18,
}

#[contract]
pub struct CampaignLedger;

#[contractimpl]
impl CampaignLedger {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Bind the contract to the token every campaign is funded in.
    pub fn __constructor(env: Env, token: Address) {
        storage::set_token(&env, &token);
    }

    /// Token contract used for contributions and payouts.
    pub fn token(env: Env) -> Address {
        storage::get_token(&env)
    }

    /// Longest allowed distance between `start_at` and `end_at`, in seconds.
    pub fn max_campaign_length(_env: Env) -> u64 {
        MAXIMUM_CAMPAIGN_LENGTH
    }

    // ─────────────────────────────────────────────────────────
    // Campaign setup
    // ─────────────────────────────────────────────────────────

    /// Launch a campaign and return its ID.
    ///
    /// - `goal` must be positive.
    /// - `start_at` must lie in the future and `end_at` after `start_at`.
    /// - The window may not exceed [`MAXIMUM_CAMPAIGN_LENGTH`].
    pub fn launch(
        env: Env,
        creator: Address,
        goal: i128,
        start_at: u64,
        end_at: u64,
    ) -> Result<u64, Error> {
        creator.require_auth();
        let now = env.ledger().timestamp();

        if goal <= 0 {
            return Err(Error::InvalidGoal);
        }
        if start_at <= now {
            return Err(Error::InvalidStartTime);
        }
        if end_at <= start_at {
            return Err(Error::InvalidEndTime);
        }
        if end_at - start_at > MAXIMUM_CAMPAIGN_LENGTH {
            return Err(Error::ExcessiveLength);
        }

        let id = storage::next_campaign_id(&env)?;
        let campaign = Campaign {
            id,
            creator: creator.clone(),
            goal,
            pledged: 0,
            start_at,
            end_at,
            claimed: false,
        };
        storage::save_campaign(&env, &campaign);

        events::emit_launched(&env, id, creator, goal, start_at, end_at);
        Ok(id)
    }

    /// Cancel a campaign that has not started yet. The record is removed and
    /// its ID is never handed out again.
    ///
    /// Checked in order: existence, creator, start time.
    pub fn cancel(env: Env, creator: Address, id: u64) -> Result<(), Error> {
        creator.require_auth();
        let now = env.ledger().timestamp();

        let config = storage::load_campaign_config(&env, id)?;
        if config.creator != creator {
            return Err(Error::Unauthorized);
        }
        if now >= config.start_at {
            return Err(Error::AlreadyStarted);
        }

        storage::remove_campaign(&env, id);

        events::emit_cancelled(&env, id);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Pledge `amount` tokens to a running campaign.
    pub fn contribute(env: Env, contributor: Address, id: u64, amount: i128) -> Result<(), Error> {
        contributor.require_auth();
        let now = env.ledger().timestamp();

        let (config, mut state) = storage::load_campaign_pair(&env, id)?;
        if now < config.start_at {
            return Err(Error::NotStarted);
        }
        if now >= config.end_at {
            return Err(Error::Ended);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        token_ledger::pull(&env, &contributor, amount)?;

        state.pledged = state.pledged.checked_add(amount).ok_or(Error::Overflow)?;
        storage::save_campaign_state(&env, id, &state);
        storage::add_to_pledge(&env, id, &contributor, amount)?;

        events::emit_contributed(&env, id, contributor, amount);
        Ok(())
    }

    /// Take back part or all of a pledge while the campaign is still running.
    pub fn withdraw(env: Env, contributor: Address, id: u64, amount: i128) -> Result<(), Error> {
        contributor.require_auth();
        let now = env.ledger().timestamp();

        let (config, mut state) = storage::load_campaign_pair(&env, id)?;
        if now < config.start_at {
            return Err(Error::NotStarted);
        }
        if now >= config.end_at {
            return Err(Error::Ended);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let pledge = storage::get_pledge(&env, id, &contributor);
        if pledge < amount {
            return Err(Error::InsufficientPledge);
        }

        state.pledged = state.pledged.checked_sub(amount).ok_or(Error::Overflow)?;
        storage::save_campaign_state(&env, id, &state);
        storage::set_pledge(&env, id, &contributor, pledge - amount);

        token_ledger::push(&env, &contributor, amount)?;

        events::emit_withdrawn(&env, id, contributor, amount);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Settlement
    // ─────────────────────────────────────────────────────────

    /// Transfer everything pledged to the creator of a successful campaign.
    /// Allowed once.
    ///
    /// Checked in order: existence, creator, end time, goal, claimed flag.
    pub fn claim(env: Env, creator: Address, id: u64) -> Result<(), Error> {
        creator.require_auth();
        let now = env.ledger().timestamp();

        let (config, mut state) = storage::load_campaign_pair(&env, id)?;
        if config.creator != creator {
            return Err(Error::Unauthorized);
        }
        if now < config.end_at {
            return Err(Error::NotEnded);
        }
        if state.pledged < config.goal {
            return Err(Error::GoalNotReached);
        }
        if state.claimed {
            return Err(Error::AlreadyClaimed);
        }

        state.claimed = true;
        storage::save_campaign_state(&env, id, &state);

        token_ledger::push(&env, &creator, state.pledged)?;

        log!(&env, "campaign claimed", id, state.pledged);
        events::emit_claimed(&env, id, creator, state.pledged);
        Ok(())
    }

    /// Return a contributor's whole pledge after a campaign missed its goal.
    ///
    /// The campaign's `pledged` total is left as it was.
    pub fn refund(env: Env, contributor: Address, id: u64) -> Result<(), Error> {
        contributor.require_auth();
        let now = env.ledger().timestamp();

        let (config, state) = storage::load_campaign_pair(&env, id)?;
        if now < config.end_at {
            return Err(Error::NotEnded);
        }
        if state.pledged >= config.goal {
            return Err(Error::GoalReached);
        }
        if storage::get_pledge(&env, id, &contributor) <= 0 {
            return Err(Error::NoBalance);
        }

        let amount = storage::drain_pledge(&env, id, &contributor);
        token_ledger::push(&env, &contributor, amount)?;

        log!(&env, "pledge refunded", id, amount);
        events::emit_refunded(&env, id, contributor, amount);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_campaign(env: Env, id: u64) -> Result<Campaign, Error> {
        storage::load_campaign(&env, id)
    }

    /// Outstanding pledge of `contributor` to campaign `id`; zero when none.
    ///
    /// A claim pays out every pledge at once, so a claimed campaign reports
    /// zero for all contributors.
    pub fn get_pledge(env: Env, id: u64, contributor: Address) -> i128 {
        match storage::load_campaign_state(&env, id) {
            Ok(state) if state.claimed => 0,
            _ => storage::get_pledge(&env, id, &contributor),
        }
    }

    /// Lifecycle phase of campaign `id` at the current ledger time.
    pub fn get_phase(env: Env, id: u64) -> Result<CampaignPhase, Error> {
        let campaign = storage::load_campaign(&env, id)?;
        Ok(campaign.phase_at(env.ledger().timestamp()))
    }

    /// Number of campaigns launched so far, which is also the highest ID.
    /// Cancelled campaigns are included.
    pub fn campaign_count(env: Env) -> u64 {
        storage::get_campaign_count(&env)
    }
}
