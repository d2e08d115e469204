//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the ledger.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key              | Type      | Description                            |
//! |------------------|-----------|----------------------------------------|
//! | `Token`          | `Address` | Token every campaign is funded in      |
//! | `CampaignCount`  | `u64`     | Last campaign ID handed out (0 = none) |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                 | Type             | Description                         |
//! |---------------------|------------------|-------------------------------------|
//! | `CampConfig(id)`    | `CampaignConfig` | Immutable campaign parameters       |
//! | `CampState(id)`     | `CampaignState`  | Pledged total and claimed flag      |
//! | `Pledge(id, addr)`  | `i128`           | Contributor's outstanding pledge    |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! A campaign exists exactly as long as its `CampConfig` entry does.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::types::{Campaign, CampaignConfig, CampaignState};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Token contract address (Instance).
    Token,
    /// Last assigned campaign ID (Instance).
    CampaignCount,
    /// Immutable campaign configuration keyed by ID (Persistent).
    CampConfig(u64),
    /// Mutable campaign state keyed by ID (Persistent).
    CampState(u64),
    /// Pledge of a contributor to a campaign (Persistent).
    Pledge(u64, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

/// Token address set by the constructor.
pub fn get_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotFound))
}

pub fn get_campaign_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Reserve the next campaign ID. IDs start at 1 and are never reused.
pub fn next_campaign_id(env: &Env) -> Result<u64, Error> {
    let id = get_campaign_count(env)
        .checked_add(1)
        .ok_or(Error::Overflow)?;
    env.storage().instance().set(&DataKey::CampaignCount, &id);
    Ok(id)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save the config and initial state of a freshly launched campaign.
pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let config_key = DataKey::CampConfig(campaign.id);
    let state_key = DataKey::CampState(campaign.id);

    let config = CampaignConfig {
        id: campaign.id,
        creator: campaign.creator.clone(),
        goal: campaign.goal,
        start_at: campaign.start_at,
        end_at: campaign.end_at,
    };
    let state = CampaignState {
        pledged: campaign.pledged,
        claimed: campaign.claimed,
    };

    env.storage().persistent().set(&config_key, &config);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

pub fn load_campaign_config(env: &Env, id: u64) -> Result<CampaignConfig, Error> {
    let key = DataKey::CampConfig(id);
    let config: CampaignConfig = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    bump_persistent(env, &key);
    Ok(config)
}

pub fn load_campaign_state(env: &Env, id: u64) -> Result<CampaignState, Error> {
    let key = DataKey::CampState(id);
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    bump_persistent(env, &key);
    Ok(state)
}

/// Load config and state together, as most entry points need both.
pub fn load_campaign_pair(env: &Env, id: u64) -> Result<(CampaignConfig, CampaignState), Error> {
    let config = load_campaign_config(env, id)?;
    let state = load_campaign_state(env, id)?;
    Ok((config, state))
}

pub fn load_campaign(env: &Env, id: u64) -> Result<Campaign, Error> {
    let (config, state) = load_campaign_pair(env, id)?;
    Ok(Campaign::from_parts(config, state))
}

pub fn save_campaign_state(env: &Env, id: u64, state: &CampaignState) {
    let key = DataKey::CampState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Delete a campaign. Pledges cannot exist before the start time, which is
/// the only time a campaign may be removed, so no pledge entries are touched.
pub fn remove_campaign(env: &Env, id: u64) {
    env.storage().persistent().remove(&DataKey::CampConfig(id));
    env.storage().persistent().remove(&DataKey::CampState(id));
}

// ── Pledge ledger ────────────────────────────────────────────────────

pub fn get_pledge(env: &Env, id: u64, contributor: &Address) -> i128 {
    let key = DataKey::Pledge(id, contributor.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

/// Store a pledge amount; a zero amount removes the entry.
pub fn set_pledge(env: &Env, id: u64, contributor: &Address, amount: i128) {
    let key = DataKey::Pledge(id, contributor.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        bump_persistent(env, &key);
    }
}

/// Add `amount` to a contributor's pledge and return the new value.
pub fn add_to_pledge(
    env: &Env,
    id: u64,
    contributor: &Address,
    amount: i128,
) -> Result<i128, Error> {
    let updated = get_pledge(env, id, contributor)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    set_pledge(env, id, contributor, updated);
    Ok(updated)
}

/// Zero out a contributor's pledge and return what it was.
pub fn drain_pledge(env: &Env, id: u64, contributor: &Address) -> i128 {
    let amount = get_pledge(env, id, contributor);
    if amount > 0 {
        set_pledge(env, id, contributor, 0);
    }
    amount
}
