use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignLaunched {
    pub id: u64,
    pub creator: Address,
    pub goal: i128,
    pub start_at: u64,
    pub end_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCancelled {
    pub id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contributed {
    pub id: u64,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub id: u64,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claimed {
    pub id: u64,
    pub creator: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Refunded {
    pub id: u64,
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_launched(env: &Env, id: u64, creator: Address, goal: i128, start_at: u64, end_at: u64) {
    let topics = (symbol_short!("launch"), id);
    let data = CampaignLaunched {
        id,
        creator,
        goal,
        start_at,
        end_at,
    };
    env.events().publish(topics, data);
}

pub fn emit_cancelled(env: &Env, id: u64) {
    let topics = (symbol_short!("cancel"), id);
    env.events().publish(topics, CampaignCancelled { id });
}

pub fn emit_contributed(env: &Env, id: u64, contributor: Address, amount: i128) {
    let topics = (symbol_short!("contrib"), id);
    let data = Contributed {
        id,
        contributor,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_withdrawn(env: &Env, id: u64, contributor: Address, amount: i128) {
    let topics = (symbol_short!("withdraw"), id);
    let data = Withdrawn {
        id,
        contributor,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_claimed(env: &Env, id: u64, creator: Address, amount: i128) {
    let topics = (symbol_short!("claim"), id);
    let data = Claimed {
        id,
        creator,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_refunded(env: &Env, id: u64, contributor: Address, amount: i128) {
    let topics = (symbol_short!("refund"), id);
    let data = Refunded {
        id,
        contributor,
        amount,
    };
    env.events().publish(topics, data);
}
