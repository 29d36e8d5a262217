use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::error::StoError;

// ── TTL ──────────────────────────────────────────────────────
// Ledgers at ~5s each: 7 days threshold, 30 / 60 days extension.
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = 120_960;
pub const INSTANCE_BUMP_AMOUNT: u32 = 518_400;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 1_051_200;

/// Immutable offering parameters, supplied once to `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OfferingConfig {
    /// Offering display name
    pub name: String,
    /// Offering ticker
    pub symbol: Symbol,
    /// Subscriptions accepted from this timestamp (inclusive)
    pub subscription_start: u64,
    /// Subscriptions closed from this timestamp; allocation opens
    pub subscription_end: u64,
    /// Payments accepted strictly before this timestamp
    pub payment_due: u64,
    /// Public allocation announcement; post-issuance from here on
    pub allocation_announcement: u64,
    /// Units available in the whole offering
    pub total_supply_units: u32,
    /// Price of one unit in payment-token base units
    pub unit_price: i128,
    /// Cumulative subscription cap per investor
    pub max_units_per_investor: u32,
    /// Smallest accepted single subscription
    pub min_units_per_subscription: u32,
    /// Token used for payments, dividend funding and payouts
    pub payment_token: Address,
}

/// Per-investor ledger entry. Created on first subscription, never removed.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InvestorRecord {
    pub subscribed_units: u32,
    pub allocated_units: u32,
    pub has_paid: bool,
    /// Equals `allocated_units` once paid, zero before.
    pub voting_power: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DividendRecord {
    pub quarter: u32,
    pub total_amount: i128,
    pub claimed_amount: i128,
    pub claim_count: u32,
    pub registered_at: u64,
    pub distributed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalRecord {
    pub id: u32,
    pub description: String,
    pub created_at: u64,
    pub voting_deadline: u64,
    pub for_votes: u64,
    pub against_votes: u64,
    pub voter_count: u32,
    pub executed: bool,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FeeRates {
    pub platform_fee_bps: u32,
    pub dao_fee_bps: u32,
}

/// Storage keys. Globals live in instance storage; per-investor, per-quarter
/// and per-proposal entries live in persistent storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Owner,
    EmergencyOperator,
    Paused,
    FeeRates,
    TotalAllocated,
    TotalVotingPower,
    HeldFunds,
    ProposalCount,
    Investor(Address),
    Dividend(u32),
    /// (quarter, investor) -> claimed flag
    DividendClaim(u32, Address),
    Proposal(u32),
    /// (proposal_id, investor) -> voted flag
    Vote(u32, Address),
}

/// Keeps the contract instance (config and globals) alive. Called at the
/// top of every mutating entry point.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ── Globals ──────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<OfferingConfig, StoError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(StoError::NotInitialized)
}

pub fn set_config(env: &Env, config: &OfferingConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owner(env: &Env) -> Result<Address, StoError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(StoError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_emergency_operator(env: &Env) -> Result<Address, StoError> {
    env.storage()
        .instance()
        .get(&DataKey::EmergencyOperator)
        .ok_or(StoError::NotInitialized)
}

pub fn set_emergency_operator(env: &Env, operator: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::EmergencyOperator, operator);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<DataKey, bool>(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_fee_rates(env: &Env) -> FeeRates {
    env.storage()
        .instance()
        .get(&DataKey::FeeRates)
        .unwrap_or_default()
}

pub fn set_fee_rates(env: &Env, rates: &FeeRates) {
    env.storage().instance().set(&DataKey::FeeRates, rates);
}

pub fn get_total_allocated(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::TotalAllocated)
        .unwrap_or(0)
}

pub fn set_total_allocated(env: &Env, units: u32) {
    env.storage().instance().set(&DataKey::TotalAllocated, &units);
}

pub fn get_total_voting_power(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TotalVotingPower)
        .unwrap_or(0)
}

pub fn set_total_voting_power(env: &Env, power: u64) {
    env.storage()
        .instance()
        .set(&DataKey::TotalVotingPower, &power);
}

pub fn get_held_funds(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::HeldFunds)
        .unwrap_or(0)
}

/// Adjusts the contract-held fund counter by `delta` (negative for payouts).
pub fn adjust_held_funds(env: &Env, delta: i128) -> Result<i128, StoError> {
    let updated = get_held_funds(env)
        .checked_add(delta)
        .ok_or(StoError::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::HeldFunds, &updated);
    Ok(updated)
}

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn set_proposal_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &count);
}

// ── Investors ────────────────────────────────────────────────

pub fn get_investor(env: &Env, investor: &Address) -> Option<InvestorRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Investor(investor.clone()))
}

pub fn set_investor(env: &Env, investor: &Address, record: &InvestorRecord) {
    let key = DataKey::Investor(investor.clone());
    env.storage().persistent().set(&key, record);
    extend_persistent(env, &key);
}

// ── Dividends ────────────────────────────────────────────────

pub fn get_dividend(env: &Env, quarter: u32) -> Option<DividendRecord> {
    env.storage().persistent().get(&DataKey::Dividend(quarter))
}

pub fn has_dividend(env: &Env, quarter: u32) -> bool {
    env.storage().persistent().has(&DataKey::Dividend(quarter))
}

pub fn set_dividend(env: &Env, record: &DividendRecord) {
    let key = DataKey::Dividend(record.quarter);
    env.storage().persistent().set(&key, record);
    extend_persistent(env, &key);
}

pub fn has_claimed(env: &Env, quarter: u32, investor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::DividendClaim(quarter, investor.clone()))
}

pub fn mark_claimed(env: &Env, quarter: u32, investor: &Address) {
    let key = DataKey::DividendClaim(quarter, investor.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
}

// ── Proposals ────────────────────────────────────────────────

pub fn get_proposal(env: &Env, proposal_id: u32) -> Option<ProposalRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

pub fn set_proposal(env: &Env, proposal: &ProposalRecord) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    extend_persistent(env, &key);
}

pub fn has_voted(env: &Env, proposal_id: u32, investor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Vote(proposal_id, investor.clone()))
}

pub fn mark_voted(env: &Env, proposal_id: u32, investor: &Address) {
    let key = DataKey::Vote(proposal_id, investor.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
}
