#![no_std]
#![deny(unsafe_code)]
#![deny(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

mod access;
mod allocation;
mod dividend;
mod error;
mod escrow;
mod events;
mod governance;
mod ledger;
mod phase;
mod storage;
mod validation;

pub use error::{ErrorKind, StoError};
pub use governance::ProposalState;
pub use phase::Phase;
pub use storage::{DividendRecord, FeeRates, InvestorRecord, OfferingConfig, ProposalRecord};
pub use validation::FeeBreakdown;

use soroban_sdk::{contract, contractimpl, Address, Env, String};

/// Contract version. Bumped when storage layout or semantics change.
pub const CONTRACT_VERSION: u32 = 1;

// ── Contract ─────────────────────────────────────────────────
#[contract]
pub struct UniTowerSto;

#[contractimpl]
impl UniTowerSto {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Store the offering configuration and make `owner` the owner and
    /// emergency operator. Can only be called once.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidSchedule`: Timestamps not strictly increasing
    /// - `InvalidOfferingParams`: Price, unit limits or name out of range
    pub fn initialize(env: Env, owner: Address, config: OfferingConfig) -> Result<(), StoError> {
        if storage::is_initialized(&env) {
            return Err(StoError::AlreadyInitialized);
        }
        owner.require_auth();
        validation::validate_config(&config)?;

        storage::extend_instance(&env);
        storage::set_config(&env, &config);
        storage::set_owner(&env, &owner);
        storage::set_emergency_operator(&env, &owner);
        storage::set_paused(&env, false);
        storage::set_fee_rates(&env, &FeeRates::default());

        events::initialized(&env, &owner, config.total_supply_units, config.unit_price);
        Ok(())
    }

    // ============================================
    // SUBSCRIPTION / ALLOCATION / PAYMENT
    // ============================================

    /// Subscribe `units` during the subscription window.
    ///
    /// # Errors
    /// - `ContractPaused`, `InvalidAddress`
    /// - `SubscriptionNotStarted` / `SubscriptionEnded`
    /// - `BelowMinimumSubscription`, `ExceedsMaximumSubscription`, `ExceedsPersonalLimit`
    pub fn subscribe(env: Env, investor: Address, units: u32) -> Result<(), StoError> {
        storage::extend_instance(&env);
        ledger::subscribe(&env, &investor, units)
    }

    /// Allocate `units` of `investor`'s subscription (owner only).
    ///
    /// # Errors
    /// - `ContractPaused`, `Unauthorized`, `SubscriptionNotEnded`, `InvalidAddress`
    /// - `AllocationNotPositive`, `AlreadyPaid`, `InvalidAllocationAmount`, `ExceedsTotalSupply`
    pub fn allocate(
        env: Env,
        caller: Address,
        investor: Address,
        units: u32,
    ) -> Result<(), StoError> {
        storage::extend_instance(&env);
        allocation::allocate(&env, &caller, &investor, units)
    }

    /// Pay exactly `allocated_units × unit_price` in the payment token.
    ///
    /// # Errors
    /// - `ContractPaused`, `InvalidAddress`, `NoAllocation`, `AlreadyPaid`
    /// - `PaymentPeriodEnded`, `IncorrectPaymentAmount`
    pub fn pay(env: Env, investor: Address, amount: i128) -> Result<(), StoError> {
        storage::extend_instance(&env);
        escrow::pay(&env, &investor, amount)
    }

    // ============================================
    // DIVIDENDS
    // ============================================

    /// Register and fund the dividend pool for `quarter` (owner only).
    /// `funds_sent` is pulled from the caller and must equal `total_amount`.
    ///
    /// # Errors
    /// - `ContractPaused`, `Unauthorized`
    /// - `InvalidQuarter`, `InvalidDividendAmount`, `DividendAlreadyRegistered`
    /// - `IncorrectDividendFunding`
    pub fn register_dividend(
        env: Env,
        caller: Address,
        quarter: u32,
        total_amount: i128,
        funds_sent: i128,
    ) -> Result<(), StoError> {
        storage::extend_instance(&env);
        dividend::register(&env, &caller, quarter, total_amount, funds_sent)
    }

    /// Claim the investor's share of `quarter`. Returns the amount paid out,
    /// which is capped by what is left in the pool.
    ///
    /// # Errors
    /// - `ContractPaused`, `InvalidAddress`, `DividendNotFound`
    /// - `NotPaidInvestor`, `AlreadyClaimed`
    pub fn claim_dividend(env: Env, investor: Address, quarter: u32) -> Result<i128, StoError> {
        storage::extend_instance(&env);
        dividend::claim(&env, &investor, quarter)
    }

    // ============================================
    // GOVERNANCE
    // ============================================

    /// Open a proposal for `duration` seconds (owner only). Returns its id.
    ///
    /// # Errors
    /// - `ContractPaused`, `Unauthorized`
    /// - `EmptyDescription`, `DescriptionTooLong`, `DurationTooShort`, `DurationTooLong`
    pub fn create_proposal(
        env: Env,
        caller: Address,
        description: String,
        duration: u64,
    ) -> Result<u32, StoError> {
        storage::extend_instance(&env);
        governance::create(&env, &caller, &description, duration)
    }

    /// Cast the investor's full voting power for or against a proposal.
    ///
    /// # Errors
    /// - `ContractPaused`, `InvalidAddress`, `ProposalNotFound`
    /// - `VotingEnded`, `NotPaidInvestor`, `AlreadyVoted`
    pub fn vote(
        env: Env,
        investor: Address,
        proposal_id: u32,
        support: bool,
    ) -> Result<(), StoError> {
        storage::extend_instance(&env);
        governance::vote(&env, &investor, proposal_id, support)
    }

    /// Execute a closed proposal with a strict majority in favour (owner only).
    ///
    /// # Errors
    /// - `ContractPaused`, `Unauthorized`, `ProposalNotFound`
    /// - `VotingNotEnded`, `AlreadyExecuted`, `NoVotesCast`, `ProposalNotPassed`
    pub fn execute_proposal(env: Env, caller: Address, proposal_id: u32) -> Result<(), StoError> {
        storage::extend_instance(&env);
        governance::execute(&env, &caller, proposal_id)
    }

    // ============================================
    // ACCESS / PAUSE CONTROL
    // ============================================

    /// Pause the contract (emergency operator only). Idempotent.
    ///
    /// # Errors
    /// - `NotEmergencyOperator`: Caller is not the emergency operator
    pub fn emergency_pause(env: Env, caller: Address) -> Result<(), StoError> {
        storage::extend_instance(&env);
        access::set_paused(&env, &caller, true)
    }

    /// Unpause the contract (emergency operator only). Idempotent.
    ///
    /// # Errors
    /// - `NotEmergencyOperator`: Caller is not the emergency operator
    pub fn emergency_unpause(env: Env, caller: Address) -> Result<(), StoError> {
        storage::extend_instance(&env);
        access::set_paused(&env, &caller, false)
    }

    /// Set fee rates in basis points (owner only).
    /// Caps: platform ≤ 50, DAO ≤ 10, combined ≤ 60.
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the owner
    /// - `PlatformFeeTooHigh`, `DaoFeeTooHigh`
    pub fn set_fee_rates(
        env: Env,
        caller: Address,
        platform_fee_bps: u32,
        dao_fee_bps: u32,
    ) -> Result<(), StoError> {
        storage::extend_instance(&env);
        access::set_fee_rates(&env, &caller, platform_fee_bps, dao_fee_bps)
    }

    /// Hand the pause switch to `operator` (owner only).
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the owner
    /// - `InvalidAddress`: `operator` is the contract itself
    pub fn set_emergency_operator(
        env: Env,
        caller: Address,
        operator: Address,
    ) -> Result<(), StoError> {
        storage::extend_instance(&env);
        access::set_emergency_operator(&env, &caller, &operator)
    }

    /// Single-step ownership transfer (owner only).
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the owner
    /// - `InvalidAddress`: `new_owner` is the contract itself
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), StoError> {
        storage::extend_instance(&env);
        access::transfer_ownership(&env, &caller, &new_owner)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Investor record. `InvestorNotFound` before the first subscription.
    pub fn get_investor_info(env: Env, investor: Address) -> Result<InvestorRecord, StoError> {
        ledger::investor_info(&env, &investor)
    }

    /// Stored proposal record, including the vote tallies.
    pub fn get_proposal_info(env: Env, proposal_id: u32) -> Result<ProposalRecord, StoError> {
        storage::get_proposal(&env, proposal_id).ok_or(StoError::ProposalNotFound)
    }

    /// `Open`, `Closed` or `Executed`, derived from ledger time.
    pub fn get_proposal_state(env: Env, proposal_id: u32) -> Result<ProposalState, StoError> {
        let proposal = storage::get_proposal(&env, proposal_id).ok_or(StoError::ProposalNotFound)?;
        Ok(governance::proposal_state(&proposal, env.ledger().timestamp()))
    }

    /// Dividend pool for `quarter`, with the amount claimed so far.
    pub fn get_dividend_info(env: Env, quarter: u32) -> Result<DividendRecord, StoError> {
        storage::get_dividend(&env, quarter).ok_or(StoError::DividendNotFound)
    }

    /// Funds held by the contract: payments plus dividend funding minus payouts.
    pub fn get_contract_balance(env: Env) -> i128 {
        escrow::contract_balance(&env)
    }

    pub fn get_config(env: Env) -> Result<OfferingConfig, StoError> {
        storage::get_config(&env)
    }

    /// Current phase, recomputed from ledger time.
    pub fn get_phase(env: Env) -> Result<Phase, StoError> {
        let config = storage::get_config(&env)?;
        Ok(phase::current_phase(&config, env.ledger().timestamp()))
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    /// Current owner.
    pub fn get_owner(env: Env) -> Result<Address, StoError> {
        storage::get_owner(&env)
    }

    pub fn get_emergency_operator(env: Env) -> Result<Address, StoError> {
        storage::get_emergency_operator(&env)
    }

    pub fn get_fee_rates(env: Env) -> FeeRates {
        storage::get_fee_rates(&env)
    }

    /// Fee preview for `amount` at the current rates. Fees are not deducted
    /// from any payout by this contract.
    pub fn calculate_fees(env: Env, amount: i128) -> Result<FeeBreakdown, StoError> {
        validation::fee_breakdown(amount, &storage::get_fee_rates(&env))
            .ok_or(StoError::ArithmeticOverflow)
    }

    pub fn get_total_allocated(env: Env) -> u32 {
        storage::get_total_allocated(&env)
    }

    /// Sum of voting power over all paid investors.
    pub fn get_total_voting_power(env: Env) -> u64 {
        storage::get_total_voting_power(&env)
    }

    /// Amount `pay` expects from `investor` (0 when nothing is allocated).
    pub fn get_required_payment(env: Env, investor: Address) -> Result<i128, StoError> {
        escrow::payment_due_from(&env, &investor)
    }

    pub fn get_proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    pub fn has_voted(env: Env, proposal_id: u32, investor: Address) -> bool {
        storage::has_voted(&env, proposal_id, &investor)
    }

    /// Whether `investor` has already claimed `quarter`.
    pub fn has_claimed(env: Env, quarter: u32, investor: Address) -> bool {
        storage::has_claimed(&env, quarter, &investor)
    }

    /// What `claim_dividend` would pay `investor` for `quarter` right now.
    pub fn preview_dividend(env: Env, quarter: u32, investor: Address) -> Result<i128, StoError> {
        dividend::preview(&env, quarter, &investor)
    }

    pub fn get_version(_env: Env) -> u32 {
        CONTRACT_VERSION
    }
}

mod test_auth;
mod test_invariants;
