use soroban_sdk::{log, token, Address, Env};

use crate::access::{require_not_paused, require_owner, require_valid_address};
use crate::error::StoError;
use crate::events;
use crate::storage::{self, DividendRecord};
use crate::validation::dividend_share;

/// Register and fully fund a dividend pool for `quarter`.
///
/// Quarter and amount are validated before the funding check, so a
/// quarter-0 call reports `InvalidQuarter` whatever was sent.
pub fn register(
    env: &Env,
    caller: &Address,
    quarter: u32,
    total_amount: i128,
    funds_sent: i128,
) -> Result<(), StoError> {
    require_not_paused(env)?;
    require_owner(env, caller)?;

    if quarter == 0 {
        return Err(StoError::InvalidQuarter);
    }
    if total_amount <= 0 {
        return Err(StoError::InvalidDividendAmount);
    }
    if storage::has_dividend(env, quarter) {
        return Err(StoError::DividendAlreadyRegistered);
    }
    if funds_sent != total_amount {
        log!(env, "dividend funding mismatch", quarter, funds_sent, total_amount);
        return Err(StoError::IncorrectDividendFunding);
    }

    let config = storage::get_config(env)?;

    storage::set_dividend(
        env,
        &DividendRecord {
            quarter,
            total_amount,
            claimed_amount: 0,
            claim_count: 0,
            registered_at: env.ledger().timestamp(),
            distributed: true,
        },
    );
    storage::adjust_held_funds(env, total_amount)?;

    let contract_addr = env.current_contract_address();
    token::Client::new(env, &config.payment_token).transfer(caller, &contract_addr, &funds_sent);

    events::dividend_distributed(env, quarter, total_amount);
    Ok(())
}

/// Pay out the investor's share of `quarter`'s pool. Returns the amount paid.
///
/// The share is taken against the total voting power at claim time and is
/// capped by what is left in the pool, so the pool is never over-drawn.
pub fn claim(env: &Env, investor: &Address, quarter: u32) -> Result<i128, StoError> {
    require_not_paused(env)?;
    require_valid_address(env, investor)?;
    investor.require_auth();

    let mut dividend = storage::get_dividend(env, quarter).ok_or(StoError::DividendNotFound)?;
    let record = storage::get_investor(env, investor)
        .filter(|r| r.has_paid)
        .ok_or(StoError::NotPaidInvestor)?;
    if storage::has_claimed(env, quarter, investor) {
        return Err(StoError::AlreadyClaimed);
    }

    let payout = entitlement(env, &dividend, record.voting_power)?;
    let config = storage::get_config(env)?;

    // Record the claim before any funds leave the contract.
    storage::mark_claimed(env, quarter, investor);
    dividend.claimed_amount += payout;
    dividend.claim_count += 1;
    storage::set_dividend(env, &dividend);
    storage::adjust_held_funds(env, -payout)?;

    if payout > 0 {
        let contract_addr = env.current_contract_address();
        token::Client::new(env, &config.payment_token).transfer(&contract_addr, investor, &payout);
    }

    events::dividend_claimed(env, quarter, investor, payout);
    Ok(payout)
}

/// Amount `claim` would pay right now; zero when the investor is not eligible.
pub fn preview(env: &Env, quarter: u32, investor: &Address) -> Result<i128, StoError> {
    let dividend = storage::get_dividend(env, quarter).ok_or(StoError::DividendNotFound)?;
    let power = match storage::get_investor(env, investor) {
        Some(r) if r.has_paid && !storage::has_claimed(env, quarter, investor) => r.voting_power,
        _ => return Ok(0),
    };
    entitlement(env, &dividend, power)
}

fn entitlement(env: &Env, dividend: &DividendRecord, voting_power: u32) -> Result<i128, StoError> {
    let share = dividend_share(
        dividend.total_amount,
        voting_power,
        storage::get_total_voting_power(env),
    )
    .ok_or(StoError::ArithmeticOverflow)?;
    let remaining = dividend.total_amount - dividend.claimed_amount;
    Ok(share.min(remaining))
}
