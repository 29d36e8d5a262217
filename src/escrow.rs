use soroban_sdk::{log, token, Address, Env};

use crate::access::{require_not_paused, require_valid_address};
use crate::error::StoError;
use crate::events;
use crate::phase::require_payment_open;
use crate::storage;
use crate::validation::required_payment;

/// Settle an allocation with an exact payment.
///
/// Transfers `amount` of the payment token from `investor` to the contract.
/// Over- and under-payment are both rejected; there is no partial payment
/// and no refund path.
pub fn pay(env: &Env, investor: &Address, amount: i128) -> Result<(), StoError> {
    require_not_paused(env)?;
    require_valid_address(env, investor)?;
    investor.require_auth();

    let config = storage::get_config(env)?;
    let mut record = storage::get_investor(env, investor).unwrap_or_default();

    if record.allocated_units == 0 {
        return Err(StoError::NoAllocation);
    }
    if record.has_paid {
        return Err(StoError::AlreadyPaid);
    }
    require_payment_open(&config, env.ledger().timestamp())?;

    let required = required_payment(record.allocated_units, config.unit_price)
        .ok_or(StoError::ArithmeticOverflow)?;
    if amount != required {
        log!(env, "payment rejected", amount, required);
        return Err(StoError::IncorrectPaymentAmount);
    }

    let total_voting_power = storage::get_total_voting_power(env)
        .checked_add(record.allocated_units as u64)
        .ok_or(StoError::ArithmeticOverflow)?;

    record.has_paid = true;
    record.voting_power = record.allocated_units;
    storage::set_investor(env, investor, &record);
    storage::set_total_voting_power(env, total_voting_power);
    storage::adjust_held_funds(env, amount)?;

    let contract_addr = env.current_contract_address();
    token::Client::new(env, &config.payment_token).transfer(investor, &contract_addr, &amount);

    events::payment(env, investor, amount);
    Ok(())
}

/// Allocated units times unit price; zero for unknown or unallocated investors.
pub fn payment_due_from(env: &Env, investor: &Address) -> Result<i128, StoError> {
    let config = storage::get_config(env)?;
    let allocated = storage::get_investor(env, investor)
        .map(|r| r.allocated_units)
        .unwrap_or(0);
    required_payment(allocated, config.unit_price).ok_or(StoError::ArithmeticOverflow)
}

pub fn contract_balance(env: &Env) -> i128 {
    storage::get_held_funds(env)
}
