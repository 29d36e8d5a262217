use soroban_sdk::{Address, Env};

use crate::access::{require_not_paused, require_valid_address};
use crate::error::StoError;
use crate::events;
use crate::phase::require_subscription_open;
use crate::storage::{self, InvestorRecord};

/// Add `units` to the investor's subscription.
///
/// Aggregate subscriptions across investors are not capped; oversubscription
/// is resolved when the owner allocates.
pub fn subscribe(env: &Env, investor: &Address, units: u32) -> Result<(), StoError> {
    require_not_paused(env)?;
    require_valid_address(env, investor)?;
    investor.require_auth();

    let config = storage::get_config(env)?;
    require_subscription_open(&config, env.ledger().timestamp())?;

    if units < config.min_units_per_subscription {
        return Err(StoError::BelowMinimumSubscription);
    }
    if units > config.max_units_per_investor {
        return Err(StoError::ExceedsMaximumSubscription);
    }

    let mut record = storage::get_investor(env, investor).unwrap_or_default();
    let subscribed = record
        .subscribed_units
        .checked_add(units)
        .ok_or(StoError::ArithmeticOverflow)?;
    if subscribed > config.max_units_per_investor {
        return Err(StoError::ExceedsPersonalLimit);
    }

    record.subscribed_units = subscribed;
    storage::set_investor(env, investor, &record);

    events::subscription(env, investor, units);
    Ok(())
}

pub fn investor_info(env: &Env, investor: &Address) -> Result<InvestorRecord, StoError> {
    require_valid_address(env, investor)?;
    storage::get_investor(env, investor).ok_or(StoError::InvestorNotFound)
}
