use soroban_sdk::{log, Address, Env};

use crate::access::{require_not_paused, require_owner, require_valid_address};
use crate::error::StoError;
use crate::events;
use crate::phase::require_allocation_open;
use crate::storage;

/// Convert part of an investor's subscription into a binding allocation.
///
/// Repeated calls top up the allocation; they never replace it. Voting power
/// is untouched until the allocation is paid for.
pub fn allocate(
    env: &Env,
    caller: &Address,
    investor: &Address,
    units: u32,
) -> Result<(), StoError> {
    require_not_paused(env)?;
    require_owner(env, caller)?;

    let config = storage::get_config(env)?;
    require_allocation_open(&config, env.ledger().timestamp())?;
    require_valid_address(env, investor)?;

    if units == 0 {
        return Err(StoError::AllocationNotPositive);
    }

    let mut record = storage::get_investor(env, investor).unwrap_or_default();
    // a paid allocation is final; topping it up would detach voting power from it
    if record.has_paid {
        return Err(StoError::AlreadyPaid);
    }
    let unallocated = record.subscribed_units - record.allocated_units;
    if units > unallocated {
        return Err(StoError::InvalidAllocationAmount);
    }

    let total_allocated = storage::get_total_allocated(env)
        .checked_add(units)
        .ok_or(StoError::ArithmeticOverflow)?;
    if total_allocated > config.total_supply_units {
        log!(
            env,
            "allocation exceeds total supply",
            total_allocated,
            config.total_supply_units
        );
        return Err(StoError::ExceedsTotalSupply);
    }

    record.allocated_units += units;
    storage::set_investor(env, investor, &record);
    storage::set_total_allocated(env, total_allocated);

    events::allocation(env, investor, units);
    Ok(())
}
