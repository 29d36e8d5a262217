use soroban_sdk::{log, Address, Env};

use crate::error::StoError;
use crate::events;
use crate::storage::{self, FeeRates};
use crate::validation::validate_fee_rates;

/// Returns `ContractPaused` while the emergency switch is on.
/// Call first in every state-mutating ledger, dividend and governance entry point.
pub fn require_not_paused(env: &Env) -> Result<(), StoError> {
    if storage::is_paused(env) {
        return Err(StoError::ContractPaused);
    }
    Ok(())
}

/// The contract's own address stands in for the null identity.
pub fn require_valid_address(env: &Env, address: &Address) -> Result<(), StoError> {
    if *address == env.current_contract_address() {
        return Err(StoError::InvalidAddress);
    }
    Ok(())
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), StoError> {
    caller.require_auth();
    let owner = storage::get_owner(env)?;
    if *caller != owner {
        return Err(StoError::Unauthorized);
    }
    Ok(())
}

pub fn require_emergency_operator(env: &Env, caller: &Address) -> Result<(), StoError> {
    caller.require_auth();
    let operator = storage::get_emergency_operator(env)?;
    if *caller != operator {
        return Err(StoError::NotEmergencyOperator);
    }
    Ok(())
}

/// Pause switch. Idempotent.
pub fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), StoError> {
    require_emergency_operator(env, caller)?;
    storage::set_paused(env, paused);
    if paused {
        log!(env, "emergency pause engaged");
        events::paused(env, caller);
    } else {
        log!(env, "emergency pause lifted");
        events::unpaused(env, caller);
    }
    Ok(())
}

pub fn set_emergency_operator(
    env: &Env,
    caller: &Address,
    operator: &Address,
) -> Result<(), StoError> {
    require_owner(env, caller)?;
    require_valid_address(env, operator)?;

    let old = storage::get_emergency_operator(env)?;
    storage::set_emergency_operator(env, operator);
    events::emergency_operator_changed(env, &old, operator);
    Ok(())
}

/// Single-step owner transfer. The emergency operator is left unchanged.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), StoError> {
    require_owner(env, caller)?;
    require_valid_address(env, new_owner)?;

    storage::set_owner(env, new_owner);
    events::ownership_transferred(env, caller, new_owner);
    Ok(())
}

pub fn set_fee_rates(
    env: &Env,
    caller: &Address,
    platform_fee_bps: u32,
    dao_fee_bps: u32,
) -> Result<(), StoError> {
    require_owner(env, caller)?;
    validate_fee_rates(platform_fee_bps, dao_fee_bps)?;

    storage::set_fee_rates(
        env,
        &FeeRates {
            platform_fee_bps,
            dao_fee_bps,
        },
    );
    log!(env, "fee rates set", platform_fee_bps, dao_fee_bps);
    events::fee_rates_set(env, platform_fee_bps, dao_fee_bps);
    Ok(())
}
