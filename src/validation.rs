use soroban_sdk::{contracttype, String};

use crate::error::StoError;
use crate::storage::{FeeRates, OfferingConfig};

pub const BPS_DENOMINATOR: i128 = 10_000;

/// Fee caps in basis points.
pub const MAX_PLATFORM_FEE_BPS: u32 = 50;
pub const MAX_DAO_FEE_BPS: u32 = 10;
pub const MAX_TOTAL_FEE_BPS: u32 = 60;

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const MIN_PROPOSAL_DURATION: u64 = SECONDS_PER_DAY;
pub const MAX_PROPOSAL_DURATION: u64 = 30 * SECONDS_PER_DAY;
pub const MAX_DESCRIPTION_LEN: u32 = 1_000;

pub const MAX_NAME_LEN: u32 = 64;

/// Fee preview for an amount. `net = amount - platform_fee - dao_fee`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeBreakdown {
    pub platform_fee: i128,
    pub dao_fee: i128,
    pub net: i128,
}

pub fn validate_config(config: &OfferingConfig) -> Result<(), StoError> {
    if config.subscription_start >= config.subscription_end
        || config.subscription_end >= config.payment_due
        || config.payment_due >= config.allocation_announcement
    {
        return Err(StoError::InvalidSchedule);
    }

    if config.unit_price <= 0
        || config.min_units_per_subscription == 0
        || config.min_units_per_subscription > config.max_units_per_investor
        || config.max_units_per_investor > config.total_supply_units
    {
        return Err(StoError::InvalidOfferingParams);
    }

    let name_len = config.name.len();
    if name_len == 0 || name_len > MAX_NAME_LEN {
        return Err(StoError::InvalidOfferingParams);
    }

    Ok(())
}

/// The combined cap is reported as a DAO-fee error.
pub fn validate_fee_rates(platform_bps: u32, dao_bps: u32) -> Result<(), StoError> {
    if platform_bps > MAX_PLATFORM_FEE_BPS {
        return Err(StoError::PlatformFeeTooHigh);
    }
    if dao_bps > MAX_DAO_FEE_BPS || platform_bps + dao_bps > MAX_TOTAL_FEE_BPS {
        return Err(StoError::DaoFeeTooHigh);
    }
    Ok(())
}

/// Description length is measured in bytes.
pub fn validate_description(description: &String) -> Result<(), StoError> {
    let len = description.len();
    if len == 0 {
        return Err(StoError::EmptyDescription);
    }
    if len > MAX_DESCRIPTION_LEN {
        return Err(StoError::DescriptionTooLong);
    }
    Ok(())
}

pub fn validate_duration(duration: u64) -> Result<(), StoError> {
    if duration < MIN_PROPOSAL_DURATION {
        return Err(StoError::DurationTooShort);
    }
    if duration > MAX_PROPOSAL_DURATION {
        return Err(StoError::DurationTooLong);
    }
    Ok(())
}

/// Exact amount owed for `units` at `unit_price`.
///
/// Formula: required = units × unit_price
pub fn required_payment(units: u32, unit_price: i128) -> Option<i128> {
    (units as i128).checked_mul(unit_price)
}

/// Investor's share of a dividend pool, rounded down.
///
/// Formula: share = total_amount × voting_power / total_voting_power
///
/// Example:
/// - total_amount: 100, voting_power: 10, total_voting_power: 15
/// - share: 1000 / 15 = 66
pub fn dividend_share(
    total_amount: i128,
    voting_power: u32,
    total_voting_power: u64,
) -> Option<i128> {
    if total_voting_power == 0 {
        return Some(0);
    }
    total_amount
        .checked_mul(voting_power as i128)?
        .checked_div(total_voting_power as i128)
}

pub fn fee_breakdown(amount: i128, rates: &FeeRates) -> Option<FeeBreakdown> {
    let platform_fee = amount
        .checked_mul(rates.platform_fee_bps as i128)?
        .checked_div(BPS_DENOMINATOR)?;
    let dao_fee = amount
        .checked_mul(rates.dao_fee_bps as i128)?
        .checked_div(BPS_DENOMINATOR)?;
    let net = amount.checked_sub(platform_fee)?.checked_sub(dao_fee)?;
    Some(FeeBreakdown {
        platform_fee,
        dao_fee,
        net,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{symbol_short, testutils::Address as _, Address, Env};

    fn config(env: &Env) -> OfferingConfig {
        OfferingConfig {
            name: String::from_str(env, "UniTower STO"),
            symbol: symbol_short!("UNITOWER"),
            subscription_start: 100,
            subscription_end: 200,
            payment_due: 300,
            allocation_announcement: 400,
            total_supply_units: 3_000,
            unit_price: 1_000,
            max_units_per_investor: 50,
            min_units_per_subscription: 1,
            payment_token: Address::generate(env),
        }
    }

    #[test]
    fn test_valid_config() {
        let env = Env::default();
        assert_eq!(validate_config(&config(&env)), Ok(()));
    }

    #[test]
    fn test_schedule_must_be_strictly_increasing() {
        let env = Env::default();

        let mut cfg = config(&env);
        cfg.subscription_end = cfg.subscription_start;
        assert_eq!(validate_config(&cfg), Err(StoError::InvalidSchedule));

        let mut cfg = config(&env);
        cfg.payment_due = 150;
        assert_eq!(validate_config(&cfg), Err(StoError::InvalidSchedule));

        let mut cfg = config(&env);
        cfg.allocation_announcement = cfg.payment_due;
        assert_eq!(validate_config(&cfg), Err(StoError::InvalidSchedule));
    }

    #[test]
    fn test_offering_constants() {
        let env = Env::default();

        let mut cfg = config(&env);
        cfg.unit_price = 0;
        assert_eq!(validate_config(&cfg), Err(StoError::InvalidOfferingParams));

        let mut cfg = config(&env);
        cfg.min_units_per_subscription = 0;
        assert_eq!(validate_config(&cfg), Err(StoError::InvalidOfferingParams));

        let mut cfg = config(&env);
        cfg.min_units_per_subscription = 51;
        assert_eq!(validate_config(&cfg), Err(StoError::InvalidOfferingParams));

        let mut cfg = config(&env);
        cfg.total_supply_units = 49;
        assert_eq!(validate_config(&cfg), Err(StoError::InvalidOfferingParams));

        let mut cfg = config(&env);
        cfg.name = String::from_str(&env, "");
        assert_eq!(validate_config(&cfg), Err(StoError::InvalidOfferingParams));
    }

    #[test]
    fn test_fee_caps() {
        assert_eq!(validate_fee_rates(10, 2), Ok(()));
        assert_eq!(validate_fee_rates(50, 10), Ok(()));
        assert_eq!(validate_fee_rates(51, 0), Err(StoError::PlatformFeeTooHigh));
        assert_eq!(validate_fee_rates(60, 2), Err(StoError::PlatformFeeTooHigh));
        assert_eq!(validate_fee_rates(10, 15), Err(StoError::DaoFeeTooHigh));
        assert_eq!(validate_fee_rates(35, 30), Err(StoError::DaoFeeTooHigh));
    }

    #[test]
    fn test_description_bounds() {
        let env = Env::default();
        assert_eq!(
            validate_description(&String::from_str(&env, "")),
            Err(StoError::EmptyDescription)
        );
        assert_eq!(validate_description(&String::from_str(&env, "x")), Ok(()));
        assert_eq!(
            validate_description(&String::from_bytes(&env, &[b'a'; 1_000])),
            Ok(())
        );
        assert_eq!(
            validate_description(&String::from_bytes(&env, &[b'a'; 1_001])),
            Err(StoError::DescriptionTooLong)
        );
    }

    #[test]
    fn test_duration_bounds() {
        assert_eq!(validate_duration(12 * 3_600), Err(StoError::DurationTooShort));
        assert_eq!(validate_duration(SECONDS_PER_DAY), Ok(()));
        assert_eq!(validate_duration(30 * SECONDS_PER_DAY), Ok(()));
        assert_eq!(
            validate_duration(31 * SECONDS_PER_DAY),
            Err(StoError::DurationTooLong)
        );
    }

    #[test]
    fn test_required_payment() {
        assert_eq!(required_payment(10, 1_000), Some(10_000));
        assert_eq!(required_payment(0, 1_000), Some(0));
        assert_eq!(required_payment(u32::MAX, i128::MAX), None);
    }

    #[test]
    fn test_dividend_share_rounds_down() {
        // Expected: 100 × 10 / 15 = 66.67 -> 66
        assert_eq!(dividend_share(100, 10, 15), Some(66));
        // Expected: 100 × 5 / 15 = 33.33 -> 33, one unit of dust stays in the pool
        assert_eq!(dividend_share(100, 5, 15), Some(33));
        assert_eq!(dividend_share(100, 10, 10), Some(100));
        assert_eq!(dividend_share(100, 0, 0), Some(0));
        assert_eq!(dividend_share(i128::MAX, 2, 3), None);
    }

    #[test]
    fn test_fee_breakdown() {
        let rates = FeeRates {
            platform_fee_bps: 50,
            dao_fee_bps: 10,
        };
        // Expected: 0.5% and 0.1% of 1,000,000
        let fees = fee_breakdown(1_000_000, &rates).unwrap();
        assert_eq!(fees.platform_fee, 5_000);
        assert_eq!(fees.dao_fee, 1_000);
        assert_eq!(fees.net, 994_000);

        let none = fee_breakdown(1_000_000, &FeeRates::default()).unwrap();
        assert_eq!(none.net, 1_000_000);
    }
}
