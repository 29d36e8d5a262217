use soroban_sdk::contracttype;

use crate::error::StoError;
use crate::storage::OfferingConfig;

/// Offering phase, derived from ledger time on every call and never stored.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Before `subscription_start`
    NotStarted = 0,
    /// `[subscription_start, subscription_end)`
    Subscription = 1,
    /// `[subscription_end, payment_due)`: owner allocates, allocated investors pay
    AllocationWindow = 2,
    /// `[payment_due, allocation_announcement)`: payments closed
    PaymentWindow = 3,
    /// From `allocation_announcement` on
    PostIssuance = 4,
}

pub fn current_phase(config: &OfferingConfig, now: u64) -> Phase {
    if now < config.subscription_start {
        Phase::NotStarted
    } else if now < config.subscription_end {
        Phase::Subscription
    } else if now < config.payment_due {
        Phase::AllocationWindow
    } else if now < config.allocation_announcement {
        Phase::PaymentWindow
    } else {
        Phase::PostIssuance
    }
}

pub fn require_subscription_open(config: &OfferingConfig, now: u64) -> Result<(), StoError> {
    if now < config.subscription_start {
        return Err(StoError::SubscriptionNotStarted);
    }
    if now >= config.subscription_end {
        return Err(StoError::SubscriptionEnded);
    }
    Ok(())
}

pub fn require_allocation_open(config: &OfferingConfig, now: u64) -> Result<(), StoError> {
    if now < config.subscription_end {
        return Err(StoError::SubscriptionNotEnded);
    }
    Ok(())
}

pub fn require_payment_open(config: &OfferingConfig, now: u64) -> Result<(), StoError> {
    if now >= config.payment_due {
        return Err(StoError::PaymentPeriodEnded);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{symbol_short, testutils::Address as _, Address, Env, String};

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
    fn boundaries_are_half_open() {
        let env = Env::default();
        let cfg = config(&env);

        assert_eq!(current_phase(&cfg, 0), Phase::NotStarted);
        assert_eq!(current_phase(&cfg, 99), Phase::NotStarted);
        assert_eq!(current_phase(&cfg, 100), Phase::Subscription);
        assert_eq!(current_phase(&cfg, 199), Phase::Subscription);
        assert_eq!(current_phase(&cfg, 200), Phase::AllocationWindow);
        assert_eq!(current_phase(&cfg, 299), Phase::AllocationWindow);
        assert_eq!(current_phase(&cfg, 300), Phase::PaymentWindow);
        assert_eq!(current_phase(&cfg, 399), Phase::PaymentWindow);
        assert_eq!(current_phase(&cfg, 400), Phase::PostIssuance);
        assert_eq!(current_phase(&cfg, u64::MAX), Phase::PostIssuance);
    }

    #[test]
    fn subscription_gate() {
        let env = Env::default();
        let cfg = config(&env);

        assert_eq!(
            require_subscription_open(&cfg, 99),
            Err(StoError::SubscriptionNotStarted)
        );
        assert_eq!(require_subscription_open(&cfg, 100), Ok(()));
        assert_eq!(
            require_subscription_open(&cfg, 200),
            Err(StoError::SubscriptionEnded)
        );
    }

    #[test]
    fn allocation_and_payment_gates() {
        let env = Env::default();
        let cfg = config(&env);

        assert_eq!(
            require_allocation_open(&cfg, 199),
            Err(StoError::SubscriptionNotEnded)
        );
        assert_eq!(require_allocation_open(&cfg, 200), Ok(()));
        // allocation stays legal after every later boundary
        assert_eq!(require_allocation_open(&cfg, 10_000), Ok(()));

        assert_eq!(require_payment_open(&cfg, 0), Ok(()));
        assert_eq!(require_payment_open(&cfg, 299), Ok(()));
        assert_eq!(
            require_payment_open(&cfg, 300),
            Err(StoError::PaymentPeriodEnded)
        );
    }
}
