#![cfg(test)]
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events as _},
    Address, Env, IntoVal, String,
};

use crate::test::{
    create_payment_token, make_client, mint_tokens, offering_config, paid_investor, set_time,
    setup, DAY, END, START, UNIT_PRICE,
};
use crate::{ErrorKind, StoError};

// ── pause control ────────────────────────────────────────────

#[test]
fn pause_non_operator_unauthorized() {
    let (env, client, owner, _pt) = setup();
    let attacker = Address::generate(&env);

    assert_eq!(
        client.try_emergency_pause(&attacker),
        Err(Ok(StoError::NotEmergencyOperator))
    );
    assert!(!client.is_paused());
    client.emergency_pause(&owner);
    assert!(client.is_paused());
}

#[test]
fn unpause_non_operator_unauthorized() {
    let (env, client, owner, _pt) = setup();
    client.emergency_pause(&owner);
    let attacker = Address::generate(&env);

    assert_eq!(
        client.try_emergency_unpause(&attacker),
        Err(Ok(StoError::NotEmergencyOperator))
    );
    assert!(client.is_paused());
    client.emergency_unpause(&owner);
    assert!(!client.is_paused());
}

#[test]
fn pause_is_idempotent() {
    let (_env, client, owner, _pt) = setup();
    client.emergency_pause(&owner);
    client.emergency_pause(&owner);
    assert!(client.is_paused());
    client.emergency_unpause(&owner);
    client.emergency_unpause(&owner);
    assert!(!client.is_paused());
}

#[test]
fn pause_emits_event() {
    let (env, client, owner, _pt) = setup();
    client.emergency_pause(&owner);

    let (_contract, topics, _data) = env.events().all().last().unwrap();
    assert_eq!(topics, (symbol_short!("paused"), owner.clone()).into_val(&env));
}

#[test]
fn pause_blocks_state_changes_and_unpause_restores() {
    let (env, client, owner, payment_token) = setup();
    let paid = paid_investor(&env, &client, &owner, &payment_token, 10);
    let id = client.create_proposal(&owner, &String::from_str(&env, "x"), &DAY);
    client.register_dividend(&owner, &1, &100, &100);

    let newcomer = Address::generate(&env);
    mint_tokens(&env, &payment_token, &newcomer, 1_000_000);
    set_time(&env, START + 10);
    client.subscribe(&newcomer, &10);
    set_time(&env, END + 10);
    client.allocate(&owner, &newcomer, &5);

    client.emergency_pause(&owner);
    let paused = Some(Ok(StoError::ContractPaused));

    set_time(&env, START + 10);
    assert_eq!(client.try_subscribe(&newcomer, &5).err(), paused);
    set_time(&env, END + 10);
    assert_eq!(client.try_allocate(&owner, &newcomer, &5).err(), paused);
    assert_eq!(client.try_pay(&newcomer, &(5 * UNIT_PRICE)).err(), paused);
    assert_eq!(client.try_vote(&paid, &id, &true).err(), paused);
    assert_eq!(
        client
            .try_create_proposal(&owner, &String::from_str(&env, "y"), &DAY)
            .err(),
        paused
    );
    assert_eq!(client.try_register_dividend(&owner, &2, &100, &100).err(), paused);
    assert_eq!(client.try_claim_dividend(&paid, &1).err(), paused);
    set_time(&env, END + 10 + DAY);
    assert_eq!(client.try_execute_proposal(&owner, &id).err(), paused);
    assert_eq!(StoError::ContractPaused.kind(), ErrorKind::Paused);

    // state untouched while paused
    let info = client.get_investor_info(&newcomer);
    assert_eq!(info.subscribed_units, 10);
    assert_eq!(info.allocated_units, 5);
    assert!(!info.has_paid);
    assert_eq!(client.get_proposal_info(&id).for_votes, 0);
    assert_eq!(client.get_proposal_count(), 1);
    assert!(!client.has_claimed(&1, &paid));

    client.emergency_unpause(&owner);
    assert_eq!(client.claim_dividend(&paid, &1), 100);
    set_time(&env, END + 10);
    client.pay(&newcomer, &(5 * UNIT_PRICE));
    assert_eq!(client.get_total_voting_power(), 15);
}

#[test]
fn admin_setters_work_while_paused() {
    let (env, client, owner, _pt) = setup();
    client.emergency_pause(&owner);

    client.set_fee_rates(&owner, &10, &5);
    let operator = Address::generate(&env);
    client.set_emergency_operator(&owner, &operator);
    assert_eq!(client.get_emergency_operator(), operator);

    client.emergency_unpause(&operator);
    assert!(!client.is_paused());
}

// ── emergency operator ───────────────────────────────────────

#[test]
fn set_emergency_operator_hands_over_pause_rights() {
    let (env, client, owner, _pt) = setup();
    let operator = Address::generate(&env);
    client.set_emergency_operator(&owner, &operator);

    let (_contract, topics, data) = env.events().all().last().unwrap();
    assert_eq!(topics, (symbol_short!("emerg_op"),).into_val(&env));
    let (old, new): (Address, Address) = data.into_val(&env);
    assert_eq!((old, new), (owner.clone(), operator.clone()));

    assert_eq!(
        client.try_emergency_pause(&owner),
        Err(Ok(StoError::NotEmergencyOperator))
    );
    client.emergency_pause(&operator);
    assert!(client.is_paused());
}

#[test]
fn set_emergency_operator_non_owner_no_mutation() {
    let (env, client, owner, _pt) = setup();
    let attacker = Address::generate(&env);
    assert_eq!(
        client.try_set_emergency_operator(&attacker, &attacker),
        Err(Ok(StoError::Unauthorized))
    );
    assert_eq!(client.get_emergency_operator(), owner);
}

#[test]
fn set_emergency_operator_rejects_null_identity() {
    let (_env, client, owner, _pt) = setup();
    assert_eq!(
        client.try_set_emergency_operator(&owner, &client.address),
        Err(Ok(StoError::InvalidAddress))
    );
    assert_eq!(client.get_emergency_operator(), owner);
}

// ── ownership ────────────────────────────────────────────────

#[test]
fn transfer_ownership_moves_owner_rights() {
    let (env, client, owner, _pt) = setup();
    let successor = Address::generate(&env);
    client.transfer_ownership(&owner, &successor);
    assert_eq!(client.get_owner(), successor);
    assert_eq!(client.get_emergency_operator(), owner);

    assert_eq!(
        client.try_create_proposal(&owner, &String::from_str(&env, "x"), &DAY),
        Err(Ok(StoError::Unauthorized))
    );
    client.create_proposal(&successor, &String::from_str(&env, "x"), &DAY);
}

#[test]
fn transfer_ownership_non_owner_no_mutation() {
    let (env, client, owner, _pt) = setup();
    let attacker = Address::generate(&env);
    assert_eq!(
        client.try_transfer_ownership(&attacker, &attacker),
        Err(Ok(StoError::Unauthorized))
    );
    assert_eq!(
        client.try_transfer_ownership(&owner, &client.address),
        Err(Ok(StoError::InvalidAddress))
    );
    assert_eq!(client.get_owner(), owner);
}

// ── fee rates ────────────────────────────────────────────────

#[test]
fn set_fee_rates_non_owner_no_mutation() {
    let (env, client, _owner, _pt) = setup();
    let attacker = Address::generate(&env);
    assert_eq!(
        client.try_set_fee_rates(&attacker, &10, &5),
        Err(Ok(StoError::Unauthorized))
    );
    assert_eq!(client.get_fee_rates().platform_fee_bps, 0);
}

#[test]
fn set_fee_rates_caps() {
    let (_env, client, owner, _pt) = setup();
    assert_eq!(
        client.try_set_fee_rates(&owner, &51, &0),
        Err(Ok(StoError::PlatformFeeTooHigh))
    );
    assert_eq!(
        client.try_set_fee_rates(&owner, &0, &11),
        Err(Ok(StoError::DaoFeeTooHigh))
    );
    client.set_fee_rates(&owner, &50, &10);
    let rates = client.get_fee_rates();
    assert_eq!((rates.platform_fee_bps, rates.dao_fee_bps), (50, 10));
}

// ── owner-only operations ────────────────────────────────────

#[test]
fn allocate_wrong_caller_no_mutation() {
    let (env, client, _owner, _pt) = setup();
    let investor = Address::generate(&env);
    set_time(&env, START);
    client.subscribe(&investor, &10);
    set_time(&env, END);

    assert_eq!(
        client.try_allocate(&investor, &investor, &10),
        Err(Ok(StoError::Unauthorized))
    );
    assert_eq!(client.get_investor_info(&investor).allocated_units, 0);
    assert_eq!(StoError::Unauthorized.kind(), ErrorKind::Authorization);
}

#[test]
fn register_dividend_wrong_caller_no_mutation() {
    let (env, client, _owner, payment_token) = setup();
    let attacker = Address::generate(&env);
    mint_tokens(&env, &payment_token, &attacker, 1_000);
    assert_eq!(
        client.try_register_dividend(&attacker, &1, &100, &100),
        Err(Ok(StoError::Unauthorized))
    );
    assert_eq!(client.try_get_dividend_info(&1), Err(Ok(StoError::DividendNotFound)));
    assert_eq!(client.get_contract_balance(), 0);
}

#[test]
fn proposal_wrong_caller_no_mutation() {
    let (env, client, owner, payment_token) = setup();
    let investor = paid_investor(&env, &client, &owner, &payment_token, 10);

    assert_eq!(
        client.try_create_proposal(&investor, &String::from_str(&env, "x"), &DAY),
        Err(Ok(StoError::Unauthorized))
    );
    assert_eq!(client.get_proposal_count(), 0);

    let id = client.create_proposal(&owner, &String::from_str(&env, "x"), &DAY);
    client.vote(&investor, &id, &true);
    set_time(&env, END + 10 + DAY);
    assert_eq!(
        client.try_execute_proposal(&investor, &id),
        Err(Ok(StoError::Unauthorized))
    );
    assert!(!client.get_proposal_info(&id).executed);
}

// ── missing signatures ───────────────────────────────────────

#[test]
fn initialize_missing_auth_no_mutation() {
    let env = Env::default();
    let client = make_client(&env);
    let owner = Address::generate(&env);
    let payment_token = create_payment_token(&env);

    assert!(client
        .try_initialize(&owner, &offering_config(&env, &payment_token))
        .is_err());
    assert_eq!(client.try_get_owner(), Err(Ok(StoError::NotInitialized)));
}

#[test]
fn subscribe_missing_auth_no_mutation() {
    let (env, client, _owner, _pt) = setup();
    let investor = Address::generate(&env);
    set_time(&env, START);
    env.set_auths(&[]);

    assert!(client.try_subscribe(&investor, &10).is_err());
    assert_eq!(
        client.try_get_investor_info(&investor),
        Err(Ok(StoError::InvestorNotFound))
    );
}

#[test]
fn pay_missing_auth_no_mutation() {
    let (env, client, owner, payment_token) = setup();
    let investor = Address::generate(&env);
    mint_tokens(&env, &payment_token, &investor, 1_000_000);
    set_time(&env, START);
    client.subscribe(&investor, &10);
    set_time(&env, END);
    client.allocate(&owner, &investor, &10);

    env.set_auths(&[]);
    assert!(client.try_pay(&investor, &(10 * UNIT_PRICE)).is_err());
    assert!(!client.get_investor_info(&investor).has_paid);
    assert_eq!(client.get_contract_balance(), 0);
}

#[test]
fn claim_missing_auth_no_mutation() {
    let (env, client, owner, payment_token) = setup();
    let investor = paid_investor(&env, &client, &owner, &payment_token, 10);
    client.register_dividend(&owner, &1, &100, &100);

    env.set_auths(&[]);
    assert!(client.try_claim_dividend(&investor, &1).is_err());
    assert!(!client.has_claimed(&1, &investor));
}

#[test]
fn vote_missing_auth_no_mutation() {
    let (env, client, owner, payment_token) = setup();
    let investor = paid_investor(&env, &client, &owner, &payment_token, 10);
    let id = client.create_proposal(&owner, &String::from_str(&env, "x"), &DAY);

    env.set_auths(&[]);
    assert!(client.try_vote(&investor, &id, &true).is_err());
    assert!(!client.has_voted(&id, &investor));
}

#[test]
fn pause_missing_auth_no_mutation() {
    let (env, client, owner, _pt) = setup();
    env.set_auths(&[]);
    assert!(client.try_emergency_pause(&owner).is_err());
    assert!(!client.is_paused());
}
