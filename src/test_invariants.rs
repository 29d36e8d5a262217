#![cfg(test)]
//! Randomized operation sequences checked against the ledger invariants.

extern crate std;

use arbitrary::Unstructured;
use soroban_sdk::{testutils::Address as _, Address, Env, Vec};

use crate::test::{
    balance, create_payment_token, make_client, mint_tokens, offering_config, set_time, END,
    START,
};
use crate::UniTowerStoClient;

const INVESTORS: u32 = 6;
const SUPPLY: u32 = 120;
const STEPS: usize = 64;

/// Fixed inputs, one run each. `Unstructured` reads them cyclically so every
/// run gets enough bytes for all steps.
const CORPUS: [&[u8]; 8] = [
    &[0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc],
    &[0xff, 0x01, 0xfe, 0x02, 0xfd, 0x03, 0xfc, 0x04, 0xfb, 0x05, 0xfa],
    &[0x13, 0x37, 0xc0, 0xde, 0xba, 0xbe, 0x42, 0x07, 0x5a, 0xa5, 0x3c],
    &[0x80, 0x7f, 0x40, 0x3f, 0x20, 0x1f, 0x10, 0x0f, 0x08, 0x07],
    &[0x05, 0x32, 0x01, 0x28, 0x02, 0x19, 0x03, 0x0a, 0x04, 0x31, 0x00, 0x2d, 0x09],
    &[0xde, 0xad, 0xbe, 0xef, 0x00, 0x00, 0x31, 0x31, 0x31, 0x02, 0x02],
    &[0x01, 0x01, 0x01, 0x01, 0x01, 0x32, 0x32, 0x32, 0x32, 0x32, 0x00, 0xff],
    &[0x9e, 0x37, 0x79, 0xb9, 0x7f, 0x4a, 0x7c, 0x15, 0xf3, 0x9c, 0xc0, 0x60, 0x5c, 0xed],
];

fn expand(input: &[u8], len: usize) -> std::vec::Vec<u8> {
    input.iter().copied().cycle().take(len).collect()
}

fn assert_ledger_consistent(
    env: &Env,
    client: &UniTowerStoClient,
    investors: &Vec<Address>,
    payment_token: &Address,
) {
    let mut allocated_sum: u32 = 0;
    let mut power_sum: u64 = 0;

    for investor in investors.iter() {
        let Ok(Ok(info)) = client.try_get_investor_info(&investor) else {
            continue;
        };
        assert!(info.allocated_units <= info.subscribed_units);
        assert!(info.subscribed_units <= client.get_config().max_units_per_investor);
        if info.has_paid {
            assert_eq!(info.voting_power, info.allocated_units);
        } else {
            assert_eq!(info.voting_power, 0);
        }
        allocated_sum += info.allocated_units;
        power_sum += info.voting_power as u64;
    }

    assert_eq!(client.get_total_allocated(), allocated_sum);
    assert!(allocated_sum <= SUPPLY);
    assert_eq!(client.get_total_voting_power(), power_sum);
    assert_eq!(
        client.get_contract_balance(),
        balance(env, payment_token, &client.address)
    );
}

fn run_sequence(input: &[u8]) {
    let env = Env::default();
    env.mock_all_auths();
    let client = make_client(&env);
    let owner = Address::generate(&env);
    let payment_token = create_payment_token(&env);
    let mut config = offering_config(&env, &payment_token);
    config.total_supply_units = SUPPLY;
    client.initialize(&owner, &config);
    mint_tokens(&env, &payment_token, &owner, 1_000_000);

    let mut investors = Vec::new(&env);
    for _ in 0..INVESTORS {
        let investor = Address::generate(&env);
        mint_tokens(&env, &payment_token, &investor, 1_000_000);
        investors.push_back(investor);
    }

    let bytes = expand(input, STEPS * 4);
    let mut u = Unstructured::new(&bytes);

    // subscription window
    set_time(&env, START);
    for _ in 0..STEPS / 2 {
        let who = investors.get_unchecked(u.int_in_range(0..=INVESTORS - 1).unwrap());
        let units: u32 = u.int_in_range(0..=60).unwrap();
        let _ = client.try_subscribe(&who, &units);
        assert_ledger_consistent(&env, &client, &investors, &payment_token);
    }

    // allocation window: allocations and payments interleave
    set_time(&env, END);
    for _ in 0..STEPS / 2 {
        let who = investors.get_unchecked(u.int_in_range(0..=INVESTORS - 1).unwrap());
        if u.arbitrary::<bool>().unwrap() {
            let units: u32 = u.int_in_range(0..=40).unwrap();
            let _ = client.try_allocate(&owner, &who, &units);
        } else {
            let due = client.get_required_payment(&who);
            let off_by: i128 = u.int_in_range(-1..=1).unwrap();
            let _ = client.try_pay(&who, &(due + off_by));
        }
        assert_ledger_consistent(&env, &client, &investors, &payment_token);
    }

    // every paid investor claims; the pool is never over-drawn
    let pool: i128 = 1_000 + u.int_in_range(0..=999).unwrap();
    client.register_dividend(&owner, &1, &pool, &pool);
    let mut paid_out: i128 = 0;
    for investor in investors.iter() {
        if let Ok(Ok(amount)) = client.try_claim_dividend(&investor, &1) {
            assert!(amount >= 0);
            paid_out += amount;
        }
    }
    assert!(paid_out <= pool);
    assert_eq!(client.get_dividend_info(&1).claimed_amount, paid_out);
    if client.get_total_voting_power() > 0 {
        assert!(pool - paid_out < INVESTORS as i128);
    }
    assert_ledger_consistent(&env, &client, &investors, &payment_token);
}

#[test]
fn random_sequences_preserve_ledger_invariants() {
    for input in CORPUS {
        run_sequence(input);
    }
}
