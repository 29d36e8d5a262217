use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

// ── Event symbols ────────────────────────────────────────────
pub const EVENT_INIT: Symbol = symbol_short!("init");
pub const EVENT_SUBSCRIPTION: Symbol = symbol_short!("subscribe");
pub const EVENT_ALLOCATION: Symbol = symbol_short!("allocate");
pub const EVENT_PAYMENT: Symbol = symbol_short!("payment");
pub const EVENT_DIVIDEND_DISTRIBUTED: Symbol = symbol_short!("div_dist");
pub const EVENT_DIVIDEND_CLAIMED: Symbol = symbol_short!("div_claim");
pub const EVENT_PROPOSAL_CREATED: Symbol = symbol_short!("prop_new");
pub const EVENT_VOTED: Symbol = symbol_short!("voted");
pub const EVENT_PROPOSAL_EXECUTED: Symbol = symbol_short!("prop_exec");
pub const EVENT_PAUSED: Symbol = symbol_short!("paused");
pub const EVENT_UNPAUSED: Symbol = symbol_short!("unpaused");
pub const EVENT_EMERGENCY_OPERATOR_CHANGED: Symbol = symbol_short!("emerg_op");
pub const EVENT_OWNERSHIP_TRANSFERRED: Symbol = symbol_short!("owner_set");
pub const EVENT_FEE_RATES_SET: Symbol = symbol_short!("fee_set");

pub fn initialized(env: &Env, owner: &Address, total_supply_units: u32, unit_price: i128) {
    env.events()
        .publish((EVENT_INIT, owner.clone()), (total_supply_units, unit_price));
}

pub fn subscription(env: &Env, investor: &Address, units: u32) {
    env.events()
        .publish((EVENT_SUBSCRIPTION, investor.clone()), units);
}

pub fn allocation(env: &Env, investor: &Address, units: u32) {
    env.events()
        .publish((EVENT_ALLOCATION, investor.clone()), units);
}

pub fn payment(env: &Env, investor: &Address, amount: i128) {
    env.events()
        .publish((EVENT_PAYMENT, investor.clone()), amount);
}

pub fn dividend_distributed(env: &Env, quarter: u32, total_amount: i128) {
    env.events()
        .publish((EVENT_DIVIDEND_DISTRIBUTED, quarter), total_amount);
}

pub fn dividend_claimed(env: &Env, quarter: u32, investor: &Address, amount: i128) {
    env.events()
        .publish((EVENT_DIVIDEND_CLAIMED, quarter, investor.clone()), amount);
}

pub fn proposal_created(env: &Env, proposal_id: u32, description: &String) {
    env.events()
        .publish((EVENT_PROPOSAL_CREATED, proposal_id), description.clone());
}

pub fn voted(env: &Env, proposal_id: u32, investor: &Address, support: bool) {
    env.events()
        .publish((EVENT_VOTED, proposal_id, investor.clone()), support);
}

pub fn proposal_executed(env: &Env, proposal_id: u32) {
    env.events()
        .publish((EVENT_PROPOSAL_EXECUTED, proposal_id), ());
}

pub fn paused(env: &Env, operator: &Address) {
    env.events().publish((EVENT_PAUSED, operator.clone()), ());
}

pub fn unpaused(env: &Env, operator: &Address) {
    env.events().publish((EVENT_UNPAUSED, operator.clone()), ());
}

pub fn emergency_operator_changed(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (EVENT_EMERGENCY_OPERATOR_CHANGED,),
        (old.clone(), new.clone()),
    );
}

pub fn ownership_transferred(env: &Env, old: &Address, new: &Address) {
    env.events()
        .publish((EVENT_OWNERSHIP_TRANSFERRED,), (old.clone(), new.clone()));
}

pub fn fee_rates_set(env: &Env, platform_fee_bps: u32, dao_fee_bps: u32) {
    env.events()
        .publish((EVENT_FEE_RATES_SET,), (platform_fee_bps, dao_fee_bps));
}
