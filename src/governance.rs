use soroban_sdk::{contracttype, log, Address, Env, String};

use crate::access::{require_not_paused, require_owner, require_valid_address};
use crate::error::StoError;
use crate::events;
use crate::storage::{self, ProposalRecord};
use crate::validation::{validate_description, validate_duration};

/// Lifecycle of a proposal. Derived from the record and ledger time; only
/// `executed` is persisted. A closed proposal that failed stays `Closed`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalState {
    /// Voting deadline not reached
    Open = 0,
    /// Deadline reached, not executed
    Closed = 1,
    /// Terminal
    Executed = 2,
}

pub fn proposal_state(proposal: &ProposalRecord, now: u64) -> ProposalState {
    if proposal.executed {
        ProposalState::Executed
    } else if now < proposal.voting_deadline {
        ProposalState::Open
    } else {
        ProposalState::Closed
    }
}

pub fn create(
    env: &Env,
    caller: &Address,
    description: &String,
    duration: u64,
) -> Result<u32, StoError> {
    require_not_paused(env)?;
    require_owner(env, caller)?;
    validate_description(description)?;
    validate_duration(duration)?;

    let now = env.ledger().timestamp();
    let voting_deadline = now
        .checked_add(duration)
        .ok_or(StoError::ArithmeticOverflow)?;
    let proposal_id = storage::get_proposal_count(env)
        .checked_add(1)
        .ok_or(StoError::ArithmeticOverflow)?;

    storage::set_proposal(
        env,
        &ProposalRecord {
            id: proposal_id,
            description: description.clone(),
            created_at: now,
            voting_deadline,
            for_votes: 0,
            against_votes: 0,
            voter_count: 0,
            executed: false,
        },
    );
    storage::set_proposal_count(env, proposal_id);

    events::proposal_created(env, proposal_id, description);
    Ok(proposal_id)
}

/// Cast the investor's full voting power. The weight is fixed when the vote
/// is cast.
pub fn vote(
    env: &Env,
    investor: &Address,
    proposal_id: u32,
    support: bool,
) -> Result<(), StoError> {
    require_not_paused(env)?;
    require_valid_address(env, investor)?;
    investor.require_auth();

    let mut proposal = storage::get_proposal(env, proposal_id).ok_or(StoError::ProposalNotFound)?;
    if proposal_state(&proposal, env.ledger().timestamp()) != ProposalState::Open {
        return Err(StoError::VotingEnded);
    }

    let record = storage::get_investor(env, investor)
        .filter(|r| r.has_paid)
        .ok_or(StoError::NotPaidInvestor)?;
    if storage::has_voted(env, proposal_id, investor) {
        return Err(StoError::AlreadyVoted);
    }

    let weight = record.voting_power as u64;
    if support {
        proposal.for_votes = proposal
            .for_votes
            .checked_add(weight)
            .ok_or(StoError::ArithmeticOverflow)?;
    } else {
        proposal.against_votes = proposal
            .against_votes
            .checked_add(weight)
            .ok_or(StoError::ArithmeticOverflow)?;
    }
    proposal.voter_count += 1;

    storage::mark_voted(env, proposal_id, investor);
    storage::set_proposal(env, &proposal);

    events::voted(env, proposal_id, investor, support);
    Ok(())
}

/// Mark a passed proposal as executed. What a passed proposal does is up to
/// off-chain governance; only the gate lives here.
pub fn execute(env: &Env, caller: &Address, proposal_id: u32) -> Result<(), StoError> {
    require_not_paused(env)?;
    require_owner(env, caller)?;

    let mut proposal = storage::get_proposal(env, proposal_id).ok_or(StoError::ProposalNotFound)?;
    match proposal_state(&proposal, env.ledger().timestamp()) {
        ProposalState::Open => return Err(StoError::VotingNotEnded),
        ProposalState::Executed => return Err(StoError::AlreadyExecuted),
        ProposalState::Closed => {}
    }

    if proposal.for_votes == 0 && proposal.against_votes == 0 {
        return Err(StoError::NoVotesCast);
    }
    if proposal.for_votes <= proposal.against_votes {
        log!(
            env,
            "proposal not passed",
            proposal_id,
            proposal.for_votes,
            proposal.against_votes
        );
        return Err(StoError::ProposalNotPassed);
    }

    proposal.executed = true;
    storage::set_proposal(env, &proposal);

    events::proposal_executed(env, proposal_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proposal(env: &Env, deadline: u64, executed: bool) -> ProposalRecord {
        ProposalRecord {
            id: 1,
            description: String::from_str(env, "x"),
            created_at: 0,
            voting_deadline: deadline,
            for_votes: 0,
            against_votes: 0,
            voter_count: 0,
            executed,
        }
    }

    #[test]
    fn state_follows_deadline_and_flag() {
        let env = Env::default();
        let open = proposal(&env, 1_000, false);
        assert_eq!(proposal_state(&open, 999), ProposalState::Open);
        assert_eq!(proposal_state(&open, 1_000), ProposalState::Closed);
        assert_eq!(proposal_state(&open, 5_000), ProposalState::Closed);

        let done = proposal(&env, 1_000, true);
        assert_eq!(proposal_state(&done, 999), ProposalState::Executed);
        assert_eq!(proposal_state(&done, 5_000), ProposalState::Executed);
    }
}
