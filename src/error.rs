use soroban_sdk::contracterror;

/// Contract error codes. Codes are grouped in ranges by [`ErrorKind`].
/// Auth failures on `require_auth` are signaled by host panic, not by a code.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum StoError {
    // ── Lifecycle (1-9) ──────────────────────────────────────
    /// `initialize` was already called.
    AlreadyInitialized = 1,
    /// Contract has no configuration yet.
    NotInitialized = 2,

    // ── Phase (10-19) ────────────────────────────────────────
    /// Subscription window has not opened.
    SubscriptionNotStarted = 10,
    /// Subscription window has closed.
    SubscriptionEnded = 11,
    /// Allocation requires the subscription window to be over.
    SubscriptionNotEnded = 12,
    /// Payment deadline has passed.
    PaymentPeriodEnded = 13,
    /// Proposal voting deadline has passed.
    VotingEnded = 14,
    /// Proposal cannot be executed before its deadline.
    VotingNotEnded = 15,

    // ── Authorization (20-29) ────────────────────────────────
    /// Caller is not the owner.
    Unauthorized = 20,
    /// Caller is not the emergency operator.
    NotEmergencyOperator = 21,
    /// Investor has not paid for an allocation.
    NotPaidInvestor = 22,

    // ── Paused (30) ──────────────────────────────────────────
    /// Contract is paused.
    ContractPaused = 30,

    // ── Validation (40-59) ───────────────────────────────────
    /// Identity parameter is the null identity (the contract itself).
    InvalidAddress = 40,
    /// Units below the per-subscription minimum.
    BelowMinimumSubscription = 41,
    /// Units above the per-investor maximum in a single call.
    ExceedsMaximumSubscription = 42,
    /// Cumulative subscription would pass the per-investor maximum.
    ExceedsPersonalLimit = 43,
    /// Allocation of zero units.
    AllocationNotPositive = 44,
    /// Allocation larger than the unallocated part of the subscription.
    InvalidAllocationAmount = 45,
    /// Allocation would pass the offering's total supply.
    ExceedsTotalSupply = 46,
    /// Investor has nothing allocated to pay for.
    NoAllocation = 47,
    /// Dividend quarter must be positive.
    InvalidQuarter = 48,
    /// Dividend amount must be positive.
    InvalidDividendAmount = 49,
    /// Proposal description is empty.
    EmptyDescription = 50,
    /// Proposal description is longer than 1000 bytes.
    DescriptionTooLong = 51,
    /// Proposal duration is shorter than one day.
    DurationTooShort = 52,
    /// Proposal duration is longer than thirty days.
    DurationTooLong = 53,
    /// Platform fee above its cap.
    PlatformFeeTooHigh = 54,
    /// DAO fee above its cap, or combined fees above the combined cap.
    DaoFeeTooHigh = 55,
    /// Offering timestamps are not strictly increasing.
    InvalidSchedule = 56,
    /// Offering constants are out of range.
    InvalidOfferingParams = 57,
    /// Checked arithmetic overflowed.
    ArithmeticOverflow = 58,

    // ── State conflict (60-69) ───────────────────────────────
    /// Investor already paid.
    AlreadyPaid = 60,
    /// Investor already voted on this proposal.
    AlreadyVoted = 61,
    /// Proposal already executed.
    AlreadyExecuted = 62,
    /// Investor already claimed this quarter's dividend.
    AlreadyClaimed = 63,
    /// Quarter already has a dividend.
    DividendAlreadyRegistered = 64,
    /// Proposal closed without any votes.
    NoVotesCast = 65,
    /// Proposal closed without a strict majority in favour.
    ProposalNotPassed = 66,

    // ── Not found (70-79) ────────────────────────────────────
    /// No ledger record for this investor.
    InvestorNotFound = 70,
    /// No proposal with this id.
    ProposalNotFound = 71,
    /// No dividend for this quarter.
    DividendNotFound = 72,

    // ── Insufficient value (80-89) ───────────────────────────
    /// Payment does not equal allocated units times unit price.
    IncorrectPaymentAmount = 80,
    /// Funds sent do not equal the declared dividend total.
    IncorrectDividendFunding = 81,
}

/// Error taxonomy used by callers that only care about the class of failure.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Phase,
    Authorization,
    Paused,
    Validation,
    StateConflict,
    NotFound,
    InsufficientValue,
}

impl StoError {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            1 => ErrorKind::StateConflict,
            2 => ErrorKind::NotFound,
            10..=19 => ErrorKind::Phase,
            20..=29 => ErrorKind::Authorization,
            30 => ErrorKind::Paused,
            40..=59 => ErrorKind::Validation,
            60..=69 => ErrorKind::StateConflict,
            70..=79 => ErrorKind::NotFound,
            _ => ErrorKind::InsufficientValue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_code_ranges() {
        assert_eq!(StoError::SubscriptionEnded.kind(), ErrorKind::Phase);
        assert_eq!(StoError::VotingNotEnded.kind(), ErrorKind::Phase);
        assert_eq!(StoError::Unauthorized.kind(), ErrorKind::Authorization);
        assert_eq!(StoError::NotPaidInvestor.kind(), ErrorKind::Authorization);
        assert_eq!(StoError::ContractPaused.kind(), ErrorKind::Paused);
        assert_eq!(StoError::InvalidAddress.kind(), ErrorKind::Validation);
        assert_eq!(StoError::ArithmeticOverflow.kind(), ErrorKind::Validation);
        assert_eq!(StoError::AlreadyPaid.kind(), ErrorKind::StateConflict);
        assert_eq!(StoError::AlreadyInitialized.kind(), ErrorKind::StateConflict);
        assert_eq!(StoError::ProposalNotPassed.kind(), ErrorKind::StateConflict);
        assert_eq!(StoError::DividendNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(StoError::NotInitialized.kind(), ErrorKind::NotFound);
        assert_eq!(
            StoError::IncorrectPaymentAmount.kind(),
            ErrorKind::InsufficientValue
        );
        assert_eq!(
            StoError::IncorrectDividendFunding.kind(),
            ErrorKind::InsufficientValue
        );
    }
}
