use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum Error {
    NotInit = 1,
    AlreadyInit = 2,

    // Authorization
    NotOwner = 100,
    NotAuthorized = 101,

    // Campaign errors
    CampaignNotFound = 102,
    CampaignClosed = 103,
    InsufficientFunds = 104,
    InvalidInput = 105,

    // Milestone errors
    MilestoneNotFound = 106,
    AlreadyVoted = 107,
    VotingPeriod = 108,
    InsufficientApproval = 109,
    FundsAlreadyReleased = 110,
    CampaignActive = 111,
    MilestoneExists = 112,
}
