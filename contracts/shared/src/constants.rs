/// Basis point denominator (10000 = 100%)
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Platform fee applied to new investments until the owner changes it (2.5%)
pub const DEFAULT_PLATFORM_FEE_BPS: u32 = 250;

/// Upper bound for the platform fee (10%)
pub const MAX_PLATFORM_FEE_BPS: u32 = 1_000;

/// Equity tokens minted for an investment equal to the whole funding goal
pub const EQUITY_SCALE: i128 = 10_000;

/// Milestones a campaign may declare
pub const MIN_MILESTONES: u32 = 1;
pub const MAX_MILESTONES: u32 = 10;

/// Bounds for a milestone's share of the raised capital, in percent
pub const MIN_FUNDING_PERCENTAGE: u32 = 1;
pub const MAX_FUNDING_PERCENTAGE: u32 = 100;

/// Minimum approval rate (percent of cast voting power) a milestone needs
/// before its funds can be released. 51 is a simple majority.
pub const DEFAULT_APPROVAL_THRESHOLD: u32 = 51;
pub const MIN_APPROVAL_THRESHOLD: u32 = 1;
pub const MAX_APPROVAL_THRESHOLD: u32 = 100;
