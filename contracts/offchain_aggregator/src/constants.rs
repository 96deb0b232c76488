pub const VERSION: u32 = 1;
pub const TYPE_AND_VERSION: &str = "OffchainAggregator 1.0.0";

/// Upper bound on signers (and transmitters) per config.
pub const MAX_NUM_ORACLES: u32 = 31;

pub const PERCENT: i128 = 100;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

pub(crate) const LOW_PERSISTENT_BUMP_LEDGERS: u32 = 30 * DAY_IN_LEDGERS; // 30 days
pub(crate) const HIGH_PERSISTENT_BUMP_LEDGERS: u32 = 90 * DAY_IN_LEDGERS; // 90 days
