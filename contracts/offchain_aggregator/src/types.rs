use soroban_sdk::{contracterror, contracttype, Address, BytesN, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AggregatorError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    OnlyOwner = 3,
    NotProposedOwner = 4,
    OracleLengthMismatch = 5,
    RepeatedSigner = 6,
    RepeatedTransmitter = 7,
    TooManyOracles = 8,
    UnauthorizedSigner = 9,
    UnauthorizedTransmitter = 10,
    InvalidSignature = 11,
    InvalidReport = 12,
    AnchorDeviation = 13,
    InvalidAnchorRatio = 14,
    NoData = 15,
}

/// Coarse failure classes that off-chain tooling groups errors by.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Unauthorized,
    InvalidConfig,
    InvalidSignature,
    AnchorDeviation,
    NoData,
    Lifecycle,
}

impl AggregatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotInitialized | Self::AlreadyInitialized => ErrorKind::Lifecycle,
            Self::OnlyOwner
            | Self::NotProposedOwner
            | Self::UnauthorizedSigner
            | Self::UnauthorizedTransmitter => ErrorKind::Unauthorized,
            Self::OracleLengthMismatch
            | Self::RepeatedSigner
            | Self::RepeatedTransmitter
            | Self::TooManyOracles
            | Self::InvalidReport
            | Self::InvalidAnchorRatio => ErrorKind::InvalidConfig,
            Self::InvalidSignature => ErrorKind::InvalidSignature,
            Self::AnchorDeviation => ErrorKind::AnchorDeviation,
            Self::NoData => ErrorKind::NoData,
        }
    }

    /// Stable reason string, matched on by reporting tooling.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NotInitialized => "not initialized",
            Self::AlreadyInitialized => "already initialized",
            Self::OnlyOwner => "only callable by owner",
            Self::NotProposedOwner => "must be proposed owner",
            Self::OracleLengthMismatch => "oracle length mismatch",
            Self::RepeatedSigner => "repeated signer address",
            Self::RepeatedTransmitter => "repeated transmitter address",
            Self::TooManyOracles => "too many oracles",
            Self::UnauthorizedSigner => "unauthorized signer",
            Self::UnauthorizedTransmitter => "unauthorized transmitter",
            Self::InvalidSignature => "invalid signature",
            Self::InvalidReport => "invalid report",
            Self::AnchorDeviation => "anchor ratio deviation",
            Self::InvalidAnchorRatio => "invalid anchor ratio",
            Self::NoData => "No data present",
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigDetails {
    pub config_count: u32,
    pub block_number: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransmissionDetails {
    pub config_count: u32,
    pub round_id: u64,
    pub answer: i128,
    pub observations_timestamp: u32,
    pub transmitter: Address,
    pub transmitted_at: u64,
}

/// Acceptable window, in percent, of a new answer relative to the previous one.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnchorRatio {
    pub lower: u32,
    pub upper: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Metadata {
    pub decimals: u32,
    pub description: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    PendingOwner,
    Metadata,
    AnchorRatio,
    ConfigDetails,
    Signers,
    Transmitters,
    Signer(BytesN<20>),
    Transmitter(Address),
    LatestRoundId,
    Round(u64),
    LatestTransmission,
}
