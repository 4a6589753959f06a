use soroban_sdk::contracterror;

/// Groups errors by domain for monitoring and dashboards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup (codes 1-99).
    Initialization,
    /// Caller identity and permission (codes 100-199).
    Authorization,
    /// Stake ledger and capacity (codes 200-299).
    Stake,
    /// Asset movement (codes 300-399).
    Transfer,
    /// Configuration values (codes 400-499).
    Configuration,
    /// Batch execution (codes 500-599).
    Batch,
    /// Safe-math (codes 700-799).
    Arithmetic,
}

/// Error returned by every fallible entry point of the capped stake contract.
///
/// Codes are wire-stable. Never renumber a variant after deployment; append new
/// variants at the end of their category block only.
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StakeError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,
    /// `initialize` was called a second time.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller lacks the role required for the operation, or does not own the record.
    Unauthorized = 100,

    // --- Stake (200-299) ---
    /// `open` / `close` attempted while the pause gate is set.
    Paused = 200,
    /// An `open` would push the capacity counter above `capacity_limit`.
    CapacityExceeded = 201,
    /// Record index does not exist for the given party.
    NotFound = 202,
    /// The record has already been closed.
    AlreadyClosed = 203,
    /// Strict defund attempted while at least one record is still open.
    ActiveStakes = 204,
    /// Quantity must be strictly positive (or non-negative for configuration).
    InvalidAmount = 205,
    /// A reward payout or defund exceeds the funded reward escrow.
    RewardPoolExhausted = 206,

    // --- Transfer (300-399) ---
    /// The asset movement could not complete; nothing was committed.
    TransferFailed = 300,

    // --- Configuration (400-499) ---
    /// `capacity_limit` is zero, so no reward can be computed.
    ConfigurationError = 400,
    /// Fee rate outside `[0, 10000]` basis points.
    InvalidFeeBps = 401,

    // --- Batch (500-599) ---
    /// A batch must contain at least one operation.
    EmptyBatch = 500,

    // --- Arithmetic (700-799) ---
    /// An intermediate quantity does not fit the value type.
    ArithmeticOverflow = 700,
}

impl StakeError {
    /// Domain this error belongs to, derived from its code range.
    pub fn category(self) -> ErrorCategory {
        match self as u32 {
            1..=99 => ErrorCategory::Initialization,
            100..=199 => ErrorCategory::Authorization,
            200..=299 => ErrorCategory::Stake,
            300..=399 => ErrorCategory::Transfer,
            400..=499 => ErrorCategory::Configuration,
            500..=599 => ErrorCategory::Batch,
            _ => ErrorCategory::Arithmetic,
        }
    }
}
