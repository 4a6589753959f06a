use soroban_sdk::{contracttype, Address, BytesN};

// ─── Assets ────────────────────────────────────────────────────────────────

/// How an asset is moved into the contract.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssetKind {
    /// Settlement-native asset: the paying party authorizes a direct transfer.
    Native,
    /// External fungible token: pulled with `transfer_from` against an allowance.
    Fungible,
}

/// Reference to the token contract backing one side of the pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetRef {
    pub kind: AssetKind,
    pub token: Address,
}

// ─── Configuration ─────────────────────────────────────────────────────────

/// Pool parameters. Mutated only through administrator-gated setters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeConfig {
    /// Asset locked by depositors.
    pub staked_asset: AssetRef,
    /// Asset paid out as reward on mature exits.
    pub reward_asset: AssetRef,
    /// Lock period in seconds.
    pub lock_term: u64,
    /// Early-exit fee in basis points (100 bps = 1 %).
    pub fee_bps: u32,
    /// Ceiling on the capacity counter.
    pub capacity_limit: i128,
    /// Nominal reward budget used in the reward formula.
    pub reward_pool_total: i128,
    /// Receives early-exit fees.
    pub treasury: Address,
}

/// Whether the administrator may pull reward funds while stakes are open.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DefundPolicy {
    /// `defund_reward_pool` fails with `ActiveStakes` while any record is open.
    RequireNoOpenStakes,
    /// The administrator is fully trusted.
    Unrestricted,
}

// ─── Stake records ─────────────────────────────────────────────────────────

/// A single lock owned by one party. Only `closed` ever changes, once.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    pub amount: i128,
    /// Ledger timestamp at creation.
    pub opened_at: u64,
    pub closed: bool,
}

/// Forward-looking view of a record: what a close right now would pay.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeInfo {
    pub amount: i128,
    pub opened_at: u64,
    /// `opened_at + lock_term`, using the current lock term.
    pub unlock_at: u64,
    pub matured: bool,
    /// `true` while the record is still open.
    pub active: bool,
    pub reward: i128,
    pub fee: i128,
}

/// Financial effect of a close.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExitReceipt {
    pub index: u32,
    pub matured: bool,
    /// Staked asset returned to the owner (net of fee on early exits).
    pub principal_paid: i128,
    /// Staked asset sent to the treasury.
    pub fee: i128,
    /// Reward asset paid to the owner.
    pub reward: i128,
}

// ─── Batch ─────────────────────────────────────────────────────────────────

/// One operation inside an atomic batch, executed under the batch caller.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StakeOp {
    Open(i128),
    Close(Address, u32),
    FundRewardPool(i128),
    DefundRewardPool(i128),
    SetCapacityLimit(i128),
    SetRewardPoolTotal(i128),
    SetLockTerm(u64),
    SetFeeBps(u32),
    SetTreasury(Address),
    SetPaused(bool),
    TransferAdministrator(Address),
    Upgrade(BytesN<32>),
}

/// Per-operation result of a batch.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OpOutcome {
    Opened(u32),
    Closed(ExitReceipt),
    Done,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Administrator address. Instance.
    Admin,
    /// `StakeConfig`. Instance.
    Config,
    /// Pause gate. Instance.
    Paused,
    /// `DefundPolicy`. Instance.
    DefundPolicy,
    /// Capacity counter. Instance.
    CapacityUsed,
    /// Number of open records across all parties. Instance.
    OpenStakes,
    /// Reward-asset units funded and not yet paid or defunded. Instance.
    RewardEscrow,
    /// Number of records ever opened by a party. Persistent.
    StakeCount(Address),
    /// Record `index` of a party. Persistent.
    Stake(Address, u32),
}
