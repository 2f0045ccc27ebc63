use anchor_lang::prelude::*;

/// Per-recipient vesting schedule PDA.
///
/// `total_amount == 0` means "no schedule" and is the only state in which a
/// schedule may be written; creation is therefore at most once per recipient,
/// even after full claiming or revocation.
#[account]
pub struct VestingSchedule {
    /// Recipient wallet (also part of the PDA seeds).
    pub recipient: Pubkey,
    /// Total units allocated; immutable once set.
    pub total_amount: u64,
    /// Vesting start timestamp (Unix seconds, UTC).
    pub start_ts: i64,
    /// Seconds after start during which nothing vests.
    pub cliff_seconds: i64,
    /// Total linear-unlock window measured from start; >= cliff_seconds.
    pub duration_seconds: i64,
    /// Cumulative units already withdrawn; monotone, <= total_amount.
    pub claimed_amount: u64,
    /// One-way revocation flag.
    pub revoked: bool,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // recipient
        8 +  // total_amount
        8 +  // start_ts
        8 +  // cliff_seconds
        8 +  // duration_seconds
        8 +  // claimed_amount
        1;   // revoked
}
