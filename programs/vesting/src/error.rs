use anchor_lang::prelude::*;

/// Custom error codes for the token vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Operations are paused")]
    VestingPaused,

    #[msg("Operations are not paused")]
    VestingNotPaused,

    #[msg("Recipient is not on the approval list")]
    RecipientNotApproved,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Vesting duration must be > 0")]
    InvalidDuration,

    #[msg("Cliff duration exceeds vesting duration")]
    CliffExceedsDuration,

    #[msg("Recipient already has a schedule")]
    DuplicateSchedule,

    #[msg("No schedule exists for recipient")]
    ScheduleNotFound,

    #[msg("Schedule is already revoked")]
    AlreadyRevoked,

    #[msg("Nothing claimable")]
    NothingClaimable,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Reentrant call")]
    Reentrancy,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
