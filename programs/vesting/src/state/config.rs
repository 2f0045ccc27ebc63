use anchor_lang::prelude::*;

/// Singleton program config PDA.
#[account]
pub struct VestingConfig {
    /// Admin authority (multisig recommended off-chain).
    pub admin: Pubkey,
    /// Token mint held in the vault.
    pub mint: Pubkey,
    /// Operational gate (blocks schedule creation and claims; revocation stays open).
    pub paused: bool,
    /// Reentrancy guard, held for the duration of each mutating instruction.
    pub locked: bool,
}

impl VestingConfig {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        1 +  // paused
        1;   // locked
}
