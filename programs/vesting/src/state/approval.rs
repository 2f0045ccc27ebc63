use anchor_lang::prelude::*;

/// Per-recipient allow-list entry PDA.
#[account]
pub struct RecipientApproval {
    pub wallet: Pubkey,
    pub approved: bool,
}

impl RecipientApproval {
    pub const SIZE: usize =
        32 + // wallet
        1;   // approved
}
