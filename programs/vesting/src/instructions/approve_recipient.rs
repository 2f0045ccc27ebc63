use anchor_lang::prelude::*;

use crate::constants::{APPROVAL_SEED, CONFIG_SEED};
use crate::error::VestingError;
use crate::state::{RecipientApproval, VestingConfig};

pub fn approve_recipient(ctx: Context<ApproveRecipient>, wallet: Pubkey) -> Result<()> {
    require!(wallet != Pubkey::default(), VestingError::InvalidPubkey);

    let cfg = &ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, VestingError::UnauthorizedAdmin);

    let approval = &mut ctx.accounts.approval;
    approval.wallet = wallet;
    approval.approved = true;

    emit!(RecipientApprovedEvent {
        admin: cfg.admin,
        wallet,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct ApproveRecipient<'info> {
    #[account(seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + RecipientApproval::SIZE,
        seeds = [APPROVAL_SEED, wallet.as_ref()],
        bump
    )]
    pub approval: Account<'info, RecipientApproval>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct RecipientApprovedEvent {
    pub admin: Pubkey,
    pub wallet: Pubkey,
}
