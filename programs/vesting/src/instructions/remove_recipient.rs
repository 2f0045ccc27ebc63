use anchor_lang::prelude::*;

use crate::constants::{APPROVAL_SEED, CONFIG_SEED};
use crate::error::VestingError;
use crate::state::{RecipientApproval, VestingConfig};

pub fn remove_recipient(ctx: Context<RemoveRecipient>, wallet: Pubkey) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, VestingError::UnauthorizedAdmin);

    let approval = &mut ctx.accounts.approval;
    require!(approval.approved, VestingError::RecipientNotApproved);
    approval.approved = false;

    emit!(RecipientRemovedEvent {
        admin: cfg.admin,
        wallet,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct RemoveRecipient<'info> {
    #[account(seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        mut,
        seeds = [APPROVAL_SEED, wallet.as_ref()],
        bump
    )]
    pub approval: Account<'info, RecipientApproval>,

    pub admin: Signer<'info>,
}

#[event]
pub struct RecipientRemovedEvent {
    pub admin: Pubkey,
    pub wallet: Pubkey,
}
