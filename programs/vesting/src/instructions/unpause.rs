use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::VestingError;
use crate::state::VestingConfig;

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, VestingError::UnauthorizedAdmin);
    require!(cfg.paused, VestingError::VestingNotPaused);
    cfg.paused = false;
    emit!(OperationsUnpaused { admin: cfg.admin });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, VestingConfig>,
    pub admin: Signer<'info>,
}

#[event]
pub struct OperationsUnpaused {
    pub admin: Pubkey,
}
