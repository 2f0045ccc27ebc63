use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::VestingError;
use crate::state::VestingConfig;

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, VestingError::UnauthorizedAdmin);
    require!(!cfg.paused, VestingError::VestingPaused);
    cfg.paused = true;
    emit!(OperationsPaused { admin: cfg.admin });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, VestingConfig>,
    pub admin: Signer<'info>,
}

#[event]
pub struct OperationsPaused {
    pub admin: Pubkey,
}
