use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{CONFIG_SEED, SCHEDULE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{VestingConfig, VestingSchedule};
use crate::utils::vesting;

pub fn revoke_vesting(ctx: Context<RevokeVesting>, recipient: Pubkey) -> Result<()> {
    // Capture before taking mutable borrows below.
    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = ctx.bumps.config;

    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.config.admin,
        VestingError::UnauthorizedAdmin
    );
    // No pause check: revocation stays available while the gate is closed.
    require!(!ctx.accounts.config.locked, VestingError::Reentrancy);
    ctx.accounts.config.locked = true;

    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        ctx.accounts.config.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;

    let sched = &mut ctx.accounts.schedule;
    require!(sched.total_amount > 0, VestingError::ScheduleNotFound);
    require!(!sched.revoked, VestingError::AlreadyRevoked);

    let vested = vesting::vested_amount(sched, now)?;
    let unvested = sched
        .total_amount
        .checked_sub(vested)
        .ok_or(VestingError::MathOverflow)?;

    // Flag before moving funds: from here on vested computes to 0, so the
    // recipient's lifetime total is capped at vested-at-revocation. Amounts
    // already claimed are untouched.
    sched.revoked = true;

    if unvested > 0 {
        require!(
            ctx.accounts.vault.amount >= unvested,
            VestingError::InsufficientVaultBalance
        );
        let signer_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &[config_bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.admin_token_account.to_account_info(),
                    authority: config_ai,
                },
                signer_seeds,
            ),
            unvested,
        )?;
    }

    emit!(VestingRevoked {
        recipient,
        vested_at_revocation: vested,
        unvested_returned: unvested,
    });

    ctx.accounts.config.locked = false;
    Ok(())
}

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct RevokeVesting<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(mut, seeds = [SCHEDULE_SEED, recipient.as_ref()], bump)]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [VAULT_SEED, config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingRevoked {
    pub recipient: Pubkey,
    pub vested_at_revocation: u64,
    pub unvested_returned: u64,
}
