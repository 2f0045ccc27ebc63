use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{CONFIG_SEED, SCHEDULE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{VestingConfig, VestingSchedule};
use crate::utils::vesting;

pub fn claim_vested(ctx: Context<ClaimVested>) -> Result<()> {
    // Capture before taking mutable borrows below.
    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = ctx.bumps.config;

    require!(!ctx.accounts.config.paused, VestingError::VestingPaused);
    require!(!ctx.accounts.config.locked, VestingError::Reentrancy);
    ctx.accounts.config.locked = true;

    require_keys_eq!(
        ctx.accounts.recipient_ata.mint,
        ctx.accounts.config.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.recipient_ata.owner,
        ctx.accounts.recipient.key(),
        VestingError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;

    let sched = &mut ctx.accounts.schedule;
    require!(sched.total_amount > 0, VestingError::ScheduleNotFound);
    require!(!sched.revoked, VestingError::AlreadyRevoked);

    let claimable = vesting::claimable_amount(sched, now)?;
    require!(claimable > 0, VestingError::NothingClaimable);
    require!(
        ctx.accounts.vault.amount >= claimable,
        VestingError::InsufficientVaultBalance
    );

    // Record the claim before the external transfer so a nested call can
    // never observe an un-incremented running total; a transfer failure
    // still aborts the whole instruction.
    sched.claimed_amount = sched
        .claimed_amount
        .checked_add(claimable)
        .ok_or(VestingError::MathOverflow)?;

    let signer_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &[config_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.recipient_ata.to_account_info(),
                authority: config_ai,
            },
            signer_seeds,
        ),
        claimable,
    )?;

    emit!(TokensClaimed {
        recipient: ctx.accounts.recipient.key(),
        amount: claimable,
        claimed_total: ctx.accounts.schedule.claimed_amount,
    });

    ctx.accounts.config.locked = false;
    Ok(())
}

#[derive(Accounts)]
pub struct ClaimVested<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, VestingConfig>,

    pub recipient: Signer<'info>,

    // Self-service: the schedule PDA is derived from the signer's own key.
    #[account(mut, seeds = [SCHEDULE_SEED, recipient.key().as_ref()], bump)]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [VAULT_SEED, config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub recipient_ata: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub recipient: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
}
