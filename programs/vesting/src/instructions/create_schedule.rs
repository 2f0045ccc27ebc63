use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{APPROVAL_SEED, CONFIG_SEED, SCHEDULE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{RecipientApproval, VestingConfig, VestingSchedule};

pub fn create_schedule(
    ctx: Context<CreateSchedule>,
    recipient: Pubkey,
    total_amount: u64,
    cliff_seconds: i64,
    duration_seconds: i64,
    start_ts: i64,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.config.admin,
        VestingError::UnauthorizedAdmin
    );
    require!(!ctx.accounts.config.paused, VestingError::VestingPaused);
    require!(!ctx.accounts.config.locked, VestingError::Reentrancy);
    ctx.accounts.config.locked = true;

    require!(
        ctx.accounts.approval.approved,
        VestingError::RecipientNotApproved
    );
    require!(recipient != Pubkey::default(), VestingError::InvalidPubkey);
    require!(total_amount > 0, VestingError::InvalidAmount);
    require!(duration_seconds > 0, VestingError::InvalidDuration);
    require!(cliff_seconds >= 0, VestingError::InvalidDuration);
    require!(
        cliff_seconds <= duration_seconds,
        VestingError::CliffExceedsDuration
    );

    // `total_amount == 0` is the absence sentinel; a prior schedule keeps a
    // non-zero total even once fully claimed or revoked, so creation stays
    // at most once per recipient.
    require!(
        ctx.accounts.schedule.total_amount == 0,
        VestingError::DuplicateSchedule
    );

    require_keys_eq!(
        ctx.accounts.funder_token_account.mint,
        ctx.accounts.config.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.funder_token_account.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    // Zero means "start now"; any other value is taken as-is, past or future.
    let effective_start = if start_ts == 0 {
        Clock::get()?.unix_timestamp
    } else {
        start_ts
    };

    let sched = &mut ctx.accounts.schedule;
    sched.recipient = recipient;
    sched.total_amount = total_amount;
    sched.start_ts = effective_start;
    sched.cliff_seconds = cliff_seconds;
    sched.duration_seconds = duration_seconds;
    sched.claimed_amount = 0;
    sched.revoked = false;

    // Pull the full allocation into vault custody. A CPI failure aborts the
    // instruction and reverts the schedule write above with it.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        total_amount,
    )?;

    emit!(ScheduleCreated {
        recipient,
        total_amount,
        start_ts: effective_start,
        cliff_seconds,
        duration_seconds,
    });

    ctx.accounts.config.locked = false;
    Ok(())
}

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct CreateSchedule<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + VestingSchedule::SIZE,
        seeds = [SCHEDULE_SEED, recipient.as_ref()],
        bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(seeds = [APPROVAL_SEED, recipient.as_ref()], bump)]
    pub approval: Account<'info, RecipientApproval>,

    #[account(
        mut,
        seeds = [VAULT_SEED, config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub funder_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct ScheduleCreated {
    pub recipient: Pubkey,
    pub total_amount: u64,
    pub start_ts: i64,
    pub cliff_seconds: i64,
    pub duration_seconds: i64,
}
