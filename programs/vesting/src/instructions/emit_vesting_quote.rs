use anchor_lang::prelude::*;

use crate::constants::SCHEDULE_SEED;
use crate::state::VestingSchedule;
use crate::utils::vesting;

/// Read-only quote: anyone may call, no signer required.
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, recipient: Pubkey) -> Result<()> {
    let sched = &ctx.accounts.schedule;
    let now = Clock::get()?.unix_timestamp;

    let vested = vesting::vested_amount(sched, now)?;
    let claimable = vesting::claimable_amount(sched, now)?;

    emit!(VestingQuote {
        recipient,
        vested_amount: vested,
        claimed_amount: sched.claimed_amount,
        claimable,
        revoked: sched.revoked,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct EmitVestingQuote<'info> {
    #[account(seeds = [SCHEDULE_SEED, recipient.as_ref()], bump)]
    pub schedule: Account<'info, VestingSchedule>,
}

#[event]
pub struct VestingQuote {
    pub recipient: Pubkey,
    pub vested_amount: u64,
    pub claimed_amount: u64,
    pub claimable: u64,
    pub revoked: bool,
}
