use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod token_vesting {
    use super::*;

    /// Create the singleton config and vault; called once by the admin.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    /// Put a wallet on the approval list (admin only).
    pub fn approve_recipient(ctx: Context<ApproveRecipient>, wallet: Pubkey) -> Result<()> {
        instructions::approve_recipient::approve_recipient(ctx, wallet)
    }

    /// Take a wallet off the approval list (admin only).
    pub fn remove_recipient(ctx: Context<RemoveRecipient>, wallet: Pubkey) -> Result<()> {
        instructions::remove_recipient::remove_recipient(ctx, wallet)
    }

    /// Close the gate: blocks schedule creation and claims (admin only).
    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::pause(ctx)
    }

    /// Reopen the gate (admin only).
    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::unpause(ctx)
    }

    /// Create a cliff + linear schedule for an approved recipient and pull
    /// the full allocation into vault custody (admin only).
    pub fn create_schedule(
        ctx: Context<CreateSchedule>,
        recipient: Pubkey,
        total_amount: u64,
        cliff_seconds: i64,
        duration_seconds: i64,
        start_ts: i64,
    ) -> Result<()> {
        instructions::create_schedule::create_schedule(
            ctx,
            recipient,
            total_amount,
            cliff_seconds,
            duration_seconds,
            start_ts,
        )
    }

    /// Withdraw everything vested but not yet claimed (signer = recipient).
    pub fn claim_vested(ctx: Context<ClaimVested>) -> Result<()> {
        instructions::claim_vested::claim_vested(ctx)
    }

    /// Terminate future vesting for a recipient and reclaim the unvested
    /// remainder (admin only; available while paused).
    pub fn revoke_vesting(ctx: Context<RevokeVesting>, recipient: Pubkey) -> Result<()> {
        instructions::revoke_vesting::revoke_vesting(ctx, recipient)
    }

    /// Emit a vested/claimable quote for a recipient (no signer required).
    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, recipient: Pubkey) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote(ctx, recipient)
    }
}
