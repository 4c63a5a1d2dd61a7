use anchor_lang::prelude::*;

use crate::state::{Raffle, RaffleConfig};

/// Read-only readiness check for the automation poller. Returns `true` when
/// `perform_upkeep` would start a draw right now.
pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    let status = ctx.accounts.raffle.upkeep_status(&ctx.accounts.config, now);

    msg!(
        "Upkeep: time_passed={} is_open={} has_balance={} has_players={}",
        status.time_passed,
        status.is_open,
        status.has_balance,
        status.has_players
    );

    Ok(status.upkeep_needed())
}

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, RaffleConfig>,

    #[account(
        seeds = [b"raffle"],
        bump = raffle.bump,
    )]
    pub raffle: Box<Account<'info, Raffle>>,
}
