use anchor_lang::prelude::*;

use crate::state::{Raffle, RaffleConfig};

/// Event emitted when a draw starts. The coordinator watches for it and
/// answers through `fulfill_random_words` with the same request id.
#[event]
pub struct RandomnessRequested {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Correlation id the response must carry
    pub request_id: u64,
    /// Callback lane key
    pub key_hash: [u8; 32],
    /// Subscription billed for the request
    pub subscription_id: u64,
    /// Confirmations to wait before answering
    pub request_confirmations: u16,
    /// Compute budget for the fulfilment
    pub callback_compute_limit: u32,
    /// Number of random words requested
    pub num_words: u32,
    /// When the draw started
    pub requested_at: i64,
}

/// Instruction to start a draw once upkeep is needed
///
/// # Security Considerations
/// 1. If an upkeep authority is configured, only it may call this
/// 2. Readiness is re-evaluated on-chain, never taken from the caller
/// 3. A round already Drawing fails readiness, so at most one request is outstanding
///
/// # Implementation Notes
/// - Returns immediately; the winner is picked when the coordinator calls back
/// - A request that is never answered leaves the round Drawing
pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    ctx.accounts
        .config
        .check_upkeep_caller(&ctx.accounts.caller.key())?;

    let now = Clock::get()?.unix_timestamp;
    let request = ctx.accounts.raffle.begin_draw(&ctx.accounts.config, now)?;

    msg!(
        "Requested randomness {} for {} players",
        request.request_id,
        ctx.accounts.raffle.number_of_players()
    );

    emit!(RandomnessRequested {
        raffle: ctx.accounts.raffle.key(),
        request_id: request.request_id,
        key_hash: request.params.key_hash,
        subscription_id: request.params.subscription_id,
        request_confirmations: request.params.request_confirmations,
        callback_compute_limit: request.params.callback_compute_limit,
        num_words: request.params.num_words,
        requested_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, RaffleConfig>,

    #[account(
        mut,
        seeds = [b"raffle"],
        bump = raffle.bump,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    pub caller: Signer<'info>,
}
