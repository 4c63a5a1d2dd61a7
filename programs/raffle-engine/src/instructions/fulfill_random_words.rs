use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{PrizeVault, Raffle, RaffleConfig, VAULT_ACCOUNT_SIZE},
};

/// Event emitted when a round is settled
#[event]
pub struct WinnerPicked {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Request the randomness answered
    pub request_id: u64,
    /// The winner's address
    pub winner: Pubkey,
    /// Winning slot in the settled round
    pub winner_index: u64,
    /// Lamports paid to the winner
    pub amount: u64,
    /// When the round was settled
    pub settled_at: i64,
}

/// Callback through which the coordinator delivers randomness for the
/// pending request.
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `request_id` - Correlation id from the `RandomnessRequested` event
/// * `random_words` - Raw 32-byte random values; only the first is used
///
/// # Security Considerations
/// 1. Only the configured coordinator may sign (`NotCoordinator`)
/// 2. The id must match the raffle's pending request, so stale or replayed
///    responses are rejected without touching state
/// 3. The winner account must be the selected player
/// 4. The vault keeps its rent-exempt reserve
///
/// # Implementation Notes
/// - The pool is moved before the round is reset. A failed payout leaves the
///   round Drawing and the same response can be delivered again.
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    ctx.accounts
        .config
        .check_coordinator(&ctx.accounts.coordinator.key())?;

    let now = Clock::get()?.unix_timestamp;
    let vault_reserve = Rent::get()?.minimum_balance(VAULT_ACCOUNT_SIZE);
    let vault = ctx.accounts.vault.to_account_info();
    let recipient = ctx.accounts.winner.to_account_info();

    let settlement = ctx
        .accounts
        .raffle
        .settle(request_id, &random_words, now, |winner, amount| {
            pay_from_vault(&vault, &recipient, vault_reserve, winner, amount)
        })?;

    msg!(
        "Request {} settled: winner {} (slot {}) received {} lamports",
        settlement.request_id,
        settlement.winner,
        settlement.winner_index,
        settlement.amount
    );

    emit!(WinnerPicked {
        raffle: ctx.accounts.raffle.key(),
        request_id: settlement.request_id,
        winner: settlement.winner,
        winner_index: settlement.winner_index,
        amount: settlement.amount,
        settled_at: now,
    });

    Ok(())
}

/// Pays `amount` from the vault to `recipient`, which must be the selected
/// winner. The vault keeps `vault_reserve` so it stays rent exempt.
pub fn pay_from_vault(
    vault: &AccountInfo,
    recipient: &AccountInfo,
    vault_reserve: u64,
    winner: Pubkey,
    amount: u64,
) -> Result<()> {
    require_keys_eq!(*recipient.key, winner, RaffleError::WinnerAccountMismatch);
    require!(
        PrizeVault::releasable(vault, vault_reserve, 0) >= amount,
        RaffleError::VaultUnderfunded
    );
    PrizeVault::release(vault, recipient, amount)
}

#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    pub coordinator: Signer<'info>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, RaffleConfig>,

    #[account(
        mut,
        seeds = [b"raffle"],
        bump = raffle.bump,
        has_one = vault,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    #[account(
        mut,
        seeds = [
            b"vault",
            raffle.key().as_ref(),
        ],
        bump = vault.bump,
    )]
    pub vault: Account<'info, PrizeVault>,

    /// CHECK: compared against the selected player inside the payout before
    /// any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}
