use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{PrizeVault, Raffle, RaffleConfig, VAULT_ACCOUNT_SIZE},
};

/// Event emitted when stray vault lamports are returned to the owner
#[event]
pub struct VaultSwept {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Lamports moved to the owner
    pub amount: u64,
    /// Pool left in the vault for the current round
    pub pool_value: u64,
}

/// Instruction to move lamports that were sent straight to the vault, and so
/// belong to no round, to the owner.
///
/// # Security Considerations
/// 1. Only the owner recorded at initialization may sign (`NotOwner`)
/// 2. The current pool and the rent-exempt reserve never leave the vault,
///    so a sweep is safe while the round is Open or Drawing
pub fn sweep_vault(ctx: Context<SweepVault>) -> Result<()> {
    ctx.accounts
        .config
        .check_owner(&ctx.accounts.owner.key())?;

    let vault_reserve = Rent::get()?.minimum_balance(VAULT_ACCOUNT_SIZE);
    let vault = ctx.accounts.vault.to_account_info();
    let owner = ctx.accounts.owner.to_account_info();
    let pool_value = ctx.accounts.raffle.pool_value;

    let amount = sweep_excess(&vault, &owner, vault_reserve, pool_value)?;

    msg!("Swept {} lamports from the vault", amount);

    emit!(VaultSwept {
        raffle: ctx.accounts.raffle.key(),
        amount,
        pool_value,
    });

    Ok(())
}

/// Moves everything above `vault_reserve + pool_value` to `recipient` and
/// returns the amount moved.
pub fn sweep_excess(
    vault: &AccountInfo,
    recipient: &AccountInfo,
    vault_reserve: u64,
    pool_value: u64,
) -> Result<u64> {
    let excess = PrizeVault::releasable(vault, vault_reserve, pool_value);
    require!(excess > 0, RaffleError::NothingToSweep);
    PrizeVault::release(vault, recipient, excess)?;
    Ok(excess)
}

#[derive(Accounts)]
pub struct SweepVault<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, RaffleConfig>,

    #[account(
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

    #[account(mut)]
    pub owner: Signer<'info>,
}
