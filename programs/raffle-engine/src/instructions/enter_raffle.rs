use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{PrizeVault, Raffle, RaffleConfig},
};

/// Event emitted when a player enters the current round
#[event]
pub struct RaffleEntered {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The entering player
    pub player: Pubkey,
    /// Lamports paid for this entry
    pub amount: u64,
    /// Slot the entry occupies in the round
    pub player_index: u64,
    /// Pool size after this entry
    pub pool_value: u64,
}

/// Instruction to enter the current round by paying at least the entrance fee
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports to pay into the vault
///
/// # Security Considerations
/// 1. Payment must be at least the configured entrance fee
/// 2. The round must be Open
/// 3. The vault must match the one recorded on the raffle
/// 4. The vault balance is checked after the transfer
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    let entrance_fee = ctx.accounts.config.entrance_fee;

    let player_index = ctx
        .accounts
        .raffle
        .record_entry(player, amount, entrance_fee)?;

    let pre_transfer_balance = ctx.accounts.vault.to_account_info().lamports();

    anchor_lang::solana_program::program::invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &player,
            &ctx.accounts.vault.key(),
            amount,
        ),
        &[
            ctx.accounts.player.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )?;

    let post_transfer_balance = ctx.accounts.vault.to_account_info().lamports();
    verify_vault_credit(pre_transfer_balance, post_transfer_balance, amount)?;

    emit!(RaffleEntered {
        raffle: ctx.accounts.raffle.key(),
        player,
        amount,
        player_index,
        pool_value: ctx.accounts.raffle.pool_value,
    });

    Ok(())
}

/// Checks that the vault gained exactly `amount` across the entry transfer.
pub fn verify_vault_credit(pre_balance: u64, post_balance: u64, amount: u64) -> Result<()> {
    let expected = pre_balance
        .checked_add(amount)
        .ok_or(RaffleError::Overflow)?;
    require!(post_balance == expected, RaffleError::TransferFailed);
    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
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

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::raffle::tests::{assert_raffle_err, FEE};

    #[test]
    fn exact_credit_passes() {
        assert!(verify_vault_credit(890_880, 890_880 + FEE, FEE).is_ok());
    }

    #[test]
    fn missing_or_extra_credit_fails() {
        assert_raffle_err(
            verify_vault_credit(890_880, 890_880, FEE),
            RaffleError::TransferFailed,
        );
        assert_raffle_err(
            verify_vault_credit(890_880, 890_880 + FEE + 1, FEE),
            RaffleError::TransferFailed,
        );
    }

    #[test]
    fn credit_overflow_is_reported() {
        assert_raffle_err(
            verify_vault_credit(u64::MAX, u64::MAX, 1),
            RaffleError::Overflow,
        );
    }
}
