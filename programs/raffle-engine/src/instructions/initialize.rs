use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{
        PrizeVault, Raffle, RaffleConfig, RandomnessParams, CONFIG_ACCOUNT_SIZE,
        RAFFLE_ACCOUNT_SIZE, VAULT_ACCOUNT_SIZE,
    },
};

/// Configuration supplied once when the engine is deployed
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeParams {
    /// Minimum lamports per entry
    pub entrance_fee: u64,
    /// Minimum seconds between draws
    pub interval: i64,
    /// Randomness provider allowed to deliver random words
    pub coordinator: Pubkey,
    /// Restricts `perform_upkeep` to one signer when set
    pub upkeep_authority: Option<Pubkey>,
    pub randomness: RandomnessParams,
}

impl InitializeParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.entrance_fee > 0, RaffleError::InvalidConfig);
        require!(self.interval > 0, RaffleError::InvalidConfig);
        self.randomness.validate()
    }
}

/// Event emitted when the engine opens its first round
#[event]
pub struct RaffleInitialized {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The account that initialized the engine
    pub owner: Pubkey,
    /// Minimum lamports per entry
    pub entrance_fee: u64,
    /// Minimum seconds between draws
    pub interval: i64,
    /// Randomness provider identity
    pub coordinator: Pubkey,
    /// Restricted upkeep caller, if any
    pub upkeep_authority: Option<Pubkey>,
    /// When the first round opened
    pub created_at: i64,
}

/// Instruction to create the configuration, the round record and the vault
///
/// # Security Considerations
/// - All three accounts are singleton PDAs, so this can only succeed once
/// - The signer becomes the owner recorded in the configuration
/// - Configuration is validated here and never written again
///
/// # Account Validations
/// * Config - New PDA with seeds ["config"]
/// * Raffle - New PDA with seeds ["raffle"]
/// * Vault - New PDA with seeds ["vault", raffle_key]
pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    params.validate()?;

    let now = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();
    let vault_key = ctx.accounts.vault.key();

    ctx.accounts.config.set_inner(RaffleConfig {
        owner: ctx.accounts.owner.key(),
        entrance_fee: params.entrance_fee,
        interval: params.interval,
        coordinator: params.coordinator,
        upkeep_authority: params.upkeep_authority,
        randomness: params.randomness,
        bump: ctx.bumps.config,
    });
    ctx.accounts.vault.set_inner(PrizeVault {
        raffle: raffle_key,
        bump: ctx.bumps.vault,
    });
    ctx.accounts
        .raffle
        .set_inner(Raffle::new(vault_key, ctx.bumps.raffle, now));

    msg!(
        "Raffle opened: fee={} interval={}s coordinator={}",
        params.entrance_fee,
        params.interval,
        params.coordinator
    );

    emit!(RaffleInitialized {
        raffle: raffle_key,
        owner: ctx.accounts.owner.key(),
        entrance_fee: params.entrance_fee,
        interval: params.interval,
        coordinator: params.coordinator,
        upkeep_authority: params.upkeep_authority,
        created_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = CONFIG_ACCOUNT_SIZE,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, RaffleConfig>,

    #[account(
        init,
        payer = owner,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [b"raffle"],
        bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    #[account(
        init,
        payer = owner,
        space = VAULT_ACCOUNT_SIZE,
        seeds = [
            b"vault",
            raffle.key().as_ref(),
        ],
        bump
    )]
    pub vault: Account<'info, PrizeVault>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}
