use anchor_lang::prelude::*;

use crate::{
    engine::UpkeepStatus,
    state::{Raffle, RaffleConfig, RaffleState, RandomnessParams},
};

// Read accessors. Each returns its value as instruction return data and
// never writes to the accounts.

pub fn get_raffle_state(ctx: Context<ReadRaffle>) -> Result<RaffleState> {
    Ok(ctx.accounts.raffle.state)
}

pub fn get_pool_value(ctx: Context<ReadRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.pool_value)
}

pub fn get_number_of_players(ctx: Context<ReadRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.number_of_players())
}

pub fn get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.player(index)
}

pub fn get_recent_winner(ctx: Context<ReadRaffle>) -> Result<Option<Pubkey>> {
    Ok(ctx.accounts.raffle.recent_winner)
}

pub fn get_last_timestamp(ctx: Context<ReadRaffle>) -> Result<i64> {
    Ok(ctx.accounts.raffle.last_timestamp)
}

pub fn get_pending_request_id(ctx: Context<ReadRaffle>) -> Result<Option<u64>> {
    Ok(ctx.accounts.raffle.pending_request_id)
}

pub fn get_upkeep_status(ctx: Context<ReadRaffle>) -> Result<UpkeepStatus> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.raffle.upkeep_status(&ctx.accounts.config, now))
}

pub fn get_entrance_fee(ctx: Context<ReadRaffle>) -> Result<u64> {
    Ok(ctx.accounts.config.entrance_fee)
}

pub fn get_interval(ctx: Context<ReadRaffle>) -> Result<i64> {
    Ok(ctx.accounts.config.interval)
}

pub fn get_randomness_params(ctx: Context<ReadRaffle>) -> Result<RandomnessParams> {
    Ok(ctx.accounts.config.randomness)
}

pub fn get_coordinator(ctx: Context<ReadRaffle>) -> Result<Pubkey> {
    Ok(ctx.accounts.config.coordinator)
}

pub fn get_upkeep_authority(ctx: Context<ReadRaffle>) -> Result<Option<Pubkey>> {
    Ok(ctx.accounts.config.upkeep_authority)
}

pub fn get_owner(ctx: Context<ReadRaffle>) -> Result<Pubkey> {
    Ok(ctx.accounts.config.owner)
}

#[derive(Accounts)]
pub struct ReadRaffle<'info> {
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
