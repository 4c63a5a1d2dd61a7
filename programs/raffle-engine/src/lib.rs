use anchor_lang::prelude::*;
use instructions::*;

pub mod engine;
pub mod error;
pub mod instructions;
pub mod state;

use engine::UpkeepStatus;
use state::{RaffleState, RandomnessParams};

declare_id!("8XpN3PgXfmFMUSaUnVcY8UDFfGvu1japCf2JJFkWzyTd");

#[program]
pub mod raffle_engine {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        instructions::initialize::initialize(ctx, params)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
        instructions::check_upkeep::check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        instructions::perform_upkeep::perform_upkeep(ctx)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::fulfill_random_words::fulfill_random_words(ctx, request_id, random_words)
    }

    pub fn sweep_vault(ctx: Context<SweepVault>) -> Result<()> {
        instructions::sweep_vault::sweep_vault(ctx)
    }

    pub fn get_raffle_state(ctx: Context<ReadRaffle>) -> Result<RaffleState> {
        instructions::views::get_raffle_state(ctx)
    }

    pub fn get_pool_value(ctx: Context<ReadRaffle>) -> Result<u64> {
        instructions::views::get_pool_value(ctx)
    }

    pub fn get_number_of_players(ctx: Context<ReadRaffle>) -> Result<u64> {
        instructions::views::get_number_of_players(ctx)
    }

    pub fn get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
        instructions::views::get_player(ctx, index)
    }

    pub fn get_recent_winner(ctx: Context<ReadRaffle>) -> Result<Option<Pubkey>> {
        instructions::views::get_recent_winner(ctx)
    }

    pub fn get_last_timestamp(ctx: Context<ReadRaffle>) -> Result<i64> {
        instructions::views::get_last_timestamp(ctx)
    }

    pub fn get_pending_request_id(ctx: Context<ReadRaffle>) -> Result<Option<u64>> {
        instructions::views::get_pending_request_id(ctx)
    }

    pub fn get_upkeep_status(ctx: Context<ReadRaffle>) -> Result<UpkeepStatus> {
        instructions::views::get_upkeep_status(ctx)
    }

    pub fn get_entrance_fee(ctx: Context<ReadRaffle>) -> Result<u64> {
        instructions::views::get_entrance_fee(ctx)
    }

    pub fn get_interval(ctx: Context<ReadRaffle>) -> Result<i64> {
        instructions::views::get_interval(ctx)
    }

    pub fn get_randomness_params(ctx: Context<ReadRaffle>) -> Result<RandomnessParams> {
        instructions::views::get_randomness_params(ctx)
    }

    pub fn get_coordinator(ctx: Context<ReadRaffle>) -> Result<Pubkey> {
        instructions::views::get_coordinator(ctx)
    }

    pub fn get_upkeep_authority(ctx: Context<ReadRaffle>) -> Result<Option<Pubkey>> {
        instructions::views::get_upkeep_authority(ctx)
    }

    pub fn get_owner(ctx: Context<ReadRaffle>) -> Result<Pubkey> {
        instructions::views::get_owner(ctx)
    }
}
