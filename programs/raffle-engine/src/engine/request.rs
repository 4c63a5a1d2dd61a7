use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, RaffleConfig, RaffleState, RandomnessParams},
};

/// A randomness request handed to the coordinator. The coordinator answers
/// by calling `fulfill_random_words` with the same `request_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomnessRequest {
    pub request_id: u64,
    pub params: RandomnessParams,
}

impl Raffle {
    /// Moves an eligible round into `Drawing` and allocates the correlation
    /// id for its randomness request. Readiness is re-evaluated here; the
    /// caller's earlier `check_upkeep` result is not trusted.
    pub fn begin_draw(&mut self, config: &RaffleConfig, now: i64) -> Result<RandomnessRequest> {
        let status = self.upkeep_status(config, now);
        if !status.upkeep_needed() {
            msg!(
                "Upkeep not needed: time_passed={} is_open={} has_balance={} has_players={}",
                status.time_passed,
                status.is_open,
                status.has_balance,
                status.has_players
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }

        let request_id = self
            .request_counter
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;

        self.request_counter = request_id;
        self.pending_request_id = Some(request_id);
        self.state = RaffleState::Drawing;

        Ok(RandomnessRequest {
            request_id,
            params: config.randomness,
        })
    }
}
