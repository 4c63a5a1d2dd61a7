use anchor_lang::prelude::*;

use crate::state::{Raffle, RaffleConfig};

/// Breakdown of the draw-readiness predicate. Every field must hold for
/// upkeep to be needed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub time_passed: bool,
    pub is_open: bool,
    pub has_balance: bool,
    pub has_players: bool,
}

impl UpkeepStatus {
    pub fn upkeep_needed(&self) -> bool {
        self.time_passed && self.is_open && self.has_balance && self.has_players
    }
}

impl Raffle {
    /// Read-only evaluation of whether a draw may start at `now`.
    pub fn upkeep_status(&self, config: &RaffleConfig, now: i64) -> UpkeepStatus {
        UpkeepStatus {
            time_passed: now.saturating_sub(self.last_timestamp) >= config.interval,
            is_open: self.is_open(),
            has_balance: self.pool_value > 0,
            has_players: !self.players.is_empty(),
        }
    }

    pub fn upkeep_needed(&self, config: &RaffleConfig, now: i64) -> bool {
        self.upkeep_status(config, now).upkeep_needed()
    }
}
