use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Player slots a round can hold. Account space is fixed when the raffle is
/// created, so the ledger cannot grow past this.
pub const MAX_PLAYERS: usize = 200;

// Space calculation:
// 8 (discriminator) +
// 1 (state) +
// 4 (length of players) +
// 6400 (players: 200 * 32) +
// 8 (pool_value) +
// 8 (last_timestamp) +
// 9 (pending_request_id: Option<u64>) +
// 8 (request_counter) +
// 33 (recent_winner: Option<Pubkey>) +
// 32 (vault) +
// 1 (bump) =
// 6512 total bytes
pub const RAFFLE_ACCOUNT_SIZE: usize = 8 + 1 + 4 + 32 * MAX_PLAYERS + 8 + 8 + 9 + 8 + 33 + 32 + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleState {
    Open,
    Drawing,
}

/// The singleton round record. It is reset in place after every settlement,
/// so one account carries every round for the life of the program.
#[account]
#[derive(Debug, PartialEq)]
pub struct Raffle {
    pub state: RaffleState,
    /// One slot per entry, in entry order. A player may hold several slots.
    pub players: Vec<Pubkey>,
    /// Lamports paid in since the last settlement
    pub pool_value: u64,
    /// Time of the last settlement, or of initialization
    pub last_timestamp: i64,
    /// Set exactly while the round is `Drawing`
    pub pending_request_id: Option<u64>,
    /// Requests issued so far; ids are `1..=request_counter`
    pub request_counter: u64,
    pub recent_winner: Option<Pubkey>,
    pub vault: Pubkey,
    pub bump: u8,
}

impl Raffle {
    pub fn new(vault: Pubkey, bump: u8, now: i64) -> Self {
        Self {
            state: RaffleState::Open,
            players: Vec::new(),
            pool_value: 0,
            last_timestamp: now,
            pending_request_id: None,
            request_counter: 0,
            recent_winner: None,
            vault,
            bump,
        }
    }

    /// Records one paid entry and returns the slot index it occupies.
    pub fn record_entry(&mut self, player: Pubkey, amount: u64, entrance_fee: u64) -> Result<u64> {
        require!(amount >= entrance_fee, RaffleError::InsufficientPayment);
        require!(self.state == RaffleState::Open, RaffleError::RoundNotOpen);
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RoundFull);

        let pool_value = self
            .pool_value
            .checked_add(amount)
            .ok_or(RaffleError::Overflow)?;

        self.players.push(player);
        self.pool_value = pool_value;

        Ok((self.players.len() - 1) as u64)
    }

    /// Empties the ledger. Settlement calls this only after the payout landed.
    pub(crate) fn reset_round(&mut self) {
        self.players.clear();
        self.pool_value = 0;
    }

    pub fn number_of_players(&self) -> u64 {
        self.players.len() as u64
    }

    pub fn player(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.players.get(index))
            .copied()
            .ok_or_else(|| error!(RaffleError::IndexOutOfRange))
    }

    pub fn is_open(&self) -> bool {
        self.state == RaffleState::Open
    }
}
