use anchor_lang::prelude::*;
use arrayref::array_refs;

use crate::{
    error::RaffleError,
    state::{Raffle, RaffleState},
};

/// Outcome of a completed settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub request_id: u64,
    pub winner: Pubkey,
    pub winner_index: u64,
    pub amount: u64,
}

/// Reduces a 32-byte big-endian random word modulo `players`.
///
/// The word is folded one 64-bit limb at a time, so the result is the exact
/// 256-bit remainder rather than the remainder of a truncated prefix.
pub fn winner_index(random_word: &[u8; 32], players: u64) -> Option<u64> {
    if players == 0 {
        return None;
    }
    let modulus = players as u128;
    let (a, b, c, d) = array_refs![random_word, 8, 8, 8, 8];
    let remainder = [a, b, c, d].iter().fold(0u128, |rem, limb| {
        ((rem << 64) | u64::from_be_bytes(**limb) as u128) % modulus
    });
    Some(remainder as u64)
}

impl Raffle {
    /// Consumes the randomness answering `request_id`: picks the winner, pays
    /// the whole pool through `payout`, then reopens the round.
    ///
    /// Nothing is written before `payout` succeeds. A failed payout leaves the
    /// round `Drawing` with its ledger intact, so the coordinator can deliver
    /// the same words again.
    pub fn settle<F>(
        &mut self,
        request_id: u64,
        random_words: &[[u8; 32]],
        now: i64,
        payout: F,
    ) -> Result<Settlement>
    where
        F: FnOnce(Pubkey, u64) -> Result<()>,
    {
        require!(
            self.state == RaffleState::Drawing && self.pending_request_id == Some(request_id),
            RaffleError::UnknownRequest
        );
        let random_word = random_words
            .first()
            .ok_or(RaffleError::MissingRandomWords)?;

        let winner_index = winner_index(random_word, self.number_of_players())
            .ok_or(RaffleError::IndexOutOfRange)?;
        let winner = self.player(winner_index)?;
        let amount = self.pool_value;

        if let Err(cause) = payout(winner, amount) {
            msg!("Payout of {} lamports to {} failed: {}", amount, winner, cause);
            return err!(RaffleError::PayoutFailed);
        }

        self.recent_winner = Some(winner);
        self.last_timestamp = now;
        self.reset_round();
        self.state = RaffleState::Open;
        self.pending_request_id = None;

        Ok(Settlement {
            request_id,
            winner,
            winner_index,
            amount,
        })
    }
}
