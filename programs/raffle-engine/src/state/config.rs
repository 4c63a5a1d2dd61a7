use anchor_lang::prelude::*;

use crate::error::RaffleError;

pub const MAX_REQUEST_CONFIRMATIONS: u16 = 200;
pub const MAX_CALLBACK_COMPUTE_LIMIT: u32 = 1_400_000;
pub const MAX_NUM_WORDS: u32 = 10;

// Space calculation:
// 8 (discriminator) +
// 32 (owner) +
// 8 (entrance_fee) +
// 8 (interval) +
// 32 (coordinator) +
// 33 (upkeep_authority: Option<Pubkey>) +
// 50 (randomness: 32 key_hash + 8 subscription_id + 2 confirmations + 4 compute limit + 4 num_words) +
// 1 (bump) =
// 172 total bytes
pub const CONFIG_ACCOUNT_SIZE: usize = 8 + 32 + 8 + 8 + 32 + 33 + 50 + 1;

/// Parameters forwarded to the coordinator with every randomness request.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomnessParams {
    /// Routing key selecting the coordinator's callback lane
    pub key_hash: [u8; 32],
    /// Subscription billed for the request
    pub subscription_id: u64,
    /// Slots the coordinator waits before answering
    pub request_confirmations: u16,
    /// Compute budget reserved for the fulfilment instruction
    pub callback_compute_limit: u32,
    /// Number of random words requested; only the first is consumed
    pub num_words: u32,
}

impl RandomnessParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            (1..=MAX_REQUEST_CONFIRMATIONS).contains(&self.request_confirmations),
            RaffleError::InvalidConfig
        );
        require!(
            (1..=MAX_CALLBACK_COMPUTE_LIMIT).contains(&self.callback_compute_limit),
            RaffleError::InvalidConfig
        );
        require!(
            (1..=MAX_NUM_WORDS).contains(&self.num_words),
            RaffleError::InvalidConfig
        );
        Ok(())
    }
}

/// Engine configuration. Written once by `initialize` and never updated.
#[account]
#[derive(Debug, PartialEq)]
pub struct RaffleConfig {
    pub owner: Pubkey,
    pub entrance_fee: u64,
    /// Minimum seconds between two draws
    pub interval: i64,
    pub coordinator: Pubkey,
    /// `None` lets anyone trigger a draw
    pub upkeep_authority: Option<Pubkey>,
    pub randomness: RandomnessParams,
    pub bump: u8,
}

impl RaffleConfig {
    pub fn authorizes_upkeep(&self, caller: &Pubkey) -> bool {
        match self.upkeep_authority {
            Some(authority) => authority == *caller,
            None => true,
        }
    }

    pub fn check_upkeep_caller(&self, caller: &Pubkey) -> Result<()> {
        require!(
            self.authorizes_upkeep(caller),
            RaffleError::NotUpkeepAuthority
        );
        Ok(())
    }

    pub fn check_coordinator(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.coordinator, *signer, RaffleError::NotCoordinator);
        Ok(())
    }

    pub fn check_owner(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *signer, RaffleError::NotOwner);
        Ok(())
    }
}
