use anchor_lang::prelude::*;

// 8 discriminator, 32 raffle, 1 bump
pub const VAULT_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Program-owned account holding the lamports pooled by the current round.
/// Its rent-exempt reserve is never part of the pool. Settlement pays out
/// `pool_value` only; anything else sent to the vault stays until the owner
/// calls `sweep_vault`.
#[account]
pub struct PrizeVault {
    pub raffle: Pubkey,
    pub bump: u8,
}

impl PrizeVault {
    /// Lamports the vault can release while keeping its rent reserve and
    /// `committed` lamports in place.
    pub fn releasable(vault: &AccountInfo, reserve: u64, committed: u64) -> u64 {
        vault
            .lamports()
            .saturating_sub(reserve)
            .saturating_sub(committed)
    }

    /// Moves lamports out of the vault. The vault is a PDA owned by this
    /// program, so no system transfer is needed.
    pub fn release(vault: &AccountInfo, recipient: &AccountInfo, amount: u64) -> Result<()> {
        vault.sub_lamports(amount)?;
        recipient.add_lamports(amount)?;
        Ok(())
    }
}
