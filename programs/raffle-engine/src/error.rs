use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Entry payment is below the entrance fee")]
    InsufficientPayment,
    #[msg("The round is not open for entries")]
    RoundNotOpen,
    #[msg("The round has reached its player capacity")]
    RoundFull,
    #[msg("Upkeep is not needed")]
    UpkeepNotNeeded,
    #[msg("Randomness response does not match the pending request")]
    UnknownRequest,
    #[msg("Randomness response carried no random words")]
    MissingRandomWords,
    #[msg("Prize payout to the winner failed")]
    PayoutFailed,
    #[msg("Player index is out of range")]
    IndexOutOfRange,
    #[msg("Entry transfer into the vault failed")]
    TransferFailed,
    #[msg("Only the configured coordinator can deliver randomness")]
    NotCoordinator,
    #[msg("Only the configured upkeep authority can trigger a draw")]
    NotUpkeepAuthority,
    #[msg("Invalid raffle configuration")]
    InvalidConfig,
    #[msg("Winner account does not match the selected player")]
    WinnerAccountMismatch,
    #[msg("Vault cannot cover the prize and stay rent exempt")]
    VaultUnderfunded,
    #[msg("Only the raffle owner can sweep the vault")]
    NotOwner,
    #[msg("Vault holds nothing beyond the pool and its rent reserve")]
    NothingToSweep,
}
