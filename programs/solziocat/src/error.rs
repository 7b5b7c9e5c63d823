use anchor_lang::prelude::*;

#[error_code]
pub enum SolziocatError {
    // =========================================================================
    // REBASE ERRORS
    // =========================================================================

    #[msg("Too early for rebase")]
    TooEarlyForRebase,

    #[msg("Invalid supply: must be greater than zero")]
    InvalidSupply,

    #[msg("Burn account balance is below the debased amount")]
    InsufficientBurnBalance,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    // =========================================================================
    // PROGRAM STATE ERRORS
    // =========================================================================

    #[msg("Program is paused")]
    ProgramPaused,

    #[msg("Program is not paused")]
    ProgramNotPaused,

    #[msg("Token mint does not match program state")]
    InvalidMint,

    // =========================================================================
    // AUTHORIZATION ERRORS
    // =========================================================================

    #[msg("Unauthorized: caller is not the program authority")]
    Unauthorized,

    #[msg("Invalid authority address")]
    InvalidAuthority,

    #[msg("No pending authority transfer")]
    NoPendingAuthority,

    #[msg("Invalid fees collector address")]
    InvalidFeesCollector,
}
