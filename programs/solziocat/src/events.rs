use anchor_lang::prelude::*;

// ============================================================================
// COMPILE-TIME SAFETY CHECK
// ============================================================================

// Prevent accidental mainnet builds with debug events enabled
#[cfg(all(feature = "event-debug", feature = "mainnet"))]
compile_error!(
    "SECURITY ERROR: event-debug feature must not be enabled for mainnet builds! \
     Remove event-debug feature or mainnet feature to proceed."
);

// =========================================================================
// TOKEN EVENTS
// =========================================================================

#[event]
pub struct TokenInitialized {
    pub state: Pubkey,
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub initial_supply: u64,
    pub rebase_interval: i64,
    pub timestamp: i64,
}

/// Emitted once per successful rebase.
///
/// `burned + fee` is the debased amount: the supply removed from the
/// halving, of which `fee` is redirected to the fees collector.
#[event]
pub struct Rebased {
    pub state: Pubkey,
    pub previous_supply: u64,
    pub new_supply: u64,
    pub burned: u64,
    pub fee: u64,
    pub fees_collector: Pubkey,
    pub rebase_count: u64,
    pub timestamp: i64,
}

/// Debug rebase event with the burner identity.
///
/// WARNING: only emitted with the `event-debug` feature.
#[cfg(feature = "event-debug")]
#[event]
pub struct RebaseDebugEvent {
    pub state: Pubkey,
    pub burn_authority: Pubkey,
    pub burn_account: Pubkey,
    pub burn_account_balance: u64,
    pub debased: u64,
    pub burned: u64,
    pub fee: u64,
    pub elapsed: i64,
    pub timestamp: i64,
}

#[event]
pub struct FeesCollectorUpdated {
    pub state: Pubkey,
    pub old_fees_collector: Pubkey,
    pub new_fees_collector: Pubkey,
    pub timestamp: i64,
}

// =========================================================================
// ADMIN EVENTS
// =========================================================================

#[event]
pub struct ProgramPaused {
    pub state: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ProgramUnpaused {
    pub state: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AuthorityTransferInitiated {
    pub state: Pubkey,
    pub current_authority: Pubkey,
    pub pending_authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AuthorityTransferCompleted {
    pub state: Pubkey,
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AuthorityTransferCancelled {
    pub state: Pubkey,
    pub authority: Pubkey,
    pub cancelled_pending: Pubkey,
    pub timestamp: i64,
}
