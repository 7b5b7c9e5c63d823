//! SOLZIO - Rebasing Token on Solana
//!
//! SOLZIO is a rebasable token: its total supply is updated on a fixed
//! schedule rather than by holders.
//!
//! # Supply Schedule
//!
//! - Every 4 days (+144 seconds) the supply is halved by a `rebase`
//! - 13.37% of the debased supply is sent to the fees collector, the rest is burned
//! - Between rebases balances stay fixed; the projected supply decreases
//!   linearly in 34-minute steps (see `quote_supply`)
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                  RebaseState                     │
//! │ (authority, fees_collector, supply, rebase clock)│
//! └──────────────────────────────────────────────────┘
//!                          │
//!          ┌───────────────┴───────────────┐
//!          ▼                               ▼
//! ┌─────────────────┐            ┌──────────────────┐
//! │ Mint (PDA,      │            │ Fees collector   │
//! │ self-authority) │            │ token account    │
//! └─────────────────┘            └──────────────────┘
//! ```

use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

// Anchor's `#[program]` macro pulls account structs from `crate::*`.
// Re-export the accounts structs only (not instruction modules).
pub use instructions::{
    // Core
    Initialize,
    QuoteSupply,
    Rebase,
    // Admin
    AcceptAuthorityTransfer,
    CancelAuthorityTransfer,
    InitiateAuthorityTransfer,
    Pause,
    SetFeesCollector,
    Unpause,
};

// ---------------------------------------------------------------------------
// Anchor client accounts shims (private)
//
// `#[derive(Accounts)]` generates `__client_accounts_<ix_name>` modules next to
// each account struct, but the program codegen resolves them at the crate
// root. The account structs live under `instructions/*`, so alias them here.
// ---------------------------------------------------------------------------
#[allow(unused_imports)]
use instructions::admin::authority::__client_accounts_accept_authority_transfer as __client_accounts_accept_authority_transfer;
#[allow(unused_imports)]
use instructions::admin::authority::__client_accounts_cancel_authority_transfer as __client_accounts_cancel_authority_transfer;
#[allow(unused_imports)]
use instructions::admin::authority::__client_accounts_initiate_authority_transfer as __client_accounts_initiate_authority_transfer;
#[allow(unused_imports)]
use instructions::admin::fees_collector::__client_accounts_set_fees_collector as __client_accounts_set_fees_collector;
#[allow(unused_imports)]
use instructions::admin::pause::__client_accounts_pause as __client_accounts_pause;
#[allow(unused_imports)]
use instructions::admin::unpause::__client_accounts_unpause as __client_accounts_unpause;
#[allow(unused_imports)]
use instructions::initialize::__client_accounts_initialize as __client_accounts_initialize;
#[allow(unused_imports)]
use instructions::quote_supply::__client_accounts_quote_supply as __client_accounts_quote_supply;
#[allow(unused_imports)]
use instructions::rebase::__client_accounts_rebase as __client_accounts_rebase;

#[cfg(feature = "cpi")]
use instructions::admin::authority::__cpi_client_accounts_accept_authority_transfer as __cpi_client_accounts_accept_authority_transfer;
#[cfg(feature = "cpi")]
use instructions::admin::authority::__cpi_client_accounts_cancel_authority_transfer as __cpi_client_accounts_cancel_authority_transfer;
#[cfg(feature = "cpi")]
use instructions::admin::authority::__cpi_client_accounts_initiate_authority_transfer as __cpi_client_accounts_initiate_authority_transfer;
#[cfg(feature = "cpi")]
use instructions::admin::fees_collector::__cpi_client_accounts_set_fees_collector as __cpi_client_accounts_set_fees_collector;
#[cfg(feature = "cpi")]
use instructions::admin::pause::__cpi_client_accounts_pause as __cpi_client_accounts_pause;
#[cfg(feature = "cpi")]
use instructions::admin::unpause::__cpi_client_accounts_unpause as __cpi_client_accounts_unpause;
#[cfg(feature = "cpi")]
use instructions::initialize::__cpi_client_accounts_initialize as __cpi_client_accounts_initialize;
#[cfg(feature = "cpi")]
use instructions::quote_supply::__cpi_client_accounts_quote_supply as __cpi_client_accounts_quote_supply;
#[cfg(feature = "cpi")]
use instructions::rebase::__cpi_client_accounts_rebase as __cpi_client_accounts_rebase;

declare_id!("8GLXTjvLQGTQY5Pwagn6FBQ7QZY42mcDvAktGhmKTZpR");

#[program]
pub mod solziocat {
    use super::*;

    // =========================================================================
    // TOKEN LIFECYCLE
    // =========================================================================

    /// Create the state and mint, and mint the initial supply to the creator
    ///
    /// # Arguments
    /// * `initial_supply` - Supply minted to the creator (base units, 9 decimals)
    pub fn initialize(ctx: Context<Initialize>, initial_supply: u64) -> Result<()> {
        instructions::initialize::handler(ctx, initial_supply)
    }

    /// Halve the supply once the rebase interval has elapsed
    ///
    /// Burns from the signer's token account and sends 13.37% of the
    /// debased amount to the fees collector.
    pub fn rebase(ctx: Context<Rebase>) -> Result<()> {
        instructions::rebase::handler(ctx)
    }

    /// Projected supply at the current clock (read-only)
    pub fn quote_supply(ctx: Context<QuoteSupply>) -> Result<u64> {
        instructions::quote_supply::handler(ctx)
    }

    // =========================================================================
    // ADMINISTRATION
    // =========================================================================

    /// Change the wallet receiving rebase fees
    pub fn set_fees_collector(
        ctx: Context<SetFeesCollector>,
        new_fees_collector: Pubkey,
    ) -> Result<()> {
        instructions::admin::fees_collector::handler(ctx, new_fees_collector)
    }

    /// Pause rebasing (admin only)
    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::admin::pause::handler(ctx)
    }

    /// Resume rebasing (admin only)
    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::admin::unpause::handler(ctx)
    }

    /// Initiate authority transfer (2-step process)
    pub fn initiate_authority_transfer(
        ctx: Context<InitiateAuthorityTransfer>,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::admin::authority::initiate_handler(ctx, new_authority)
    }

    /// Accept authority transfer
    pub fn accept_authority_transfer(ctx: Context<AcceptAuthorityTransfer>) -> Result<()> {
        instructions::admin::authority::accept_handler(ctx)
    }

    /// Cancel pending authority transfer
    pub fn cancel_authority_transfer(ctx: Context<CancelAuthorityTransfer>) -> Result<()> {
        instructions::admin::authority::cancel_handler(ctx)
    }
}

// Re-exports
pub use error::SolziocatError;
pub use events::*;
pub use state::RebaseState;
