//! Instruction handlers for the SOLZIO rebasing token
//!
//! # Module Organization
//!
//! - **Core Instructions**: Initialization, rebase, supply quotes
//! - **Admin**: Pause/unpause, fees collector, authority transfer

// Core instructions
pub mod initialize;
pub mod rebase;
pub mod quote_supply;

// Submodules
pub mod admin;

// Re-export all context structs for lib.rs
pub use initialize::Initialize;
pub use rebase::Rebase;
pub use quote_supply::QuoteSupply;

pub use admin::{
    AcceptAuthorityTransfer,
    CancelAuthorityTransfer,
    InitiateAuthorityTransfer,
    Pause,
    SetFeesCollector,
    Unpause,
};
