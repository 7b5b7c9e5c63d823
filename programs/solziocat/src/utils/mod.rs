//! Utility modules for SOLZIO

pub mod supply;

pub use supply::{compute_rebase, projected_supply, RebaseOutcome};
