//! Admin Instructions for SOLZIO
//!
//! Administrative operations including:
//! - Pause/unpause of rebasing
//! - Fees collector updates
//! - Authority transfer (2-step process)

pub mod pause;
pub mod unpause;
pub mod fees_collector;
pub mod authority;

pub use pause::Pause;
pub use unpause::Unpause;
pub use fees_collector::SetFeesCollector;
pub use authority::{
    AcceptAuthorityTransfer,
    CancelAuthorityTransfer,
    InitiateAuthorityTransfer,
};
