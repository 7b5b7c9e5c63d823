//! State accounts for the SOLZIO rebasing token
//!
//! # Account Hierarchy
//!
//! ```text
//! RebaseState (singleton PDA)
//! ├── Mint (PDA, self-authority)
//! ├── Creator ATA (initial supply)
//! └── Fees collector ATA (rebase fees)
//! ```
//!
//! # PDA Seeds
//!
//! | Account | Seeds |
//! |---------|-------|
//! | RebaseState | `[b"rebase_state"]` |
//! | Mint | `[b"mint_authority"]` |

pub mod rebase_state;

pub use rebase_state::RebaseState;

// Re-export constants
pub use rebase_state::{
    BPS_DENOMINATOR, REBASE_FEE_BPS, REBASE_INTERVAL, SUPPLY_STEP_SECONDS, TOKEN_DECIMALS,
};
