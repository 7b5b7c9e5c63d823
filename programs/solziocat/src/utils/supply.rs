//! Supply schedule math for SOLZIO
//!
//! All amounts are in token base units. Intermediate products use `u128`
//! so `amount * bps` cannot overflow for any `u64` supply.

use anchor_lang::prelude::*;

use crate::error::SolziocatError;
use crate::state::{BPS_DENOMINATOR, REBASE_FEE_BPS, SUPPLY_STEP_SECONDS};

/// Amounts produced by a single halving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RebaseOutcome {
    pub previous_supply: u64,
    /// Supply removed by the halving (`burned + fee`)
    pub debased: u64,
    /// Share of `debased` sent to the fees collector
    pub fee: u64,
    /// Share of `debased` destroyed
    pub burned: u64,
    /// Tracked supply after the rebase (`previous_supply - burned`)
    pub new_supply: u64,
}

/// Supply removed by halving `total_supply`. Rounds in favour of the
/// remaining supply being the floor half.
#[inline]
pub fn debased_amount(total_supply: u64) -> u64 {
    total_supply - total_supply / 2
}

/// Fee taken from a debased amount, floored.
pub fn rebase_fee(debased: u64) -> Result<u64> {
    let fee = (debased as u128)
        .checked_mul(REBASE_FEE_BPS as u128)
        .ok_or(error!(SolziocatError::ArithmeticOverflow))?
        / BPS_DENOMINATOR as u128;
    u64::try_from(fee).map_err(|_| error!(SolziocatError::ArithmeticOverflow))
}

pub fn compute_rebase(total_supply: u64) -> Result<RebaseOutcome> {
    let debased = debased_amount(total_supply);
    let fee = rebase_fee(debased)?;
    let burned = debased
        .checked_sub(fee)
        .ok_or(error!(SolziocatError::ArithmeticOverflow))?;
    let new_supply = total_supply
        .checked_sub(burned)
        .ok_or(error!(SolziocatError::ArithmeticOverflow))?;

    Ok(RebaseOutcome {
        previous_supply: total_supply,
        debased,
        fee,
        burned,
        new_supply,
    })
}

/// Projected supply `elapsed` seconds into a rebase interval.
///
/// The debased amount is released linearly over the interval, one
/// `SUPPLY_STEP_SECONDS` step at a time. At or past the interval the full
/// halving is reflected.
pub fn projected_supply(total_supply: u64, elapsed: i64, rebase_interval: i64) -> Result<u64> {
    let interval = rebase_interval.max(0);
    let elapsed = elapsed.clamp(0, interval);

    let total_steps = (interval / SUPPLY_STEP_SECONDS).max(1) as u128;
    let steps = ((elapsed / SUPPLY_STEP_SECONDS) as u128).min(total_steps);

    let decrease = (debased_amount(total_supply) as u128)
        .checked_mul(steps)
        .ok_or(error!(SolziocatError::ArithmeticOverflow))?
        / total_steps;
    let decrease =
        u64::try_from(decrease).map_err(|_| error!(SolziocatError::ArithmeticOverflow))?;

    total_supply
        .checked_sub(decrease)
        .ok_or(error!(SolziocatError::ArithmeticOverflow))
}
