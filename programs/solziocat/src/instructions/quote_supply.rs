//! Quote Supply Instruction
//!
//! Read-only: returns the projected supply at the current clock.

use anchor_lang::prelude::*;

use crate::state::RebaseState;
use crate::utils::supply::projected_supply;

#[derive(Accounts)]
pub struct QuoteSupply<'info> {
    #[account(
        seeds = [RebaseState::SEED_PREFIX],
        bump = state.bump,
    )]
    pub state: Account<'info, RebaseState>,
}

pub fn handler(ctx: Context<QuoteSupply>) -> Result<u64> {
    let state = &ctx.accounts.state;
    let now = Clock::get()?.unix_timestamp;

    let projected = projected_supply(
        state.total_supply,
        state.elapsed_since_rebase(now),
        state.rebase_interval,
    )?;

    msg!(
        "Projected supply {} (tracked {}), next rebase in {}s",
        projected,
        state.total_supply,
        state.seconds_until_rebase(now)
    );

    Ok(projected)
}
