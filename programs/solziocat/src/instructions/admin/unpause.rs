//! Unpause Instruction

use anchor_lang::prelude::*;

use crate::error::SolziocatError;
use crate::events::ProgramUnpaused;
use crate::state::RebaseState;

/// Accounts for unpausing the program
#[derive(Accounts)]
pub struct Unpause<'info> {
    /// Program authority (must be signer)
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [RebaseState::SEED_PREFIX],
        bump = state.bump,
        has_one = authority @ SolziocatError::Unauthorized,
        constraint = state.is_paused @ SolziocatError::ProgramNotPaused,
    )]
    pub state: Account<'info, RebaseState>,
}

/// Handler for unpause instruction
pub fn handler(ctx: Context<Unpause>) -> Result<()> {
    let state = &mut ctx.accounts.state;

    let clock = Clock::get()?;
    let timestamp = clock.unix_timestamp;

    state.set_paused(false);

    emit!(ProgramUnpaused {
        state: state.key(),
        authority: ctx.accounts.authority.key(),
        timestamp,
    });

    msg!("Program unpaused by authority");

    Ok(())
}
