//! Pause Instruction
//!
//! Pauses the program, blocking rebases. Admin instructions and supply
//! quotes remain available while paused.

use anchor_lang::prelude::*;

use crate::error::SolziocatError;
use crate::events::ProgramPaused;
use crate::state::RebaseState;

/// Accounts for pausing the program
#[derive(Accounts)]
pub struct Pause<'info> {
    /// Program authority (must be signer)
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [RebaseState::SEED_PREFIX],
        bump = state.bump,
        has_one = authority @ SolziocatError::Unauthorized,
        constraint = !state.is_paused @ SolziocatError::ProgramPaused,
    )]
    pub state: Account<'info, RebaseState>,
}

/// Handler for pause instruction
pub fn handler(ctx: Context<Pause>) -> Result<()> {
    let state = &mut ctx.accounts.state;

    let clock = Clock::get()?;
    let timestamp = clock.unix_timestamp;

    state.set_paused(true);

    emit!(ProgramPaused {
        state: state.key(),
        authority: ctx.accounts.authority.key(),
        timestamp,
    });

    msg!("Program paused by authority");

    Ok(())
}
