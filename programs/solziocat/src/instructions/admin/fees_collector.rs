//! Set Fees Collector Instruction
//!
//! Changes the wallet whose token account receives rebase fees. The
//! collector's token account is created lazily by the next rebase.

use anchor_lang::prelude::*;

use crate::error::SolziocatError;
use crate::events::FeesCollectorUpdated;
use crate::state::RebaseState;

#[derive(Accounts)]
pub struct SetFeesCollector<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [RebaseState::SEED_PREFIX],
        bump = state.bump,
        has_one = authority @ SolziocatError::Unauthorized,
    )]
    pub state: Account<'info, RebaseState>,
}

pub fn handler(ctx: Context<SetFeesCollector>, new_fees_collector: Pubkey) -> Result<()> {
    let state = &mut ctx.accounts.state;

    let timestamp = Clock::get()?.unix_timestamp;
    let old_fees_collector = state.fees_collector;

    state.set_fees_collector(new_fees_collector)?;

    emit!(FeesCollectorUpdated {
        state: state.key(),
        old_fees_collector,
        new_fees_collector,
        timestamp,
    });

    msg!(
        "Fees collector updated: {} -> {}",
        old_fees_collector,
        new_fees_collector
    );

    Ok(())
}
