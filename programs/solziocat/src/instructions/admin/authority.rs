//! Authority Handover
//!
//! The admin role moves in two steps: the current authority proposes a
//! successor, and the successor signs to take over. Until then the proposal
//! can be withdrawn.

use anchor_lang::prelude::*;

use crate::error::SolziocatError;
use crate::events::{
    AuthorityTransferCancelled,
    AuthorityTransferCompleted,
    AuthorityTransferInitiated,
};
use crate::state::RebaseState;

/// Current authority proposes `new_authority`.
#[derive(Accounts)]
pub struct InitiateAuthorityTransfer<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [RebaseState::SEED_PREFIX],
        bump = state.bump,
        has_one = authority @ SolziocatError::Unauthorized,
    )]
    pub state: Account<'info, RebaseState>,
}

/// Proposed successor takes over.
#[derive(Accounts)]
pub struct AcceptAuthorityTransfer<'info> {
    pub new_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [RebaseState::SEED_PREFIX],
        bump = state.bump,
        constraint = state.has_pending_transfer() @ SolziocatError::NoPendingAuthority,
        constraint = state.pending_authority == new_authority.key() @ SolziocatError::Unauthorized,
    )]
    pub state: Account<'info, RebaseState>,
}

/// Current authority withdraws an open proposal.
#[derive(Accounts)]
pub struct CancelAuthorityTransfer<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [RebaseState::SEED_PREFIX],
        bump = state.bump,
        has_one = authority @ SolziocatError::Unauthorized,
        constraint = state.has_pending_transfer() @ SolziocatError::NoPendingAuthority,
    )]
    pub state: Account<'info, RebaseState>,
}

pub fn initiate_handler(
    ctx: Context<InitiateAuthorityTransfer>,
    new_authority: Pubkey,
) -> Result<()> {
    let current_authority = ctx.accounts.authority.key();
    let state = &mut ctx.accounts.state;
    state.initiate_authority_transfer(new_authority)?;

    emit!(AuthorityTransferInitiated {
        state: state.key(),
        current_authority,
        pending_authority: new_authority,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Authority handover proposed to {}", new_authority);

    Ok(())
}

pub fn accept_handler(ctx: Context<AcceptAuthorityTransfer>) -> Result<()> {
    let successor = ctx.accounts.new_authority.key();
    let state = &mut ctx.accounts.state;
    let old_authority = state.authority;
    state.accept_authority_transfer(successor)?;

    emit!(AuthorityTransferCompleted {
        state: state.key(),
        old_authority,
        new_authority: successor,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Authority handed over: {} -> {}", old_authority, successor);

    Ok(())
}

pub fn cancel_handler(ctx: Context<CancelAuthorityTransfer>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let state = &mut ctx.accounts.state;
    let cancelled_pending = state.pending_authority;
    state.cancel_authority_transfer();

    emit!(AuthorityTransferCancelled {
        state: state.key(),
        authority,
        cancelled_pending,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Authority handover to {} withdrawn", cancelled_pending);

    Ok(())
}
