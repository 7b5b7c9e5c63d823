//! Rebase Instruction
//!
//! Halves the tracked supply once the rebase interval has elapsed.
//!
//! # Flow
//!
//! 1. Check the program is running and the interval has elapsed
//! 2. Split the debased amount into fee and burn
//! 3. Burn from the burner's token account, send the fee to the collector
//! 4. Commit the new supply and restart the rebase clock
//!
//! Only one halving is applied per call, however long the program has been
//! idle.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};

use crate::error::SolziocatError;
use crate::events::Rebased;
#[cfg(feature = "event-debug")]
use crate::events::RebaseDebugEvent;
use crate::state::RebaseState;
use crate::utils::supply::compute_rebase;

#[derive(Accounts)]
pub struct Rebase<'info> {
    /// Owner of the burn account; pays for the collector account if missing
    #[account(mut)]
    pub burn_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [RebaseState::SEED_PREFIX],
        bump = state.bump,
        has_one = mint @ SolziocatError::InvalidMint,
        has_one = fees_collector @ SolziocatError::InvalidFeesCollector,
        constraint = !state.is_paused @ SolziocatError::ProgramPaused,
    )]
    pub state: Box<Account<'info, RebaseState>>,

    #[account(
        mut,
        seeds = [RebaseState::MINT_SEED],
        bump = state.mint_bump,
    )]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = burn_authority,
    )]
    pub burn_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: Validated by has_one constraint on state
    pub fees_collector: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = burn_authority,
        associated_token::mint = mint,
        associated_token::authority = fees_collector,
    )]
    pub fees_collector_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Rebase>) -> Result<()> {
    let clock = Clock::get()?;
    let current_time = clock.unix_timestamp;

    let state = &ctx.accounts.state;
    state.require_rebase_due(current_time)?;

    let outcome = compute_rebase(state.total_supply)?;

    require!(
        ctx.accounts.burn_account.amount >= outcome.debased,
        SolziocatError::InsufficientBurnBalance
    );

    #[cfg(feature = "event-debug")]
    let elapsed = state.elapsed_since_rebase(current_time);
    #[cfg(feature = "event-debug")]
    let burn_account_balance = ctx.accounts.burn_account.amount;

    // Burn tokens to reduce supply
    if outcome.burned > 0 {
        token::burn(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Burn {
                    mint: ctx.accounts.mint.to_account_info(),
                    from: ctx.accounts.burn_account.to_account_info(),
                    authority: ctx.accounts.burn_authority.to_account_info(),
                },
            ),
            outcome.burned,
        )?;
    }

    // Redirect the fee share of the debased supply
    if outcome.fee > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.burn_account.to_account_info(),
                    to: ctx.accounts.fees_collector_token_account.to_account_info(),
                    authority: ctx.accounts.burn_authority.to_account_info(),
                },
            ),
            outcome.fee,
        )?;
    }

    let state = &mut ctx.accounts.state;
    state.apply_rebase(&outcome, current_time)?;

    emit!(Rebased {
        state: state.key(),
        previous_supply: outcome.previous_supply,
        new_supply: outcome.new_supply,
        burned: outcome.burned,
        fee: outcome.fee,
        fees_collector: state.fees_collector,
        rebase_count: state.rebase_count,
        timestamp: current_time,
    });

    // Debug event - only emitted when event-debug feature is enabled
    #[cfg(feature = "event-debug")]
    {
        emit!(RebaseDebugEvent {
            state: state.key(),
            burn_authority: ctx.accounts.burn_authority.key(),
            burn_account: ctx.accounts.burn_account.key(),
            burn_account_balance,
            debased: outcome.debased,
            burned: outcome.burned,
            fee: outcome.fee,
            elapsed,
            timestamp: current_time,
        });
    }

    msg!(
        "Rebase #{}: supply {} -> {} (burned={}, fee={})",
        state.rebase_count,
        outcome.previous_supply,
        outcome.new_supply,
        outcome.burned,
        outcome.fee
    );

    Ok(())
}
