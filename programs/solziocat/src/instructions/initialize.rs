//! Initialize Instruction
//!
//! Creates the program state, the SOLZIO mint and the creator's token
//! account, then mints the initial supply to the creator.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::events::TokenInitialized;
use crate::state::{RebaseState, TOKEN_DECIMALS};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        init,
        payer = creator,
        space = RebaseState::LEN,
        seeds = [RebaseState::SEED_PREFIX],
        bump,
    )]
    pub state: Box<Account<'info, RebaseState>>,

    /// SOLZIO mint; the PDA is its own mint authority
    #[account(
        init,
        payer = creator,
        seeds = [RebaseState::MINT_SEED],
        bump,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = mint,
    )]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = mint,
        associated_token::authority = creator,
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(ctx: Context<Initialize>, initial_supply: u64) -> Result<()> {
    let clock = Clock::get()?;
    let timestamp = clock.unix_timestamp;
    let state_bump = ctx.bumps.state;
    let mint_bump = ctx.bumps.mint;

    ctx.accounts.state.initialize(
        ctx.accounts.creator.key(),
        ctx.accounts.mint.key(),
        initial_supply,
        state_bump,
        mint_bump,
        timestamp,
    )?;

    // Mint initial supply to the creator
    let bump = [mint_bump];
    let mint_seeds = RebaseState::mint_seeds(&bump);
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.creator_token_account.to_account_info(),
                authority: ctx.accounts.mint.to_account_info(),
            },
            &[&mint_seeds[..]],
        ),
        initial_supply,
    )?;

    emit!(TokenInitialized {
        state: ctx.accounts.state.key(),
        mint: ctx.accounts.mint.key(),
        creator: ctx.accounts.creator.key(),
        initial_supply,
        rebase_interval: ctx.accounts.state.rebase_interval,
        timestamp,
    });

    msg!(
        "Initialized SOLZIO: supply={}, next rebase at {}",
        initial_supply,
        ctx.accounts.state.next_rebase_at()?
    );

    Ok(())
}
