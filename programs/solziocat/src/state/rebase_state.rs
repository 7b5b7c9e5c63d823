//! Rebase State - SOLZIO token
//!
//! Singleton account tracking the tracked supply, the rebase clock and the
//! fee/authority configuration.
//!
//! # Supply Schedule
//! Every `rebase_interval` seconds the supply is halved. Of the debased
//! amount, `REBASE_FEE_BPS` is sent to the fees collector and the rest is
//! burned. Between rebases balances stay fixed and only the projected supply
//! decreases, in `SUPPLY_STEP_SECONDS` steps.

use anchor_lang::prelude::*;
use solana_program::clock::SECONDS_PER_DAY;

use crate::error::SolziocatError;
use crate::utils::supply::RebaseOutcome;

/// 4 days + 144 seconds
pub const REBASE_INTERVAL: i64 = 4 * SECONDS_PER_DAY as i64 + 144;

/// Granularity of the projected supply between rebases (34 minutes)
pub const SUPPLY_STEP_SECONDS: i64 = 34 * 60;

/// Share of the debased supply sent to the fees collector (13.37%)
pub const REBASE_FEE_BPS: u64 = 1_337;

pub const BPS_DENOMINATOR: u64 = 10_000;

pub const TOKEN_DECIMALS: u8 = 9;

/// Program state account
///
/// PDA Seeds: `[b"rebase_state"]`
#[account]
pub struct RebaseState {
    /// Admin allowed to pause and reconfigure
    pub authority: Pubkey,

    /// Authority awaiting acceptance (default = none)
    pub pending_authority: Pubkey,

    /// SOLZIO mint (PDA, its own mint authority)
    pub mint: Pubkey,

    /// Owner of the token account receiving rebase fees
    pub fees_collector: Pubkey,

    /// Tracked supply after the last rebase
    pub total_supply: u64,

    /// Unix timestamp of the last rebase (or initialization)
    pub last_rebase: i64,

    /// Seconds between rebases
    pub rebase_interval: i64,

    pub rebase_count: u64,

    /// Lifetime amount burned by rebases
    pub total_burned: u64,

    /// Lifetime amount sent to the fees collector
    pub total_fees: u64,

    pub created_at: i64,

    /// PDA bump seed
    pub bump: u8,

    /// Mint PDA bump seed
    pub mint_bump: u8,

    pub is_paused: bool,

    pub version: u8,

    pub _reserved: [u8; 32],
}

impl RebaseState {
    pub const LEN: usize =
        8 + 32 + 32 + 32 + 32 + 8 + 8 + 8 + 8 + 8 + 8 + 8 + 1 + 1 + 1 + 1 + 32;
    pub const VERSION: u8 = 1;

    pub const SEED_PREFIX: &'static [u8] = b"rebase_state";
    pub const MINT_SEED: &'static [u8] = b"mint_authority";

    pub fn initialize(
        &mut self,
        authority: Pubkey,
        mint: Pubkey,
        initial_supply: u64,
        bump: u8,
        mint_bump: u8,
        timestamp: i64,
    ) -> Result<()> {
        require!(initial_supply > 0, SolziocatError::InvalidSupply);

        self.authority = authority;
        self.pending_authority = Pubkey::default();
        self.mint = mint;
        self.fees_collector = authority;
        self.total_supply = initial_supply;
        self.last_rebase = timestamp;
        self.rebase_interval = REBASE_INTERVAL;
        self.rebase_count = 0;
        self.total_burned = 0;
        self.total_fees = 0;
        self.created_at = timestamp;
        self.bump = bump;
        self.mint_bump = mint_bump;
        self.is_paused = false;
        self.version = Self::VERSION;
        self._reserved = [0u8; 32];
        Ok(())
    }

    /// Seconds since the last rebase, saturating at zero if the clock reads earlier.
    #[inline]
    pub fn elapsed_since_rebase(&self, now: i64) -> i64 {
        now.saturating_sub(self.last_rebase).max(0)
    }

    pub fn next_rebase_at(&self) -> Result<i64> {
        self.last_rebase
            .checked_add(self.rebase_interval)
            .ok_or(error!(SolziocatError::ArithmeticOverflow))
    }

    pub fn seconds_until_rebase(&self, now: i64) -> i64 {
        self.rebase_interval
            .saturating_sub(self.elapsed_since_rebase(now))
            .max(0)
    }

    #[inline]
    pub fn can_rebase(&self, now: i64) -> bool {
        now >= self.last_rebase && self.elapsed_since_rebase(now) >= self.rebase_interval
    }

    pub fn require_rebase_due(&self, now: i64) -> Result<()> {
        require!(self.can_rebase(now), SolziocatError::TooEarlyForRebase);
        Ok(())
    }

    /// Commit a computed rebase to the tracked supply and counters.
    pub fn apply_rebase(&mut self, outcome: &RebaseOutcome, timestamp: i64) -> Result<()> {
        self.total_supply = outcome.new_supply;
        self.last_rebase = timestamp;
        self.rebase_count = self
            .rebase_count
            .checked_add(1)
            .ok_or(error!(SolziocatError::ArithmeticOverflow))?;
        self.total_burned = self
            .total_burned
            .checked_add(outcome.burned)
            .ok_or(error!(SolziocatError::ArithmeticOverflow))?;
        self.total_fees = self
            .total_fees
            .checked_add(outcome.fee)
            .ok_or(error!(SolziocatError::ArithmeticOverflow))?;
        Ok(())
    }

    #[inline]
    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
    }

    pub fn set_fees_collector(&mut self, fees_collector: Pubkey) -> Result<()> {
        require!(
            fees_collector != Pubkey::default(),
            SolziocatError::InvalidFeesCollector
        );
        self.fees_collector = fees_collector;
        Ok(())
    }

    pub fn initiate_authority_transfer(&mut self, new_authority: Pubkey) -> Result<()> {
        require!(
            new_authority != Pubkey::default(),
            SolziocatError::InvalidAuthority
        );
        require!(
            new_authority != self.authority,
            SolziocatError::InvalidAuthority
        );
        self.pending_authority = new_authority;
        Ok(())
    }

    pub fn accept_authority_transfer(&mut self, acceptor: Pubkey) -> Result<()> {
        require!(
            self.has_pending_transfer(),
            SolziocatError::NoPendingAuthority
        );
        require!(
            acceptor == self.pending_authority,
            SolziocatError::Unauthorized
        );
        self.authority = self.pending_authority;
        self.pending_authority = Pubkey::default();
        Ok(())
    }

    pub fn cancel_authority_transfer(&mut self) {
        self.pending_authority = Pubkey::default();
    }

    #[inline]
    pub fn has_pending_transfer(&self) -> bool {
        self.pending_authority != Pubkey::default()
    }

    pub fn find_pda(program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::SEED_PREFIX], program_id)
    }

    pub fn find_mint_pda(program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::MINT_SEED], program_id)
    }

    pub fn mint_seeds(bump: &[u8; 1]) -> [&[u8]; 2] {
        [Self::MINT_SEED, bump]
    }
}
