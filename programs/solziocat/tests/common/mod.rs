#![allow(dead_code)]

use anchor_lang::error::ERROR_CODE_OFFSET;
use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::TokenAccount;
use solana_program_test::{BanksClientError, ProgramTest};
use std::env;

pub use solana_program_test::ProgramTestContext;
pub use solana_sdk::{
    clock::Clock,
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};
pub use solziocat::{RebaseState, SolziocatError};

pub const INITIAL_SUPPLY: u64 = 1_000_000_000;

pub fn program_test() -> ProgramTest {
    if env::var("BPF_OUT_DIR").is_err() && env::var("SBF_OUT_DIR").is_err() {
        let deploy_dir = format!("{}/../../target/deploy", env!("CARGO_MANIFEST_DIR"));
        env::set_var("BPF_OUT_DIR", deploy_dir);
    }

    let mut pt = ProgramTest::new("solziocat", solziocat::ID, None);
    pt.prefer_bpf(true);
    pt
}

pub async fn start() -> ProgramTestContext {
    program_test().start_with_context().await
}

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

pub fn state_pda() -> Pubkey {
    RebaseState::find_pda(&solziocat::ID).0
}

pub fn mint_pda() -> Pubkey {
    RebaseState::find_mint_pda(&solziocat::ID).0
}

pub fn token_account(owner: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, &mint_pda())
}

// ---------------------------------------------------------------------------
// Instruction builders
// ---------------------------------------------------------------------------

pub fn initialize_ix(creator: &Pubkey, initial_supply: u64) -> Instruction {
    Instruction {
        program_id: solziocat::ID,
        accounts: solziocat::accounts::Initialize {
            creator: *creator,
            state: state_pda(),
            mint: mint_pda(),
            creator_token_account: token_account(creator),
            system_program: anchor_lang::system_program::ID,
            token_program: anchor_spl::token::ID,
            associated_token_program: anchor_spl::associated_token::ID,
        }
        .to_account_metas(None),
        data: solziocat::instruction::Initialize { initial_supply }.data(),
    }
}

pub fn rebase_ix(burn_authority: &Pubkey, fees_collector: &Pubkey) -> Instruction {
    Instruction {
        program_id: solziocat::ID,
        accounts: solziocat::accounts::Rebase {
            burn_authority: *burn_authority,
            state: state_pda(),
            mint: mint_pda(),
            burn_account: token_account(burn_authority),
            fees_collector: *fees_collector,
            fees_collector_token_account: token_account(fees_collector),
            token_program: anchor_spl::token::ID,
            associated_token_program: anchor_spl::associated_token::ID,
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None),
        data: solziocat::instruction::Rebase {}.data(),
    }
}

pub fn quote_supply_ix() -> Instruction {
    Instruction {
        program_id: solziocat::ID,
        accounts: solziocat::accounts::QuoteSupply { state: state_pda() }.to_account_metas(None),
        data: solziocat::instruction::QuoteSupply {}.data(),
    }
}

pub fn set_fees_collector_ix(authority: &Pubkey, new_fees_collector: Pubkey) -> Instruction {
    Instruction {
        program_id: solziocat::ID,
        accounts: solziocat::accounts::SetFeesCollector {
            authority: *authority,
            state: state_pda(),
        }
        .to_account_metas(None),
        data: solziocat::instruction::SetFeesCollector { new_fees_collector }.data(),
    }
}

pub fn pause_ix(authority: &Pubkey) -> Instruction {
    Instruction {
        program_id: solziocat::ID,
        accounts: solziocat::accounts::Pause {
            authority: *authority,
            state: state_pda(),
        }
        .to_account_metas(None),
        data: solziocat::instruction::Pause {}.data(),
    }
}

pub fn unpause_ix(authority: &Pubkey) -> Instruction {
    Instruction {
        program_id: solziocat::ID,
        accounts: solziocat::accounts::Unpause {
            authority: *authority,
            state: state_pda(),
        }
        .to_account_metas(None),
        data: solziocat::instruction::Unpause {}.data(),
    }
}

pub fn initiate_authority_transfer_ix(authority: &Pubkey, new_authority: Pubkey) -> Instruction {
    Instruction {
        program_id: solziocat::ID,
        accounts: solziocat::accounts::InitiateAuthorityTransfer {
            authority: *authority,
            state: state_pda(),
        }
        .to_account_metas(None),
        data: solziocat::instruction::InitiateAuthorityTransfer { new_authority }.data(),
    }
}

pub fn accept_authority_transfer_ix(new_authority: &Pubkey) -> Instruction {
    Instruction {
        program_id: solziocat::ID,
        accounts: solziocat::accounts::AcceptAuthorityTransfer {
            new_authority: *new_authority,
            state: state_pda(),
        }
        .to_account_metas(None),
        data: solziocat::instruction::AcceptAuthorityTransfer {}.data(),
    }
}

pub fn cancel_authority_transfer_ix(authority: &Pubkey) -> Instruction {
    Instruction {
        program_id: solziocat::ID,
        accounts: solziocat::accounts::CancelAuthorityTransfer {
            authority: *authority,
            state: state_pda(),
        }
        .to_account_metas(None),
        data: solziocat::instruction::CancelAuthorityTransfer {}.data(),
    }
}

// ---------------------------------------------------------------------------
// Transaction helpers
// ---------------------------------------------------------------------------

/// Sign with the context payer plus `signers` and process.
pub async fn process(
    ctx: &mut ProgramTestContext,
    ix: Instruction,
    signers: &[&Keypair],
) -> Result<(), BanksClientError> {
    let payer = ctx.payer.insecure_clone();
    let mut all: Vec<&Keypair> = vec![&payer];
    all.extend_from_slice(signers);

    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &all,
        ctx.last_blockhash,
    );
    ctx.banks_client.process_transaction(tx).await
}

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx.get_new_latest_blockhash().await.unwrap();
}

pub async fn transfer(ctx: &mut ProgramTestContext, recipient: &Pubkey, amount: u64) {
    let ix = system_instruction::transfer(&ctx.payer.pubkey(), recipient, amount);
    process(ctx, ix, &[]).await.unwrap();
}

/// Move the cluster clock forward without producing slots.
pub async fn warp_seconds(ctx: &mut ProgramTestContext, seconds: i64) {
    let mut clock: Clock = ctx.banks_client.get_sysvar().await.unwrap();
    clock.unix_timestamp += seconds;
    ctx.set_sysvar(&clock);
    refresh_blockhash(ctx).await;
}

/// Initialize with the context payer as creator and return the creator key.
pub async fn initialize_default(ctx: &mut ProgramTestContext) -> Pubkey {
    let creator = ctx.payer.pubkey();
    process(ctx, initialize_ix(&creator, INITIAL_SUPPLY), &[])
        .await
        .unwrap();
    creator
}

// ---------------------------------------------------------------------------
// Account readers
// ---------------------------------------------------------------------------

pub async fn fetch_state(ctx: &mut ProgramTestContext) -> RebaseState {
    let account = ctx
        .banks_client
        .get_account(state_pda())
        .await
        .unwrap()
        .expect("state account");
    RebaseState::try_deserialize(&mut account.data.as_slice()).unwrap()
}

pub async fn token_balance(ctx: &mut ProgramTestContext, owner: &Pubkey) -> u64 {
    let account = ctx
        .banks_client
        .get_account(token_account(owner))
        .await
        .unwrap()
        .expect("token account");
    TokenAccount::try_deserialize(&mut account.data.as_slice())
        .unwrap()
        .amount
}

pub async fn mint_supply(ctx: &mut ProgramTestContext) -> u64 {
    let account = ctx
        .banks_client
        .get_account(mint_pda())
        .await
        .unwrap()
        .expect("mint account");
    anchor_spl::token::Mint::try_deserialize(&mut account.data.as_slice())
        .unwrap()
        .supply
}

// ---------------------------------------------------------------------------
// Error matching
// ---------------------------------------------------------------------------

pub fn assert_program_error(result: Result<(), BanksClientError>, expected: SolziocatError) {
    let label = format!("{:?}", expected);
    let code = expected as u32 + ERROR_CODE_OFFSET;
    match result {
        Err(BanksClientError::TransactionError(TransactionError::InstructionError(
            _,
            InstructionError::Custom(got),
        ))) => assert_eq!(got, code, "expected {}", label),
        other => panic!("expected {} ({}), got {:?}", label, code, other),
    }
}
