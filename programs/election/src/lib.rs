// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod handlers;
pub mod permissions;
pub mod state;

use constants::*;
pub use error::ErrorCode;
pub use state::{Election, Notification, Party, Voter, VotingPhase, Winner};

declare_id!("ASfLDDqfirD6mg2KzY9oZ8HyLCsSyUNXqzpPoMnmPPWv");

#[program]
pub mod election {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        handlers::initialize::initialize(ctx)
    }

    pub fn register_party(ctx: Context<AdminAction>, name: String) -> Result<()> {
        handlers::register_party::register_party(ctx, name)
    }

    pub fn register_voter(ctx: Context<RegisterVoter>, age: u32) -> Result<()> {
        handlers::register_voter::register_voter(ctx, age)
    }

    pub fn start_voting(ctx: Context<AdminAction>) -> Result<()> {
        handlers::voting_phase::start_voting(ctx)
    }

    pub fn end_voting(ctx: Context<AdminAction>) -> Result<()> {
        handlers::voting_phase::end_voting(ctx)
    }

    pub fn cast_vote(ctx: Context<CastVote>, party_index: u32) -> Result<()> {
        handlers::cast_vote::cast_vote(ctx, party_index)
    }

    pub fn get_winner(ctx: Context<ReadElection>) -> Result<Winner> {
        handlers::queries::get_winner(ctx)
    }

    pub fn get_parties_count(ctx: Context<ReadElection>) -> Result<u32> {
        handlers::queries::get_parties_count(ctx)
    }

    pub fn get_political_party(ctx: Context<ReadElection>, index: u32) -> Result<Party> {
        handlers::queries::get_political_party(ctx, index)
    }

    pub fn get_voter(ctx: Context<ReadVoter>, address: Pubkey) -> Result<Voter> {
        handlers::queries::get_voter(ctx, address)
    }
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + Election::INIT_SPACE,
        seeds = [ELECTION_SEED],
        bump,
    )]
    pub election: Account<'info, Election>,

    pub system_program: Program<'info, System>,
}

/// Shared by every administrator instruction. The ledger's permission table
/// checks the signer against `election.admin`.
#[derive(Accounts)]
pub struct AdminAction<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [ELECTION_SEED],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,
}

#[derive(Accounts)]
pub struct RegisterVoter<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [ELECTION_SEED],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,

    // init_if_needed so a second registration reaches the ledger and fails
    // with AlreadyRegistered
    #[account(
        init_if_needed,
        payer = voter,
        space = 8 + Voter::INIT_SPACE,
        seeds = [VOTER_SEED, election.key().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub voter_record: Account<'info, Voter>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct CastVote<'info> {
    pub voter: Signer<'info>,

    #[account(
        mut,
        seeds = [ELECTION_SEED],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,

    /// CHECK: voter_record, address checked by the seeds constraint.
    /// Empty when the signer never registered; decoded by `Voter::read`.
    #[account(
        mut,
        seeds = [VOTER_SEED, election.key().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub voter_record: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct ReadElection<'info> {
    #[account(
        seeds = [ELECTION_SEED],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,
}

#[derive(Accounts)]
#[instruction(address: Pubkey)]
pub struct ReadVoter<'info> {
    #[account(
        seeds = [ELECTION_SEED],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,

    /// CHECK: voter_record, address checked by the seeds constraint.
    /// May be uninitialized when `address` never registered.
    #[account(
        seeds = [VOTER_SEED, election.key().as_ref(), address.as_ref()],
        bump,
    )]
    pub voter_record: UncheckedAccount<'info>,
}
