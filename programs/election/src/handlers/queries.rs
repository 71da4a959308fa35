use anchor_lang::prelude::*;

use crate::{
    state::{Party, Voter, Winner},
    ReadElection, ReadVoter,
};

// Read-only views. Results come back through the instruction return data, so
// clients can simulate these instead of decoding the accounts themselves.

pub fn get_winner(ctx: Context<ReadElection>) -> Result<Winner> {
    let winner = ctx.accounts.election.winner();
    msg!(
        "Winner: {:?} with {} votes, tie: {}",
        winner.name,
        winner.votes,
        winner.is_tie
    );
    Ok(winner)
}

pub fn get_parties_count(ctx: Context<ReadElection>) -> Result<u32> {
    Ok(ctx.accounts.election.parties_count())
}

pub fn get_political_party(ctx: Context<ReadElection>, index: u32) -> Result<Party> {
    ctx.accounts.election.political_party(index).cloned()
}

/// Returns the registration record for `address`, or a blank record if that
/// address never registered.
pub fn get_voter(ctx: Context<ReadVoter>, address: Pubkey) -> Result<Voter> {
    let data = ctx.accounts.voter_record.try_borrow_data()?;
    let voter = Voter::read(address, &data)?;
    Ok(voter)
}
