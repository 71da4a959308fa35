use anchor_lang::prelude::*;

use crate::{state::Voter, CastVote};

/// Casts the signer's single vote for the party at `party_index`.
///
/// The voter must have registered beforehand and voting must be active.
/// Once the vote is counted the voter record is marked, so a second call
/// fails with `AlreadyVoted` instead of counting twice. A caller with no
/// record at all is rejected with `NotRegistered`.
///
/// # Arguments
/// * `party_index` - Position of the party in registration order
pub fn cast_vote(ctx: Context<CastVote>, party_index: u32) -> Result<()> {
    let voter = ctx.accounts.voter.key();
    msg!("Voter {} voting for party {}", voter, party_index);

    let record_account = &ctx.accounts.voter_record;
    let mut record = Voter::read(voter, &record_account.try_borrow_data()?)?;

    let notification = ctx
        .accounts
        .election
        .cast_vote(&voter, &mut record, party_index)?;
    record.write(&mut record_account.try_borrow_mut_data()?)?;
    notification.emit();

    Ok(())
}
