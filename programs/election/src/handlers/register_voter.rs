use anchor_lang::prelude::*;

use crate::RegisterVoter;

/// Registers the signer as a voter. Open to anyone aged 18 or over, in any phase.
pub fn register_voter(ctx: Context<RegisterVoter>, age: u32) -> Result<()> {
    let voter = ctx.accounts.voter.key();
    msg!("Registering voter {}", voter);

    ctx.accounts
        .election
        .register_voter(&voter, &mut ctx.accounts.voter_record, age)?;
    ctx.accounts.voter_record.bump = ctx.bumps.voter_record;

    Ok(())
}
