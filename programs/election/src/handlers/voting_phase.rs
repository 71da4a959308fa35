use anchor_lang::prelude::*;

use crate::AdminAction;

/// Opens voting. Requires at least one registered party; parties are frozen from here on.
pub fn start_voting(ctx: Context<AdminAction>) -> Result<()> {
    msg!("Starting voting");

    let authority = ctx.accounts.authority.key();
    let notification = ctx.accounts.election.start_voting(&authority)?;
    notification.emit();

    Ok(())
}

/// Closes voting for good. The tally from `get_winner` is final afterwards.
pub fn end_voting(ctx: Context<AdminAction>) -> Result<()> {
    msg!("Ending voting");

    let authority = ctx.accounts.authority.key();
    let notification = ctx.accounts.election.end_voting(&authority)?;
    notification.emit();

    Ok(())
}
