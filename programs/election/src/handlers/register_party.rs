use anchor_lang::prelude::*;

use crate::AdminAction;

/// Adds a party to the ballot.
///
/// Only the election commission can register parties, and only before voting starts.
/// The party's position in registration order is the index voters pass to `cast_vote`.
///
/// # Arguments
/// * `name` - Party name, unique (case-sensitive) and at most 32 bytes
pub fn register_party(ctx: Context<AdminAction>, name: String) -> Result<()> {
    msg!("Registering party {}", name);

    let authority = ctx.accounts.authority.key();
    let notification = ctx.accounts.election.register_party(&authority, name)?;
    notification.emit();

    Ok(())
}
