use anchor_lang::prelude::*;

use crate::{state::Election, Initialize};

/// Creates the election ledger and makes the signer its election commission.
///
/// The ledger lives at a fixed PDA, so this can only succeed once per deployment.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    msg!("Initializing election, commission {}", admin);

    ctx.accounts
        .election
        .set_inner(Election::new(admin, ctx.bumps.election));

    Ok(())
}
