//! Who may run each ledger operation, and in which voting phase.
//!
//! Every mutating operation consults [`authorize`] before it looks at its own
//! arguments, so role and phase failures always win over input validation.

use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::VotingPhase};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    RegisterParty,
    RegisterVoter,
    StartVoting,
    EndVoting,
    CastVote,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Administrator,
    RegisteredVoter,
    Anyone,
}

impl Role {
    fn denied(self) -> ErrorCode {
        match self {
            Role::RegisteredVoter => ErrorCode::NotRegistered,
            Role::Administrator | Role::Anyone => ErrorCode::Unauthorized,
        }
    }
}

/// The roles a particular signer holds for the call being checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Caller {
    pub is_admin: bool,
    pub is_registered_voter: bool,
}

impl Caller {
    pub fn holds(&self, role: Role) -> bool {
        match role {
            Role::Administrator => self.is_admin,
            Role::RegisteredVoter => self.is_registered_voter,
            Role::Anyone => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Permission {
    pub role: Role,
    pub phases: &'static [VotingPhase],
}

const ANY_PHASE: &[VotingPhase] = &[
    VotingPhase::NotStarted,
    VotingPhase::Active,
    VotingPhase::Ended,
];

impl Operation {
    pub const fn permission(self) -> Permission {
        match self {
            Operation::RegisterParty => Permission {
                role: Role::Administrator,
                phases: &[VotingPhase::NotStarted],
            },
            Operation::RegisterVoter => Permission {
                role: Role::Anyone,
                phases: ANY_PHASE,
            },
            Operation::StartVoting => Permission {
                role: Role::Administrator,
                phases: &[VotingPhase::NotStarted],
            },
            Operation::EndVoting => Permission {
                role: Role::Administrator,
                phases: &[VotingPhase::Active],
            },
            Operation::CastVote => Permission {
                role: Role::RegisteredVoter,
                phases: &[VotingPhase::Active],
            },
        }
    }
}

/// Checks the caller's role first, then the current phase.
pub fn authorize(operation: Operation, phase: VotingPhase, caller: Caller) -> Result<()> {
    let permission = operation.permission();

    if !caller.holds(permission.role) {
        return Err(permission.role.denied().into());
    }
    require!(permission.phases.contains(&phase), ErrorCode::InvalidPhase);

    Ok(())
}
