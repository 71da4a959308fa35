use anchor_lang::prelude::*;

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyRegistered {
    /// Position of the new party, used as the `cast_vote` index
    pub index: u32,
    pub name: String,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotingStarted {
    pub party_count: u32,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotingEnded {
    pub total_votes: u64,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteCast {
    pub voter: Pubkey,
    pub party_index: u32,
}

/// A state change reported by the ledger, emitted once the handler succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    PartyRegistered(PartyRegistered),
    VotingStarted(VotingStarted),
    VotingEnded(VotingEnded),
    VoteCast(VoteCast),
}

impl Notification {
    /// Writes the event to the program log, where subscribers pick it up after finalization.
    pub fn emit(self) {
        match self {
            Notification::PartyRegistered(event) => emit!(event),
            Notification::VotingStarted(event) => emit!(event),
            Notification::VotingEnded(event) => emit!(event),
            Notification::VoteCast(event) => emit!(event),
        }
    }
}
