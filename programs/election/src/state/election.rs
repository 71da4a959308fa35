use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_PARTIES, MAX_PARTY_NAME_LENGTH, MINIMUM_VOTING_AGE},
    error::ErrorCode,
    permissions::{authorize, Caller, Operation},
    state::{Notification, PartyRegistered, VoteCast, Voter, VotingEnded, VotingStarted},
};

#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub enum VotingPhase {
    #[default]
    NotStarted,
    Active,
    Ended,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Party {
    #[max_len(MAX_PARTY_NAME_LENGTH)]
    pub name: String,
    pub total_votes: u64,
}

/// Tally outcome. An empty `name` means there is no single winner: either
/// nobody received a vote, or `is_tie` is set and `votes` holds the shared
/// maximum.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Winner {
    pub name: String,
    pub votes: u64,
    pub is_tie: bool,
}

/// The election ledger: one per deployment, owned by the administrator that
/// initialized it.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Election {
    /// PDA bump seed
    pub bump: u8,
    /// Election commission; the only key allowed to register parties and move the phase
    pub admin: Pubkey,
    pub phase: VotingPhase,
    /// Sum of every party's `total_votes`
    pub total_votes: u64,
    /// Parties in registration order; a party's position is its vote index
    #[max_len(MAX_PARTIES)]
    pub parties: Vec<Party>,
}

impl Election {
    pub fn new(admin: Pubkey, bump: u8) -> Self {
        Self {
            bump,
            admin,
            phase: VotingPhase::NotStarted,
            total_votes: 0,
            parties: Vec::new(),
        }
    }

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admin == *key
    }

    fn caller(&self, key: &Pubkey, voter: Option<&Voter>) -> Caller {
        Caller {
            is_admin: self.is_admin(key),
            is_registered_voter: voter.is_some_and(|voter| voter.is_registered_as(key)),
        }
    }

    pub fn register_party(&mut self, caller: &Pubkey, name: String) -> Result<Notification> {
        authorize(Operation::RegisterParty, self.phase, self.caller(caller, None))?;
        require!(
            !name.is_empty() && name.len() <= MAX_PARTY_NAME_LENGTH,
            ErrorCode::InvalidPartyName
        );
        require!(
            !self.parties.iter().any(|party| party.name == name),
            ErrorCode::DuplicateParty
        );
        require!(self.parties.len() < MAX_PARTIES, ErrorCode::TooManyParties);

        let index = self.parties_count();
        self.parties.push(Party {
            name: name.clone(),
            total_votes: 0,
        });

        Ok(Notification::PartyRegistered(PartyRegistered { index, name }))
    }

    /// Registers `caller` into `voter`, which must be the caller's own record.
    /// Allowed in every phase.
    pub fn register_voter(&self, caller: &Pubkey, voter: &mut Voter, age: u32) -> Result<()> {
        authorize(
            Operation::RegisterVoter,
            self.phase,
            self.caller(caller, Some(&*voter)),
        )?;
        require!(age >= MINIMUM_VOTING_AGE, ErrorCode::Ineligible);
        require!(!voter.is_registered, ErrorCode::AlreadyRegistered);

        voter.register(*caller, age);
        Ok(())
    }

    pub fn start_voting(&mut self, caller: &Pubkey) -> Result<Notification> {
        authorize(Operation::StartVoting, self.phase, self.caller(caller, None))?;
        require!(!self.parties.is_empty(), ErrorCode::NoParties);

        self.phase = VotingPhase::Active;
        Ok(Notification::VotingStarted(VotingStarted {
            party_count: self.parties_count(),
        }))
    }

    pub fn end_voting(&mut self, caller: &Pubkey) -> Result<Notification> {
        authorize(Operation::EndVoting, self.phase, self.caller(caller, None))?;

        self.phase = VotingPhase::Ended;
        Ok(Notification::VotingEnded(VotingEnded {
            total_votes: self.total_votes,
        }))
    }

    pub fn cast_vote(
        &mut self,
        caller: &Pubkey,
        voter: &mut Voter,
        party_index: u32,
    ) -> Result<Notification> {
        authorize(
            Operation::CastVote,
            self.phase,
            self.caller(caller, Some(&*voter)),
        )?;
        require!(!voter.has_voted, ErrorCode::AlreadyVoted);

        let party = usize::try_from(party_index)
            .ok()
            .and_then(|index| self.parties.get_mut(index))
            .ok_or(ErrorCode::InvalidIndex)?;
        let party_votes = party
            .total_votes
            .checked_add(1)
            .ok_or(ErrorCode::Overflow)?;
        let total_votes = self
            .total_votes
            .checked_add(1)
            .ok_or(ErrorCode::Overflow)?;

        party.total_votes = party_votes;
        self.total_votes = total_votes;
        voter.record_vote(party_index);

        Ok(Notification::VoteCast(VoteCast {
            voter: *caller,
            party_index,
        }))
    }

    /// Computes the current tally. Only final once the phase is `Ended`.
    ///
    /// A shared maximum is always reported as a tie; registration order never
    /// breaks it.
    pub fn winner(&self) -> Winner {
        let max_votes = self
            .parties
            .iter()
            .map(|party| party.total_votes)
            .max()
            .unwrap_or(0);
        if max_votes == 0 {
            return Winner::default();
        }

        let mut leaders = self
            .parties
            .iter()
            .filter(|party| party.total_votes == max_votes);
        match (leaders.next(), leaders.next()) {
            (Some(party), None) => Winner {
                name: party.name.clone(),
                votes: max_votes,
                is_tie: false,
            },
            _ => Winner {
                name: String::new(),
                votes: max_votes,
                is_tie: true,
            },
        }
    }

    pub fn parties_count(&self) -> u32 {
        // bounded by MAX_PARTIES
        self.parties.len() as u32
    }

    pub fn political_party(&self, index: u32) -> Result<&Party> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.parties.get(index))
            .ok_or_else(|| error!(ErrorCode::InvalidIndex))
    }
}
