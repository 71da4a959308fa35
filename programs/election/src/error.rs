use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("You are not Election Commission")]
    Unauthorized,
    #[msg("Not allowed at this stage: you cannot add parties mid election, and votes only count while voting is active")]
    InvalidPhase,
    #[msg("Party is already registered")]
    DuplicateParty,
    #[msg("At least one party must be registered before voting starts")]
    NoParties,
    #[msg("Not eligible")]
    Ineligible,
    #[msg("Voter is already registered")]
    AlreadyRegistered,
    #[msg("Voter is not registered")]
    NotRegistered,
    #[msg("Voter has already voted")]
    AlreadyVoted,
    #[msg("Invalid party index")]
    InvalidIndex,
    #[msg("Party name must be between 1 and 32 bytes")]
    InvalidPartyName,
    #[msg("Party registration limit reached")]
    TooManyParties,
    #[msg("Vote count overflow")]
    Overflow,
}
