pub mod initialize;
pub use initialize::*;

pub mod register_party;
pub use register_party::*;

pub mod register_voter;
pub use register_voter::*;

pub mod voting_phase;
pub use voting_phase::*;

pub mod cast_vote;
pub use cast_vote::*;

pub mod queries;
pub use queries::*;
