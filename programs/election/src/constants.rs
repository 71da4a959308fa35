// PDA seeds
pub const ELECTION_SEED: &[u8] = b"election";
pub const VOTER_SEED: &[u8] = b"voter";

/// Voters younger than this are turned away at registration.
pub const MINIMUM_VOTING_AGE: u32 = 18;

// Upper bounds baked into the election account size
pub const MAX_PARTIES: usize = 16;
pub const MAX_PARTY_NAME_LENGTH: usize = 32;
