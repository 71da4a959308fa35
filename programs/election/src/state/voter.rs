use anchor_lang::prelude::*;

/// Registration record of a single voter, one PDA per (election, voter) pair.
///
/// An address that never registered reads back as the default record, so
/// `is_registered` and `has_voted` are both `false` until proven otherwise.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Voter {
    /// Wallet that owns this record
    pub voter: Pubkey,
    pub age: u32,
    pub is_registered: bool,
    /// Flips to `true` exactly once, on the voter's first and only vote
    pub has_voted: bool,
    /// Index of the chosen party, meaningful only once `has_voted` is set
    pub voted_party: u32,
    /// PDA bump seed
    pub bump: u8,
}

impl Voter {
    /// The record reported for an address that has no registration.
    pub fn unregistered(voter: Pubkey) -> Self {
        Self {
            voter,
            ..Self::default()
        }
    }

    /// Decodes the account data stored at `address`'s voter PDA. An account
    /// that was never created has no data and reads as unregistered.
    pub fn read(address: Pubkey, data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Ok(Self::unregistered(address));
        }

        let mut data = data;
        Self::try_deserialize(&mut data)
    }

    /// Encodes the record, discriminator first, into existing account data.
    pub fn write(&self, data: &mut [u8]) -> Result<()> {
        let mut writer = data;
        self.try_serialize(&mut writer)
    }

    pub fn is_registered_as(&self, key: &Pubkey) -> bool {
        self.is_registered && self.voter == *key
    }

    pub(crate) fn register(&mut self, voter: Pubkey, age: u32) {
        self.voter = voter;
        self.age = age;
        self.is_registered = true;
        self.has_voted = false;
    }

    pub(crate) fn record_vote(&mut self, party_index: u32) {
        self.has_voted = true;
        self.voted_party = party_index;
    }
}
