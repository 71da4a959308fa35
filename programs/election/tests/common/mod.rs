#![allow(dead_code)]

use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use election::{Election, ErrorCode, Notification, Voter};

/// Host-side stand-in for a deployment: the election account, the raw data
/// of every voter PDA keyed by wallet, and the notifications in the order
/// they were emitted.
pub struct Deployment {
    pub admin: Pubkey,
    pub election: Election,
    pub voter_accounts: BTreeMap<Pubkey, Vec<u8>>,
    pub log: Vec<Notification>,
}

impl Deployment {
    pub fn new() -> Self {
        let admin = Pubkey::new_unique();
        Self {
            admin,
            election: Election::new(admin, 254),
            voter_accounts: BTreeMap::new(),
            log: Vec::new(),
        }
    }

    pub fn register_party(&mut self, caller: Pubkey, name: &str) -> Result<()> {
        let notification = self.election.register_party(&caller, name.to_string())?;
        self.log.push(notification);
        Ok(())
    }

    pub fn register_voter(&mut self, caller: Pubkey, age: u32) -> Result<()> {
        // Mirrors the transaction: the account is only kept if the call succeeds.
        let mut record = self.voter_account(&caller)?;
        self.election.register_voter(&caller, &mut record, age)?;

        let data = self
            .voter_accounts
            .entry(caller)
            .or_insert_with(|| vec![0; 8 + Voter::INIT_SPACE]);
        record.write(data)
    }

    pub fn start_voting(&mut self, caller: Pubkey) -> Result<()> {
        let notification = self.election.start_voting(&caller)?;
        self.log.push(notification);
        Ok(())
    }

    pub fn end_voting(&mut self, caller: Pubkey) -> Result<()> {
        let notification = self.election.end_voting(&caller)?;
        self.log.push(notification);
        Ok(())
    }

    pub fn cast_vote(&mut self, caller: Pubkey, party_index: u32) -> Result<()> {
        let mut record = self.voter_account(&caller)?;
        let notification = self
            .election
            .cast_vote(&caller, &mut record, party_index)?;

        // a successful vote implies a registered, hence existing, account
        let data = self
            .voter_accounts
            .get_mut(&caller)
            .ok_or(ErrorCode::NotRegistered)?;
        record.write(data)?;
        self.log.push(notification);
        Ok(())
    }

    /// Decodes the voter PDA of `address` the way `get_voter` does.
    pub fn voter_account(&self, address: &Pubkey) -> Result<Voter> {
        let data = self
            .voter_accounts
            .get(address)
            .map(Vec::as_slice)
            .unwrap_or_default();
        Voter::read(*address, data)
    }

    pub fn voter(&self, address: &Pubkey) -> Voter {
        self.voter_account(address).unwrap()
    }
}

pub fn assert_error(result: Result<()>, code: ErrorCode) {
    assert_eq!(result.unwrap_err(), anchor_lang::error::Error::from(code));
}
