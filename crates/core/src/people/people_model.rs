//! People domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{EntityKind, Error, Result};

/// Domain model representing a registered person.
///
/// `goal` is the name of the owning goal. It is set at creation and never
/// changes; serializing it by name keeps goal/person snapshots acyclic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub goal: String,
    pub winstreak: i64,
    pub donations: i64,
}

impl Person {
    /// Donation total after adding `amount`, without applying it.
    pub fn donations_after(&self, amount: i64) -> Result<i64> {
        self.donations
            .checked_add(amount)
            .ok_or_else(|| Error::counter_overflow(EntityKind::Person, &self.name, "donations"))
    }

    pub fn add_donation(&mut self, amount: i64) -> Result<()> {
        self.donations = self.donations_after(amount)?;
        Ok(())
    }

    /// Applies a game win and returns the new streak.
    ///
    /// A positive streak grows by one; a zero or negative streak restarts at one.
    /// On overflow the streak is left as it was.
    pub fn record_win(&mut self) -> Result<i64> {
        let next = if self.winstreak > 0 {
            self.winstreak
                .checked_add(1)
                .ok_or_else(|| Error::counter_overflow(EntityKind::Person, &self.name, "winstreak"))?
        } else {
            1
        };
        self.winstreak = next;
        Ok(next)
    }
}

impl From<NewPerson> for Person {
    fn from(new_person: NewPerson) -> Self {
        Person {
            name: new_person.name,
            goal: new_person.goal_name,
            winstreak: 0,
            donations: 0,
        }
    }
}

/// Input model for registering a person against a goal
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewPerson {
    pub name: String,
    pub goal_name: String,
}

/// Input model for a donation made by a person
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewDonation {
    pub person_name: String,
    pub amount: i64,
}

/// Counters after a donation was applied to a person and their goal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DonationReceipt {
    pub person_name: String,
    pub goal_name: String,
    pub amount: i64,
    pub person_donations: i64,
    pub goal_donations: i64,
}
