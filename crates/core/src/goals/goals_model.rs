//! Goals domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{EntityKind, Error, Result};
use crate::people::Person;

/// Domain model representing a goal.
///
/// `people` holds the names of registered people in registration order; the
/// people themselves are owned by the people registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    pub name: String,
    pub item: String,
    pub amount: i64,
    pub donations: i64,
    pub people: Vec<String>,
}

impl Goal {
    pub fn add_person(&mut self, person_name: impl Into<String>) {
        self.people.push(person_name.into());
    }

    /// Donation total after adding `amount`, without applying it.
    pub fn donations_after(&self, amount: i64) -> Result<i64> {
        self.donations
            .checked_add(amount)
            .ok_or_else(|| Error::counter_overflow(EntityKind::Goal, &self.name, "donations"))
    }

    pub fn add_donation(&mut self, amount: i64) -> Result<()> {
        self.donations = self.donations_after(amount)?;
        Ok(())
    }
}

impl From<NewGoal> for Goal {
    fn from(new_goal: NewGoal) -> Self {
        Goal {
            name: new_goal.name,
            item: new_goal.item,
            amount: new_goal.amount,
            donations: 0,
            people: Vec::new(),
        }
    }
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewGoal {
    pub name: String,
    pub item: String,
    pub amount: i64,
}

/// Goal snapshot with its roster resolved to person records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalWithPeople {
    pub name: String,
    pub item: String,
    pub amount: i64,
    pub donations: i64,
    pub people: Vec<Person>,
}

impl GoalWithPeople {
    pub fn new(goal: &Goal, people: Vec<Person>) -> Self {
        Self {
            name: goal.name.clone(),
            item: goal.item.clone(),
            amount: goal.amount,
            donations: goal.donations,
            people,
        }
    }
}
