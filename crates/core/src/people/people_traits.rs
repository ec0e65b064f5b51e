use crate::errors::Result;
use crate::people::people_model::{DonationReceipt, NewDonation, NewPerson, Person};
use async_trait::async_trait;

/// Trait for people repository operations
#[async_trait]
pub trait PersonRepositoryTrait: Send + Sync {
    fn load_people(&self) -> Result<Vec<Person>>;
    fn get_person(&self, person_name: &str) -> Result<Person>;
    /// Registers the person and appends them to their goal's roster.
    async fn insert_new_person(&self, new_person: NewPerson) -> Result<Person>;
    /// Adds the amount to the person's and the goal's counters together.
    async fn apply_donation(&self, donation: NewDonation) -> Result<DonationReceipt>;
}

/// Trait for people service operations
#[async_trait]
pub trait PersonServiceTrait: Send + Sync {
    fn get_people(&self) -> Result<Vec<Person>>;
    fn get_person(&self, person_name: &str) -> Result<Person>;
    async fn create_person(&self, new_person: NewPerson) -> Result<Person>;
    async fn donate(&self, donation: NewDonation) -> Result<DonationReceipt>;
}
