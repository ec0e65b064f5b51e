use donation_game_core::people::{
    DonationReceipt, NewDonation, NewPerson, Person, PersonRepositoryTrait,
};
use donation_game_core::{EntityKind, Error, Result};

use crate::db::{read_store, MemoryStore, WriteHandle};
use async_trait::async_trait;

pub struct PersonRepository {
    store: MemoryStore,
    writer: WriteHandle,
}

impl PersonRepository {
    pub fn new(store: MemoryStore, writer: WriteHandle) -> Self {
        PersonRepository { store, writer }
    }
}

#[async_trait]
impl PersonRepositoryTrait for PersonRepository {
    fn load_people(&self) -> Result<Vec<Person>> {
        let registries = read_store(&self.store)?;
        Ok(registries.people.iter().cloned().collect())
    }

    fn get_person(&self, person_name: &str) -> Result<Person> {
        read_store(&self.store)?
            .people
            .get(person_name)
            .cloned()
            .ok_or_else(|| Error::not_found(EntityKind::Person, person_name))
    }

    async fn insert_new_person(&self, new_person: NewPerson) -> Result<Person> {
        self.writer
            .exec(move |registries| {
                if registries.people.contains(&new_person.name) {
                    return Err(Error::already_exists(EntityKind::Person, new_person.name));
                }
                let goal = registries
                    .goals
                    .get_mut(&new_person.goal_name)
                    .ok_or_else(|| Error::not_found(EntityKind::Goal, &new_person.goal_name))?;

                let person = Person::from(new_person);
                goal.add_person(&person.name);
                registries
                    .people
                    .insert(person.clone())
                    .map_err(|rejected| Error::already_exists(EntityKind::Person, rejected.name))?;
                Ok(person)
            })
            .await
    }

    async fn apply_donation(&self, donation: NewDonation) -> Result<DonationReceipt> {
        self.writer
            .exec(move |registries| {
                let person = registries
                    .people
                    .get_mut(&donation.person_name)
                    .ok_or_else(|| Error::not_found(EntityKind::Person, &donation.person_name))?;
                let goal = registries
                    .goals
                    .get_mut(&person.goal)
                    .ok_or_else(|| Error::not_found(EntityKind::Goal, &person.goal))?;

                let person_total = person.donations_after(donation.amount)?;
                let goal_total = goal.donations_after(donation.amount)?;
                person.donations = person_total;
                goal.donations = goal_total;

                Ok(DonationReceipt {
                    person_name: person.name.clone(),
                    goal_name: goal.name.clone(),
                    amount: donation.amount,
                    person_donations: person.donations,
                    goal_donations: goal.donations,
                })
            })
            .await
    }
}
