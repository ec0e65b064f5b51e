use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::people::people_model::{DonationReceipt, NewDonation, NewPerson, Person};
use crate::people::people_traits::{PersonRepositoryTrait, PersonServiceTrait};
use async_trait::async_trait;
use std::sync::Arc;

pub struct PersonService {
    person_repo: Arc<dyn PersonRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl PersonService {
    pub fn new(person_repo: Arc<dyn PersonRepositoryTrait>) -> Self {
        PersonService {
            person_repo,
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    /// Sets the domain event sink for this service.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }
}

#[async_trait]
impl PersonServiceTrait for PersonService {
    fn get_people(&self) -> Result<Vec<Person>> {
        self.person_repo.load_people()
    }

    fn get_person(&self, person_name: &str) -> Result<Person> {
        self.person_repo.get_person(person_name)
    }

    async fn create_person(&self, new_person: NewPerson) -> Result<Person> {
        let person = self
            .person_repo
            .insert_new_person(new_person)
            .await
            .inspect_err(|e| log::warn!("Person registration rejected: {}", e))?;
        log::info!("Registered '{}' under goal '{}'", person.name, person.goal);
        self.event_sink
            .emit(DomainEvent::person_created(&person.name, &person.goal));
        Ok(person)
    }

    async fn donate(&self, donation: NewDonation) -> Result<DonationReceipt> {
        if donation.amount < 0 {
            // Accepted as-is; negative amounts lower both totals.
            log::debug!(
                "Negative donation {} by '{}'",
                donation.amount,
                donation.person_name
            );
        }
        let receipt = self
            .person_repo
            .apply_donation(donation)
            .await
            .inspect_err(|e| log::warn!("Donation rejected: {}", e))?;
        log::info!(
            "Donation of {} by '{}' (goal '{}' now at {})",
            receipt.amount,
            receipt.person_name,
            receipt.goal_name,
            receipt.goal_donations
        );
        self.event_sink.emit(DomainEvent::DonationMade {
            person_name: receipt.person_name.clone(),
            goal_name: receipt.goal_name.clone(),
            amount: receipt.amount,
            goal_donations: receipt.goal_donations,
        });
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{EntityKind, Error};
    use crate::events::MockDomainEventSink;
    use std::sync::RwLock;

    // ============== Mock Repository ==============

    /// Tracks a single goal's total next to the people list.
    struct MockPersonRepository {
        goal_name: String,
        goal_donations: RwLock<i64>,
        people: RwLock<Vec<Person>>,
    }

    impl MockPersonRepository {
        fn new(goal_name: &str) -> Self {
            Self {
                goal_name: goal_name.to_string(),
                goal_donations: RwLock::new(0),
                people: RwLock::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PersonRepositoryTrait for MockPersonRepository {
        fn load_people(&self) -> Result<Vec<Person>> {
            Ok(self.people.read().unwrap().clone())
        }

        fn get_person(&self, person_name: &str) -> Result<Person> {
            self.people
                .read()
                .unwrap()
                .iter()
                .find(|p| p.name == person_name)
                .cloned()
                .ok_or_else(|| Error::not_found(EntityKind::Person, person_name))
        }

        async fn insert_new_person(&self, new_person: NewPerson) -> Result<Person> {
            let mut people = self.people.write().unwrap();
            if people.iter().any(|p| p.name == new_person.name) {
                return Err(Error::already_exists(EntityKind::Person, new_person.name));
            }
            if new_person.goal_name != self.goal_name {
                return Err(Error::not_found(EntityKind::Goal, new_person.goal_name));
            }
            let person = Person::from(new_person);
            people.push(person.clone());
            Ok(person)
        }

        async fn apply_donation(&self, donation: NewDonation) -> Result<DonationReceipt> {
            let mut people = self.people.write().unwrap();
            let person = people
                .iter_mut()
                .find(|p| p.name == donation.person_name)
                .ok_or_else(|| Error::not_found(EntityKind::Person, &donation.person_name))?;
            person.add_donation(donation.amount)?;
            let mut goal_donations = self.goal_donations.write().unwrap();
            *goal_donations += donation.amount;
            Ok(DonationReceipt {
                person_name: person.name.clone(),
                goal_name: person.goal.clone(),
                amount: donation.amount,
                person_donations: person.donations,
                goal_donations: *goal_donations,
            })
        }
    }

    fn service_with_sink() -> (PersonService, Arc<MockDomainEventSink>) {
        let sink = Arc::new(MockDomainEventSink::new());
        let service = PersonService::new(Arc::new(MockPersonRepository::new("Trees")))
            .with_event_sink(sink.clone());
        (service, sink)
    }

    fn new_person(name: &str, goal_name: &str) -> NewPerson {
        NewPerson {
            name: name.to_string(),
            goal_name: goal_name.to_string(),
        }
    }

    #[tokio::test]
    async fn person_under_unknown_goal_is_not_registered() {
        let (service, sink) = service_with_sink();

        let err = service
            .create_person(new_person("Bob", "Ghost"))
            .await
            .unwrap_err();

        assert_eq!(err, Error::not_found(EntityKind::Goal, "Ghost"));
        assert!(service.get_people().unwrap().is_empty());
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn donation_emits_event_with_goal_total() {
        let (service, sink) = service_with_sink();
        service
            .create_person(new_person("Alice", "Trees"))
            .await
            .unwrap();

        let receipt = service
            .donate(NewDonation {
                person_name: "Alice".to_string(),
                amount: 30,
            })
            .await
            .unwrap();

        assert_eq!(receipt.goal_donations, 30);
        assert_eq!(receipt.person_donations, 30);
        assert_eq!(
            sink.events().last(),
            Some(&DomainEvent::DonationMade {
                person_name: "Alice".to_string(),
                goal_name: "Trees".to_string(),
                amount: 30,
                goal_donations: 30,
            })
        );
    }

    #[tokio::test]
    async fn donation_by_unknown_person_fails() {
        let (service, sink) = service_with_sink();

        let err = service
            .donate(NewDonation {
                person_name: "Nobody".to_string(),
                amount: 5,
            })
            .await
            .unwrap_err();

        assert_eq!(err, Error::not_found(EntityKind::Person, "Nobody"));
        assert!(sink.is_empty());
    }
}
