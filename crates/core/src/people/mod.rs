//! People module - domain models, services, and traits.

mod people_model;
mod people_service;
mod people_traits;

pub use people_model::{DonationReceipt, NewDonation, NewPerson, Person};
pub use people_service::PersonService;
pub use people_traits::{PersonRepositoryTrait, PersonServiceTrait};
