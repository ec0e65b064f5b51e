mod repository;

pub use repository::PersonRepository;
