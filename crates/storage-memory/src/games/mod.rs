mod repository;

pub use repository::GameRepository;
