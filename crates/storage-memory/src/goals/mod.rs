mod repository;

pub use repository::GoalRepository;
