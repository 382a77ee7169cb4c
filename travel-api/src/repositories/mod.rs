mod memory_repo;
mod mongo_repo;
mod repo_error;
mod travel_repo;

pub use memory_repo::InMemoryTravelRepository;
pub use mongo_repo::MongoTravelRepository;
pub use repo_error::RepositoryError;
pub use travel_repo::TravelRepository;
