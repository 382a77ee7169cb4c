use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] mongodb::error::Error),
    #[error("Invalid object id: {0}")]
    InvalidObjectId(#[from] mongodb::bson::oid::Error),
    #[error("Malformed document in '{collection}': {message}")]
    MalformedDocument {
        collection: &'static str,
        message: String,
    },
    #[error("Seed data error: {0}")]
    SeedError(#[from] serde_json::Error),
}
