use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    thread::application::domain::entities::{AddedThread, CreateThread, Thread},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ThreadRepositoryError {
    #[error("Thread not found")]
    ThreadNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(
        &self,
        owner: &UserId,
        data: CreateThread,
    ) -> Result<AddedThread, ThreadRepositoryError>;

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<Thread, ThreadRepositoryError>;

    /// Fails with `ThreadNotFound` when no thread has this id.
    async fn verify_thread_availability(&self, thread_id: &str)
        -> Result<(), ThreadRepositoryError>;
}
