use async_trait::async_trait;
use serde_json::Value;

use crate::{
    auth::application::domain::entities::UserId,
    thread::application::{
        domain::entities::{AddedThread, CreateThread},
        ports::{
            incoming::use_cases::{AddThreadError, AddThreadUseCase},
            outgoing::ThreadRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct AddThreadService<T>
where
    T: ThreadRepository + Send + Sync,
{
    thread_repository: T,
}

impl<T> AddThreadService<T>
where
    T: ThreadRepository + Send + Sync,
{
    pub fn new(thread_repository: T) -> Self {
        Self { thread_repository }
    }
}

#[async_trait]
impl<T> AddThreadUseCase for AddThreadService<T>
where
    T: ThreadRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, payload: Value) -> Result<AddedThread, AddThreadError> {
        let create_thread = CreateThread::from_payload(&payload)?;

        self.thread_repository
            .add_thread(&owner, create_thread)
            .await
            .map_err(|e| AddThreadError::RepositoryError(e.to_string()))
    }
}
