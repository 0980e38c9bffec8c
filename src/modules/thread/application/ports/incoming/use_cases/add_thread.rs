use async_trait::async_trait;
use serde_json::Value;

use crate::{
    auth::application::domain::entities::UserId,
    thread::application::domain::entities::{AddedThread, CreateThreadError},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddThreadError {
    #[error(transparent)]
    InvalidPayload(#[from] CreateThreadError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl AddThreadError {
    pub fn code(&self) -> &'static str {
        match self {
            AddThreadError::InvalidPayload(e) => e.code(),
            AddThreadError::RepositoryError(_) => "INTERNAL_ERROR",
        }
    }
}

#[async_trait]
pub trait AddThreadUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, payload: Value) -> Result<AddedThread, AddThreadError>;
}
