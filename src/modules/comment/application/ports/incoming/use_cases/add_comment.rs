use async_trait::async_trait;
use serde_json::Value;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::domain::entities::{AddedComment, CreateCommentError},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddCommentError {
    #[error(transparent)]
    InvalidPayload(#[from] CreateCommentError),

    #[error("Thread not found")]
    ThreadNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl AddCommentError {
    pub fn code(&self) -> &'static str {
        match self {
            AddCommentError::InvalidPayload(e) => e.code(),
            AddCommentError::ThreadNotFound => "THREAD.NOT_FOUND",
            AddCommentError::RepositoryError(_) => "INTERNAL_ERROR",
        }
    }
}

#[async_trait]
pub trait AddCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        thread_id: &str,
        payload: Value,
    ) -> Result<AddedComment, AddCommentError>;
}
