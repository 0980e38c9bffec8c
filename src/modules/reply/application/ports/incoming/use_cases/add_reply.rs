use async_trait::async_trait;
use serde_json::Value;

use crate::{
    auth::application::domain::entities::UserId,
    reply::application::domain::entities::{AddedReply, CreateReplyError},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddReplyError {
    #[error(transparent)]
    InvalidPayload(#[from] CreateReplyError),

    #[error("Thread not found")]
    ThreadNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl AddReplyError {
    pub fn code(&self) -> &'static str {
        match self {
            AddReplyError::InvalidPayload(e) => e.code(),
            AddReplyError::ThreadNotFound => "THREAD.NOT_FOUND",
            AddReplyError::CommentNotFound => "COMMENT.NOT_FOUND",
            AddReplyError::RepositoryError(_) => "INTERNAL_ERROR",
        }
    }
}

#[async_trait]
pub trait AddReplyUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        thread_id: &str,
        comment_id: &str,
        payload: Value,
    ) -> Result<AddedReply, AddReplyError>;
}
