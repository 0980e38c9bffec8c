use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteReplyError {
    #[error("Thread not found")]
    ThreadNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Reply not found")]
    ReplyNotFound,

    #[error("You are not the owner of this reply")]
    NotReplyOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl DeleteReplyError {
    pub fn code(&self) -> &'static str {
        match self {
            DeleteReplyError::ThreadNotFound => "THREAD.NOT_FOUND",
            DeleteReplyError::CommentNotFound => "COMMENT.NOT_FOUND",
            DeleteReplyError::ReplyNotFound => "REPLY.NOT_FOUND",
            DeleteReplyError::NotReplyOwner => "DELETE_REPLY_USE_CASE.USER_IS_NOT_REPLY_OWNER",
            DeleteReplyError::RepositoryError(_) => "INTERNAL_ERROR",
        }
    }
}

#[async_trait]
pub trait DeleteReplyUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> Result<(), DeleteReplyError>;
}
