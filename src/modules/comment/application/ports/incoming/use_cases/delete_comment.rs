use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("Thread not found")]
    ThreadNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("You are not the owner of this comment")]
    NotCommentOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl DeleteCommentError {
    pub fn code(&self) -> &'static str {
        match self {
            DeleteCommentError::ThreadNotFound => "THREAD.NOT_FOUND",
            DeleteCommentError::CommentNotFound => "COMMENT.NOT_FOUND",
            DeleteCommentError::NotCommentOwner => {
                "DELETE_COMMENT_USE_CASE.USER_IS_NOT_COMMENT_OWNER"
            }
            DeleteCommentError::RepositoryError(_) => "INTERNAL_ERROR",
        }
    }
}

#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        thread_id: &str,
        comment_id: &str,
    ) -> Result<(), DeleteCommentError>;
}
