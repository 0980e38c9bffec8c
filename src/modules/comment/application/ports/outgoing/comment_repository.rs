use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::domain::entities::{AddedComment, CreateComment, ThreadComment},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Comment not found")]
    CommentNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(
        &self,
        owner: &UserId,
        thread_id: &str,
        data: CreateComment,
    ) -> Result<AddedComment, CommentRepositoryError>;

    /// Soft delete: flips `is_deleted`, the row is kept.
    async fn delete_comment(&self, comment_id: &str) -> Result<(), CommentRepositoryError>;

    /// Fails with `CommentNotFound` when the comment is absent or already deleted.
    async fn verify_comment_availability(
        &self,
        comment_id: &str,
    ) -> Result<(), CommentRepositoryError>;

    async fn verify_comment_owner(&self, comment_id: &str) -> Result<UserId, CommentRepositoryError>;

    /// Every comment of the thread, oldest first, deleted ones included.
    async fn get_thread_comments(
        &self,
        thread_id: &str,
    ) -> Result<Vec<ThreadComment>, CommentRepositoryError>;
}
