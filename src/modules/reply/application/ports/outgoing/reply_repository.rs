use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    reply::application::domain::entities::{AddedReply, CreateReply, ThreadReply},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReplyRepositoryError {
    #[error("Reply not found")]
    ReplyNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(
        &self,
        owner: &UserId,
        thread_id: &str,
        comment_id: &str,
        data: CreateReply,
    ) -> Result<AddedReply, ReplyRepositoryError>;

    /// Soft delete: flips `is_deleted`, the row is kept.
    async fn delete_reply(&self, reply_id: &str) -> Result<(), ReplyRepositoryError>;

    /// Fails with `ReplyNotFound` when the reply is absent or already deleted.
    async fn verify_reply_availability(&self, reply_id: &str) -> Result<(), ReplyRepositoryError>;

    async fn verify_reply_owner(&self, reply_id: &str) -> Result<UserId, ReplyRepositoryError>;

    /// Every reply under any comment of the thread, oldest first, deleted ones included.
    async fn get_thread_replies(
        &self,
        thread_id: &str,
    ) -> Result<Vec<ThreadReply>, ReplyRepositoryError>;
}
