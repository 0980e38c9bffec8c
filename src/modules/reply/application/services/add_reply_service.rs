use async_trait::async_trait;
use serde_json::Value;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::ports::outgoing::{CommentRepository, CommentRepositoryError},
    reply::application::{
        domain::entities::{AddedReply, CreateReply},
        ports::{
            incoming::use_cases::{AddReplyError, AddReplyUseCase},
            outgoing::ReplyRepository,
        },
    },
    thread::application::ports::outgoing::{ThreadRepository, ThreadRepositoryError},
};

pub struct AddReplyService<R, C, T>
where
    R: ReplyRepository + Send + Sync,
    C: CommentRepository + Send + Sync,
    T: ThreadRepository + Send + Sync,
{
    reply_repository: R,
    comment_repository: C,
    thread_repository: T,
}

impl<R, C, T> AddReplyService<R, C, T>
where
    R: ReplyRepository + Send + Sync,
    C: CommentRepository + Send + Sync,
    T: ThreadRepository + Send + Sync,
{
    pub fn new(reply_repository: R, comment_repository: C, thread_repository: T) -> Self {
        Self {
            reply_repository,
            comment_repository,
            thread_repository,
        }
    }
}

#[async_trait]
impl<R, C, T> AddReplyUseCase for AddReplyService<R, C, T>
where
    R: ReplyRepository + Send + Sync,
    C: CommentRepository + Send + Sync,
    T: ThreadRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        thread_id: &str,
        comment_id: &str,
        payload: Value,
    ) -> Result<AddedReply, AddReplyError> {
        let create_reply = CreateReply::from_payload(&payload)?;

        self.thread_repository
            .verify_thread_availability(thread_id)
            .await
            .map_err(|e| match e {
                ThreadRepositoryError::ThreadNotFound => AddReplyError::ThreadNotFound,
                ThreadRepositoryError::DatabaseError(msg) => AddReplyError::RepositoryError(msg),
            })?;

        self.comment_repository
            .verify_comment_availability(comment_id)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::CommentNotFound => AddReplyError::CommentNotFound,
                CommentRepositoryError::DatabaseError(msg) => AddReplyError::RepositoryError(msg),
            })?;

        self.reply_repository
            .add_reply(&owner, thread_id, comment_id, create_reply)
            .await
            .map_err(|e| AddReplyError::RepositoryError(e.to_string()))
    }
}
