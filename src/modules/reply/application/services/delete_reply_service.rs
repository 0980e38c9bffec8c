use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::ports::outgoing::{CommentRepository, CommentRepositoryError},
    reply::application::ports::{
        incoming::use_cases::{DeleteReplyError, DeleteReplyUseCase},
        outgoing::{ReplyRepository, ReplyRepositoryError},
    },
    thread::application::ports::outgoing::{ThreadRepository, ThreadRepositoryError},
};

pub struct DeleteReplyService<R, C, T>
where
    R: ReplyRepository + Send + Sync,
    C: CommentRepository + Send + Sync,
    T: ThreadRepository + Send + Sync,
{
    reply_repository: R,
    comment_repository: C,
    thread_repository: T,
}

impl<R, C, T> DeleteReplyService<R, C, T>
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

fn map_reply_error(e: ReplyRepositoryError) -> DeleteReplyError {
    match e {
        ReplyRepositoryError::ReplyNotFound => DeleteReplyError::ReplyNotFound,
        ReplyRepositoryError::DatabaseError(msg) => DeleteReplyError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R, C, T> DeleteReplyUseCase for DeleteReplyService<R, C, T>
where
    R: ReplyRepository + Send + Sync,
    C: CommentRepository + Send + Sync,
    T: ThreadRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> Result<(), DeleteReplyError> {
        self.thread_repository
            .verify_thread_availability(thread_id)
            .await
            .map_err(|e| match e {
                ThreadRepositoryError::ThreadNotFound => DeleteReplyError::ThreadNotFound,
                ThreadRepositoryError::DatabaseError(msg) => DeleteReplyError::RepositoryError(msg),
            })?;

        self.comment_repository
            .verify_comment_availability(comment_id)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::CommentNotFound => DeleteReplyError::CommentNotFound,
                CommentRepositoryError::DatabaseError(msg) => {
                    DeleteReplyError::RepositoryError(msg)
                }
            })?;

        self.reply_repository
            .verify_reply_availability(reply_id)
            .await
            .map_err(map_reply_error)?;

        let owner = self
            .reply_repository
            .verify_reply_owner(reply_id)
            .await
            .map_err(map_reply_error)?;

        if owner != user_id {
            tracing::warn!(
                reply_id = %reply_id,
                user_id = %user_id,
                "Refused to delete a reply owned by another user"
            );
            return Err(DeleteReplyError::NotReplyOwner);
        }

        self.reply_repository
            .delete_reply(reply_id)
            .await
            .map_err(map_reply_error)
    }
}
