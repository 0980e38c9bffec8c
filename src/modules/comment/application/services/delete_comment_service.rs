use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::ports::{
        incoming::use_cases::{DeleteCommentError, DeleteCommentUseCase},
        outgoing::{CommentRepository, CommentRepositoryError},
    },
    thread::application::ports::outgoing::{ThreadRepository, ThreadRepositoryError},
};

pub struct DeleteCommentService<C, T>
where
    C: CommentRepository + Send + Sync,
    T: ThreadRepository + Send + Sync,
{
    comment_repository: C,
    thread_repository: T,
}

impl<C, T> DeleteCommentService<C, T>
where
    C: CommentRepository + Send + Sync,
    T: ThreadRepository + Send + Sync,
{
    pub fn new(comment_repository: C, thread_repository: T) -> Self {
        Self {
            comment_repository,
            thread_repository,
        }
    }
}

fn map_comment_error(e: CommentRepositoryError) -> DeleteCommentError {
    match e {
        CommentRepositoryError::CommentNotFound => DeleteCommentError::CommentNotFound,
        CommentRepositoryError::DatabaseError(msg) => DeleteCommentError::RepositoryError(msg),
    }
}

#[async_trait]
impl<C, T> DeleteCommentUseCase for DeleteCommentService<C, T>
where
    C: CommentRepository + Send + Sync,
    T: ThreadRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        thread_id: &str,
        comment_id: &str,
    ) -> Result<(), DeleteCommentError> {
        self.thread_repository
            .verify_thread_availability(thread_id)
            .await
            .map_err(|e| match e {
                ThreadRepositoryError::ThreadNotFound => DeleteCommentError::ThreadNotFound,
                ThreadRepositoryError::DatabaseError(msg) => {
                    DeleteCommentError::RepositoryError(msg)
                }
            })?;

        self.comment_repository
            .verify_comment_availability(comment_id)
            .await
            .map_err(map_comment_error)?;

        let owner = self
            .comment_repository
            .verify_comment_owner(comment_id)
            .await
            .map_err(map_comment_error)?;

        if owner != user_id {
            tracing::warn!(
                comment_id = %comment_id,
                user_id = %user_id,
                "Refused to delete a comment owned by another user"
            );
            return Err(DeleteCommentError::NotCommentOwner);
        }

        self.comment_repository
            .delete_comment(comment_id)
            .await
            .map_err(map_comment_error)
    }
}
