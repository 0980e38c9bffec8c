use async_trait::async_trait;
use serde_json::Value;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::{
        domain::entities::{AddedComment, CreateComment},
        ports::{
            incoming::use_cases::{AddCommentError, AddCommentUseCase},
            outgoing::CommentRepository,
        },
    },
    thread::application::ports::outgoing::{ThreadRepository, ThreadRepositoryError},
};

pub struct AddCommentService<C, T>
where
    C: CommentRepository + Send + Sync,
    T: ThreadRepository + Send + Sync,
{
    comment_repository: C,
    thread_repository: T,
}

impl<C, T> AddCommentService<C, T>
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

#[async_trait]
impl<C, T> AddCommentUseCase for AddCommentService<C, T>
where
    C: CommentRepository + Send + Sync,
    T: ThreadRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        thread_id: &str,
        payload: Value,
    ) -> Result<AddedComment, AddCommentError> {
        let create_comment = CreateComment::from_payload(&payload)?;

        self.thread_repository
            .verify_thread_availability(thread_id)
            .await
            .map_err(|e| match e {
                ThreadRepositoryError::ThreadNotFound => AddCommentError::ThreadNotFound,
                ThreadRepositoryError::DatabaseError(msg) => AddCommentError::RepositoryError(msg),
            })?;

        self.comment_repository
            .add_comment(&owner, thread_id, create_comment)
            .await
            .map_err(|e| AddCommentError::RepositoryError(e.to_string()))
    }
}
