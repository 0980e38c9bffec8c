use async_trait::async_trait;
use mockall::mock;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::comment::application::domain::entities::{AddedComment, CreateComment, ThreadComment};
use crate::comment::application::ports::outgoing::{CommentRepository, CommentRepositoryError};
use crate::reply::application::domain::entities::{AddedReply, CreateReply, ThreadReply};
use crate::reply::application::ports::outgoing::{ReplyRepository, ReplyRepositoryError};
use crate::thread::application::domain::entities::{AddedThread, CreateThread, Thread};
use crate::thread::application::ports::outgoing::{ThreadRepository, ThreadRepositoryError};

mock! {
    pub ThreadRepo {}

    #[async_trait]
    impl ThreadRepository for ThreadRepo {
        async fn add_thread(
            &self,
            owner: &UserId,
            data: CreateThread,
        ) -> Result<AddedThread, ThreadRepositoryError>;

        async fn get_thread_by_id(&self, thread_id: &str) -> Result<Thread, ThreadRepositoryError>;

        async fn verify_thread_availability(
            &self,
            thread_id: &str,
        ) -> Result<(), ThreadRepositoryError>;
    }
}

mock! {
    pub CommentRepo {}

    #[async_trait]
    impl CommentRepository for CommentRepo {
        async fn add_comment(
            &self,
            owner: &UserId,
            thread_id: &str,
            data: CreateComment,
        ) -> Result<AddedComment, CommentRepositoryError>;

        async fn delete_comment(&self, comment_id: &str) -> Result<(), CommentRepositoryError>;

        async fn verify_comment_availability(
            &self,
            comment_id: &str,
        ) -> Result<(), CommentRepositoryError>;

        async fn verify_comment_owner(
            &self,
            comment_id: &str,
        ) -> Result<UserId, CommentRepositoryError>;

        async fn get_thread_comments(
            &self,
            thread_id: &str,
        ) -> Result<Vec<ThreadComment>, CommentRepositoryError>;
    }
}

mock! {
    pub ReplyRepo {}

    #[async_trait]
    impl ReplyRepository for ReplyRepo {
        async fn add_reply(
            &self,
            owner: &UserId,
            thread_id: &str,
            comment_id: &str,
            data: CreateReply,
        ) -> Result<AddedReply, ReplyRepositoryError>;

        async fn delete_reply(&self, reply_id: &str) -> Result<(), ReplyRepositoryError>;

        async fn verify_reply_availability(
            &self,
            reply_id: &str,
        ) -> Result<(), ReplyRepositoryError>;

        async fn verify_reply_owner(&self, reply_id: &str) -> Result<UserId, ReplyRepositoryError>;

        async fn get_thread_replies(
            &self,
            thread_id: &str,
        ) -> Result<Vec<ThreadReply>, ReplyRepositoryError>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn get_username_by_id(&self, user_id: &UserId) -> Result<String, UserRepositoryError>;
    }
}
