use async_trait::async_trait;

use crate::{
    auth::application::{
        domain::entities::UserId,
        ports::outgoing::{UserRepository, UserRepositoryError},
    },
    comment::application::ports::outgoing::CommentRepository,
    reply::application::ports::outgoing::ReplyRepository,
    thread::application::{
        domain::thread_detail::{
            DetailComment, DetailReply, DetailThread, ThreadDetail, ThreadDetailPayload,
            ThreadDetailView,
        },
        ports::{
            incoming::use_cases::{GetThreadDetailError, GetThreadDetailUseCase},
            outgoing::{ThreadRepository, ThreadRepositoryError},
        },
    },
};

pub struct GetThreadDetailService<T, C, R, U>
where
    T: ThreadRepository + Send + Sync,
    C: CommentRepository + Send + Sync,
    R: ReplyRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    thread_repository: T,
    comment_repository: C,
    reply_repository: R,
    user_repository: U,
}

impl<T, C, R, U> GetThreadDetailService<T, C, R, U>
where
    T: ThreadRepository + Send + Sync,
    C: CommentRepository + Send + Sync,
    R: ReplyRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    pub fn new(
        thread_repository: T,
        comment_repository: C,
        reply_repository: R,
        user_repository: U,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
            user_repository,
        }
    }

    async fn username_of(&self, user_id: &UserId) -> Result<String, GetThreadDetailError> {
        self.user_repository
            .get_username_by_id(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => GetThreadDetailError::RepositoryError(
                    format!("Owner {} of a thread item has no user record", user_id),
                ),
                UserRepositoryError::DatabaseError(msg) => {
                    GetThreadDetailError::RepositoryError(msg)
                }
            })
    }
}

fn map_thread_error(e: ThreadRepositoryError) -> GetThreadDetailError {
    match e {
        ThreadRepositoryError::ThreadNotFound => GetThreadDetailError::ThreadNotFound,
        ThreadRepositoryError::DatabaseError(msg) => GetThreadDetailError::RepositoryError(msg),
    }
}

#[async_trait]
impl<T, C, R, U> GetThreadDetailUseCase for GetThreadDetailService<T, C, R, U>
where
    T: ThreadRepository + Send + Sync,
    C: CommentRepository + Send + Sync,
    R: ReplyRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    async fn execute(&self, thread_id: &str) -> Result<ThreadDetailView, GetThreadDetailError> {
        self.thread_repository
            .verify_thread_availability(thread_id)
            .await
            .map_err(map_thread_error)?;

        let thread = self
            .thread_repository
            .get_thread_by_id(thread_id)
            .await
            .map_err(map_thread_error)?;
        let thread = DetailThread {
            username: self.username_of(&thread.owner).await?,
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
        };

        let raw_comments = self
            .comment_repository
            .get_thread_comments(thread_id)
            .await
            .map_err(|e| GetThreadDetailError::RepositoryError(e.to_string()))?;
        let mut comments = Vec::with_capacity(raw_comments.len());
        for comment in raw_comments {
            comments.push(DetailComment {
                username: self.username_of(&comment.owner).await?,
                content: comment.displayed_content().to_string(),
                id: comment.id,
                date: comment.date,
            });
        }

        let raw_replies = self
            .reply_repository
            .get_thread_replies(thread_id)
            .await
            .map_err(|e| GetThreadDetailError::RepositoryError(e.to_string()))?;
        let mut replies = Vec::with_capacity(raw_replies.len());
        for reply in raw_replies {
            replies.push(DetailReply {
                username: self.username_of(&reply.owner).await?,
                content: reply.displayed_content().to_string(),
                id: reply.id,
                comment_id: reply.comment_id,
                date: reply.date,
            });
        }

        let detail = ThreadDetail::new(ThreadDetailPayload {
            thread: Some(thread),
            comments: Some(comments),
            replies: Some(replies),
        })?;

        Ok(detail.formatted_detail())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use mockall::predicate::*;
    use serde_json::json;

    use crate::{
        comment::application::{
            domain::entities::ThreadComment, ports::outgoing::CommentRepositoryError,
        },
        reply::application::domain::entities::ThreadReply,
        tests::support::mocks::{MockCommentRepo, MockReplyRepo, MockThreadRepo, MockUserRepo},
        thread::application::domain::entities::Thread,
    };

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 8, 8, 7, 19, 9).unwrap()
    }

    fn thread() -> Thread {
        Thread {
            id: "thread-123".to_string(),
            title: "sebuah thread".to_string(),
            body: "sebuah body thread".to_string(),
            date: date(),
            owner: UserId::from("user-123"),
        }
    }

    fn comment(id: &str, owner: &str, is_deleted: bool) -> ThreadComment {
        ThreadComment {
            id: id.to_string(),
            content: "sebuah comment".to_string(),
            date: date(),
            owner: UserId::from(owner),
            is_deleted,
        }
    }

    fn reply(id: &str, comment_id: &str, owner: &str, is_deleted: bool) -> ThreadReply {
        ThreadReply {
            id: id.to_string(),
            comment_id: comment_id.to_string(),
            content: "sebuah balasan".to_string(),
            date: date(),
            owner: UserId::from(owner),
            is_deleted,
        }
    }

    fn user_repo() -> MockUserRepo {
        let mut user_repository = MockUserRepo::new();
        user_repository
            .expect_get_username_by_id()
            .returning(|id| match id.value() {
                "user-123" => Ok("dicoding".to_string()),
                "user-456" => Ok("johndoe".to_string()),
                _ => Err(UserRepositoryError::UserNotFound),
            });
        user_repository
    }

    fn available_thread_repo() -> MockThreadRepo {
        let mut thread_repository = MockThreadRepo::new();
        thread_repository
            .expect_verify_thread_availability()
            .with(eq("thread-123"))
            .returning(|_| Ok(()));
        thread_repository
            .expect_get_thread_by_id()
            .with(eq("thread-123"))
            .returning(|_| Ok(thread()));
        thread_repository
    }

    #[tokio::test]
    async fn get_thread_detail_assembles_redacted_tree() {
        // Arrange
        let mut comment_repository = MockCommentRepo::new();
        comment_repository
            .expect_get_thread_comments()
            .with(eq("thread-123"))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    comment("comment-123", "user-456", false),
                    comment("comment-456", "user-123", true),
                ])
            });

        let mut reply_repository = MockReplyRepo::new();
        reply_repository
            .expect_get_thread_replies()
            .with(eq("thread-123"))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    reply("reply-123", "comment-123", "user-123", false),
                    reply("reply-456", "comment-123", "user-456", true),
                ])
            });

        let service = GetThreadDetailService::new(
            available_thread_repo(),
            comment_repository,
            reply_repository,
            user_repo(),
        );

        // Act
        let view = service.execute("thread-123").await.unwrap();

        // Assert
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            json!({
                "thread": {
                    "id": "thread-123",
                    "title": "sebuah thread",
                    "body": "sebuah body thread",
                    "date": "2021-08-08T07:19:09Z",
                    "username": "dicoding",
                    "comments": [
                        {
                            "id": "comment-123",
                            "username": "johndoe",
                            "date": "2021-08-08T07:19:09Z",
                            "content": "sebuah comment",
                            "replies": [
                                {
                                    "id": "reply-123",
                                    "content": "sebuah balasan",
                                    "date": "2021-08-08T07:19:09Z",
                                    "username": "dicoding"
                                },
                                {
                                    "id": "reply-456",
                                    "content": "**balasan telah dihapus**",
                                    "date": "2021-08-08T07:19:09Z",
                                    "username": "johndoe"
                                }
                            ]
                        },
                        {
                            "id": "comment-456",
                            "username": "dicoding",
                            "date": "2021-08-08T07:19:09Z",
                            "content": "**komentar telah dihapus**",
                            "replies": []
                        }
                    ]
                }
            })
        );
    }

    #[tokio::test]
    async fn get_thread_detail_of_empty_thread() {
        let mut comment_repository = MockCommentRepo::new();
        comment_repository
            .expect_get_thread_comments()
            .returning(|_| Ok(vec![]));
        let mut reply_repository = MockReplyRepo::new();
        reply_repository
            .expect_get_thread_replies()
            .returning(|_| Ok(vec![]));

        let service = GetThreadDetailService::new(
            available_thread_repo(),
            comment_repository,
            reply_repository,
            user_repo(),
        );

        let view = service.execute("thread-123").await.unwrap();

        assert_eq!(view.thread.username, "dicoding");
        assert!(view.thread.comments.is_empty());
    }

    #[tokio::test]
    async fn get_thread_detail_unknown_thread_is_not_found() {
        let mut thread_repository = MockThreadRepo::new();
        thread_repository
            .expect_verify_thread_availability()
            .returning(|_| Err(ThreadRepositoryError::ThreadNotFound));
        thread_repository.expect_get_thread_by_id().never();
        let mut comment_repository = MockCommentRepo::new();
        comment_repository.expect_get_thread_comments().never();
        let mut reply_repository = MockReplyRepo::new();
        reply_repository.expect_get_thread_replies().never();

        let service = GetThreadDetailService::new(
            thread_repository,
            comment_repository,
            reply_repository,
            MockUserRepo::new(),
        );

        let result = service.execute("thread-xxx").await;

        assert!(
            matches!(result, Err(GetThreadDetailError::ThreadNotFound)),
            "Expected ThreadNotFound, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn get_thread_detail_comment_store_failure_is_repository_error() {
        let mut comment_repository = MockCommentRepo::new();
        comment_repository
            .expect_get_thread_comments()
            .returning(|_| Err(CommentRepositoryError::DatabaseError("timeout".to_string())));
        let mut reply_repository = MockReplyRepo::new();
        reply_repository.expect_get_thread_replies().never();

        let service = GetThreadDetailService::new(
            available_thread_repo(),
            comment_repository,
            reply_repository,
            user_repo(),
        );

        let result = service.execute("thread-123").await;

        assert!(matches!(result, Err(GetThreadDetailError::RepositoryError(_))));
    }
}
