use async_trait::async_trait;
use serde_json::Value;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::{
    domain::entities::{AddedComment, CreateComment},
    ports::incoming::use_cases::{
        AddCommentError, AddCommentUseCase, DeleteCommentError, DeleteCommentUseCase,
    },
};
use crate::reply::application::{
    domain::entities::{AddedReply, CreateReply},
    ports::incoming::use_cases::{AddReplyError, AddReplyUseCase, DeleteReplyError, DeleteReplyUseCase},
};
use crate::thread::application::{
    domain::{
        entities::{AddedThread, CreateThread},
        thread_detail::ThreadDetailView,
    },
    ports::incoming::use_cases::{
        AddThreadError, AddThreadUseCase, GetThreadDetailError, GetThreadDetailUseCase,
    },
};

// Add stubs run the real payload validator, then echo a fixed id.

#[derive(Default, Clone)]
pub struct StubAddThreadUseCase {
    error: Option<AddThreadError>,
}

impl StubAddThreadUseCase {
    pub fn failing(error: AddThreadError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl AddThreadUseCase for StubAddThreadUseCase {
    async fn execute(&self, owner: UserId, payload: Value) -> Result<AddedThread, AddThreadError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let data = CreateThread::from_payload(&payload)?;
        Ok(AddedThread {
            id: "thread-123".to_string(),
            title: data.title().to_string(),
            owner,
        })
    }
}

#[derive(Clone)]
pub struct StubGetThreadDetailUseCase {
    result: Result<ThreadDetailView, GetThreadDetailError>,
}

impl StubGetThreadDetailUseCase {
    pub fn success(view: ThreadDetailView) -> Self {
        Self { result: Ok(view) }
    }

    pub fn failing(error: GetThreadDetailError) -> Self {
        Self { result: Err(error) }
    }
}

impl Default for StubGetThreadDetailUseCase {
    fn default() -> Self {
        Self::failing(GetThreadDetailError::ThreadNotFound)
    }
}

#[async_trait]
impl GetThreadDetailUseCase for StubGetThreadDetailUseCase {
    async fn execute(&self, _thread_id: &str) -> Result<ThreadDetailView, GetThreadDetailError> {
        self.result.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubAddCommentUseCase {
    error: Option<AddCommentError>,
}

impl StubAddCommentUseCase {
    pub fn failing(error: AddCommentError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl AddCommentUseCase for StubAddCommentUseCase {
    async fn execute(
        &self,
        owner: UserId,
        _thread_id: &str,
        payload: Value,
    ) -> Result<AddedComment, AddCommentError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let data = CreateComment::from_payload(&payload)?;
        Ok(AddedComment {
            id: "comment-123".to_string(),
            content: data.content().to_string(),
            owner,
        })
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCommentUseCase {
    error: Option<DeleteCommentError>,
}

impl StubDeleteCommentUseCase {
    pub fn failing(error: DeleteCommentError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl DeleteCommentUseCase for StubDeleteCommentUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _thread_id: &str,
        _comment_id: &str,
    ) -> Result<(), DeleteCommentError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[derive(Default, Clone)]
pub struct StubAddReplyUseCase {
    error: Option<AddReplyError>,
}

impl StubAddReplyUseCase {
    pub fn failing(error: AddReplyError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl AddReplyUseCase for StubAddReplyUseCase {
    async fn execute(
        &self,
        owner: UserId,
        _thread_id: &str,
        _comment_id: &str,
        payload: Value,
    ) -> Result<AddedReply, AddReplyError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let data = CreateReply::from_payload(&payload)?;
        Ok(AddedReply {
            id: "reply-123".to_string(),
            content: data.content().to_string(),
            owner,
        })
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteReplyUseCase {
    error: Option<DeleteReplyError>,
}

impl StubDeleteReplyUseCase {
    pub fn failing(error: DeleteReplyError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl DeleteReplyUseCase for StubDeleteReplyUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _thread_id: &str,
        _comment_id: &str,
        _reply_id: &str,
    ) -> Result<(), DeleteReplyError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
