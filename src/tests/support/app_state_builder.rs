use actix_web::web;
use std::sync::Arc;

use crate::comment::application::{
    comment_use_cases::CommentUseCases,
    ports::incoming::use_cases::{AddCommentUseCase, DeleteCommentUseCase},
};
use crate::reply::application::{
    ports::incoming::use_cases::{AddReplyUseCase, DeleteReplyUseCase},
    reply_use_cases::ReplyUseCases,
};
use crate::tests::support::stubs::*;
use crate::thread::application::{
    ports::incoming::use_cases::{AddThreadUseCase, GetThreadDetailUseCase},
    thread_use_cases::ThreadUseCases,
};
use crate::AppState;

pub struct TestAppStateBuilder {
    thread: ThreadUseCases,
    comment: CommentUseCases,
    reply: ReplyUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            thread: ThreadUseCases {
                add: Arc::new(StubAddThreadUseCase::default()),
                get_detail: Arc::new(StubGetThreadDetailUseCase::default()),
            },
            comment: CommentUseCases {
                add: Arc::new(StubAddCommentUseCase::default()),
                delete: Arc::new(StubDeleteCommentUseCase::default()),
            },
            reply: ReplyUseCases {
                add: Arc::new(StubAddReplyUseCase::default()),
                delete: Arc::new(StubDeleteReplyUseCase::default()),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_add_thread(mut self, uc: impl AddThreadUseCase + Send + Sync + 'static) -> Self {
        self.thread.add = Arc::new(uc);
        self
    }

    pub fn with_get_thread_detail(
        mut self,
        uc: impl GetThreadDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.thread.get_detail = Arc::new(uc);
        self
    }

    pub fn with_add_comment(mut self, uc: impl AddCommentUseCase + Send + Sync + 'static) -> Self {
        self.comment.add = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(
        mut self,
        uc: impl DeleteCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.delete = Arc::new(uc);
        self
    }

    pub fn with_add_reply(mut self, uc: impl AddReplyUseCase + Send + Sync + 'static) -> Self {
        self.reply.add = Arc::new(uc);
        self
    }

    pub fn with_delete_reply(
        mut self,
        uc: impl DeleteReplyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.reply.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            thread: self.thread,
            comment: self.comment,
            reply: self.reply,
        })
    }
}
