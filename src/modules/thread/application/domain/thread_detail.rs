//! Read-side aggregation of a thread with its comments and replies.
//!
//! Inputs are flat, already redacted and already enriched with usernames;
//! the assembler only reshapes them into the nested response tree.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct DetailThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailComment {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailReply {
    pub id: String,
    pub comment_id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

#[derive(Debug, Clone, Default)]
pub struct ThreadDetailPayload {
    pub thread: Option<DetailThread>,
    pub comments: Option<Vec<DetailComment>>,
    pub replies: Option<Vec<DetailReply>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThreadDetailError {
    #[error("Thread detail needs a thread, its comments and its replies")]
    MissingProperty,
}

impl ThreadDetailError {
    pub fn code(&self) -> &'static str {
        match self {
            ThreadDetailError::MissingProperty => "THREAD_DETAIL.NOT_CONTAIN_NEEDED_PROPERTY",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Output shape
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadDetailView {
    pub thread: ThreadView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadView {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentView {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub replies: Vec<ReplyView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyView {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

//
// ──────────────────────────────────────────────────────────
// Assembler
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ThreadDetail {
    thread: DetailThread,
    comments: Vec<DetailComment>,
    replies: Vec<DetailReply>,
}

impl ThreadDetail {
    pub fn new(payload: ThreadDetailPayload) -> Result<Self, ThreadDetailError> {
        match payload {
            ThreadDetailPayload {
                thread: Some(thread),
                comments: Some(comments),
                replies: Some(replies),
            } => Ok(Self {
                thread,
                comments,
                replies,
            }),
            _ => Err(ThreadDetailError::MissingProperty),
        }
    }

    /// Nests every reply under the comment it belongs to.
    ///
    /// Comment order and the relative order of replies within a comment are
    /// kept as given. Replies pointing at a comment outside the list are
    /// dropped.
    pub fn formatted_detail(self) -> ThreadDetailView {
        let mut replies_by_comment: HashMap<String, Vec<ReplyView>> = HashMap::new();
        for reply in self.replies {
            replies_by_comment
                .entry(reply.comment_id)
                .or_default()
                .push(ReplyView {
                    id: reply.id,
                    content: reply.content,
                    date: reply.date,
                    username: reply.username,
                });
        }

        let comments = self
            .comments
            .into_iter()
            .map(|comment| CommentView {
                replies: replies_by_comment.remove(&comment.id).unwrap_or_default(),
                id: comment.id,
                username: comment.username,
                date: comment.date,
                content: comment.content,
            })
            .collect();

        let DetailThread {
            id,
            title,
            body,
            date,
            username,
        } = self.thread;

        ThreadDetailView {
            thread: ThreadView {
                id,
                title,
                body,
                date,
                username,
                comments,
            },
        }
    }
}
