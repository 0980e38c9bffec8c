use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::{
    auth::application::domain::entities::UserId,
    shared::payload::{required_strings, FieldError},
};

/// Shown instead of the content of a soft-deleted comment.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

/// Comment row as listed for a thread, soft-deleted ones included.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadComment {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub owner: UserId,
    pub is_deleted: bool,
}

impl ThreadComment {
    /// Content as it may be rendered; stored content stays untouched.
    pub fn displayed_content(&self) -> &str {
        if self.is_deleted {
            DELETED_COMMENT_CONTENT
        } else {
            &self.content
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateCommentError {
    #[error("Comment payload is missing content")]
    MissingProperty,

    #[error("Comment content must be a string")]
    InvalidType,
}

impl CreateCommentError {
    pub fn code(&self) -> &'static str {
        match self {
            CreateCommentError::MissingProperty => "COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
            CreateCommentError::InvalidType => "COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateComment {
    content: String,
}

impl CreateComment {
    pub fn from_payload(payload: &Value) -> Result<Self, CreateCommentError> {
        let [content] = required_strings(payload, ["content"]).map_err(|e| match e {
            FieldError::Missing => CreateCommentError::MissingProperty,
            FieldError::InvalidType => CreateCommentError::InvalidType,
        })?;

        Ok(Self {
            content: content.to_string(),
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: UserId,
}
