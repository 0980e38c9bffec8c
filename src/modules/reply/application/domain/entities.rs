use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::{
    auth::application::domain::entities::UserId,
    shared::payload::{required_strings, FieldError},
};

/// Shown instead of the content of a soft-deleted reply.
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

/// Reply row as listed for a thread, tagged with the comment it answers.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadReply {
    pub id: String,
    pub comment_id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub owner: UserId,
    pub is_deleted: bool,
}

impl ThreadReply {
    pub fn displayed_content(&self) -> &str {
        if self.is_deleted {
            DELETED_REPLY_CONTENT
        } else {
            &self.content
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateReplyError {
    #[error("Reply payload is missing content")]
    MissingProperty,

    #[error("Reply content must be a string")]
    InvalidType,
}

impl CreateReplyError {
    pub fn code(&self) -> &'static str {
        match self {
            CreateReplyError::MissingProperty => "CREATE_REPLY.NOT_CONTAIN_NEEDED_PROPERTY",
            CreateReplyError::InvalidType => "CREATE_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReply {
    content: String,
}

impl CreateReply {
    pub fn from_payload(payload: &Value) -> Result<Self, CreateReplyError> {
        let [content] = required_strings(payload, ["content"]).map_err(|e| match e {
            FieldError::Missing => CreateReplyError::MissingProperty,
            FieldError::InvalidType => CreateReplyError::InvalidType,
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
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: UserId,
}
