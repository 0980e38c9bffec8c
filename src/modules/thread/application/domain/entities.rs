use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::{
    auth::application::domain::entities::UserId,
    shared::payload::{required_strings, FieldError},
};

/// Stored thread row.
#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub owner: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateThreadError {
    #[error("Thread payload is missing title or body")]
    MissingProperty,

    #[error("Thread title and body must be strings")]
    InvalidType,
}

impl CreateThreadError {
    pub fn code(&self) -> &'static str {
        match self {
            CreateThreadError::MissingProperty => "THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
            CreateThreadError::InvalidType => "THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION",
        }
    }
}

/// Validated input for a new thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateThread {
    title: String,
    body: String,
}

impl CreateThread {
    pub fn from_payload(payload: &Value) -> Result<Self, CreateThreadError> {
        let [title, body] = required_strings(payload, ["title", "body"]).map_err(|e| match e {
            FieldError::Missing => CreateThreadError::MissingProperty,
            FieldError::InvalidType => CreateThreadError::InvalidType,
        })?;

        Ok(Self {
            title: title.to_string(),
            body: body.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: UserId,
}
